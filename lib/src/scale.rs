use std::fmt;

use crate::consts::PERCENT_MAX;

/// Units in which brightness values are read from and reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// The device's own `0..=max_brightness` scale.
    #[default]
    Raw,
    /// `0..=100` percent of `max_brightness`.
    Percent,
}

impl Unit {
    pub fn from_percentage(percentage: bool) -> Self {
        if percentage {
            Self::Percent
        } else {
            Self::Raw
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Raw => "",
            Self::Percent => "%",
        }
    }

    /// Largest value expressible in this unit for a device with `max`.
    pub fn limit(self, max: u32) -> u32 {
        match self {
            Self::Raw => max,
            Self::Percent => PERCENT_MAX,
        }
    }

    /// Convert a raw value into this unit.
    pub fn to_unit(self, raw: u32, max: u32) -> u32 {
        match self {
            Self::Raw => raw,
            Self::Percent => to_percent(raw, max),
        }
    }

    /// Convert a value in this unit into a raw value.
    pub fn to_raw(self, value: u32, max: u32) -> u32 {
        match self {
            Self::Raw => value,
            Self::Percent => to_raw(value, max),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

// Round half up, as in (n + d/2) / d.
fn div_round(numerator: u64, denominator: u64) -> u32 {
    let quotient = (numerator + denominator / 2) / denominator;
    u32::try_from(quotient).unwrap_or(u32::MAX)
}

/// Percentage of `max` that `raw` represents, rounded half up.
///
/// `max` must not be zero.
pub fn to_percent(raw: u32, max: u32) -> u32 {
    div_round(u64::from(raw) * u64::from(PERCENT_MAX), u64::from(max))
}

/// Raw value corresponding to `percent` of `max`, rounded half up.
pub fn to_raw(percent: u32, max: u32) -> u32 {
    div_round(u64::from(percent) * u64::from(max), u64::from(PERCENT_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_endpoints() {
        for max in [1, 7, 100, 255, 7812, 120000, u32::MAX] {
            assert_eq!(to_percent(0, max), 0);
            assert_eq!(to_percent(max, max), 100);
            assert_eq!(to_raw(0, max), 0);
            assert_eq!(to_raw(100, max), max);
        }
    }

    #[test]
    fn rounds_half_up_rather_than_truncating() {
        // 300000 / 7812 = 38.40
        assert_eq!(to_percent(3000, 7812), 38);
        // 50 * 7812 / 100 = 3906 exactly
        assert_eq!(to_raw(50, 7812), 3906);
        // 1 * 7812 / 100 = 78.12
        assert_eq!(to_raw(1, 7812), 78);
        // 3 * 255 / 100 = 7.65
        assert_eq!(to_raw(3, 255), 8);
        // 2 * 100 / 255 = 0.78
        assert_eq!(to_percent(2, 255), 1);
        // 1 * 100 / 200 = 0.5
        assert_eq!(to_percent(1, 200), 1);
        // 1 * 100 / 201 = 0.4975
        assert_eq!(to_percent(1, 201), 0);
    }

    #[test]
    fn percent_never_exceeds_one_hundred() {
        for max in [1, 3, 7, 99, 101, 255, 937, 7812] {
            for raw in 0..=max {
                assert!(to_percent(raw, max) <= 100, "raw {raw} max {max}");
            }
        }
    }

    #[test]
    fn round_trip_stays_within_one_unit() {
        for max in 1..=100 {
            for raw in 0..=max {
                let back = to_raw(to_percent(raw, max), max);
                assert!(back.abs_diff(raw) <= 1, "raw {raw} max {max} came back as {back}");
            }
        }
    }

    #[test]
    fn unit_conversions() {
        assert_eq!(Unit::Raw.to_unit(3000, 7812), 3000);
        assert_eq!(Unit::Percent.to_unit(3000, 7812), 38);
        assert_eq!(Unit::Raw.to_raw(50, 7812), 50);
        assert_eq!(Unit::Percent.to_raw(50, 7812), 3906);
        assert_eq!(Unit::Raw.limit(7812), 7812);
        assert_eq!(Unit::Percent.limit(7812), 100);
        assert_eq!(Unit::from_percentage(true), Unit::Percent);
        assert_eq!(Unit::Percent.to_string(), "%");
        assert_eq!(Unit::Raw.to_string(), "");
    }
}
