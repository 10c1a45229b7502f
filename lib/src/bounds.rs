use thiserror::Error;

use crate::config::Operation;
use crate::scale::Unit;

make_log_macro!(debug, "bounds");

/// A requested change that would leave the device's valid range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundViolation {
    #[error("{value}{unit} is out of range, the maximum is {max}{unit}")]
    OutOfRange { value: u32, max: u32, unit: Unit },

    #[error("{current}{unit} + {delta}{unit} would exceed the maximum of {max}{unit}")]
    AboveMaximum {
        current: u32,
        delta: u32,
        max: u32,
        unit: Unit,
    },

    #[error("{current}{unit} - {delta}{unit} would go below zero")]
    BelowZero { current: u32, delta: u32, unit: Unit },
}

/// Check that `operation` keeps the brightness within `0..=max`.
///
/// `current` and `max` are raw values. Comparisons happen in `unit`, so in
/// percentage mode the current value is converted before it is checked.
pub fn validate(
    operation: Operation,
    current: u32,
    max: u32,
    unit: Unit,
) -> Result<(), BoundViolation> {
    let limit = unit.limit(max);
    match operation {
        Operation::Read | Operation::ReadMax => Ok(()),
        Operation::Write(value) => {
            if value > limit {
                return Err(BoundViolation::OutOfRange {
                    value,
                    max: limit,
                    unit,
                });
            }
            Ok(())
        }
        Operation::Increment(delta) => {
            let current = unit.to_unit(current, max);
            debug!("{current}{unit} + {delta}{unit}, limit {limit}{unit}");
            if u64::from(current) + u64::from(delta) > u64::from(limit) {
                return Err(BoundViolation::AboveMaximum {
                    current,
                    delta,
                    max: limit,
                    unit,
                });
            }
            Ok(())
        }
        Operation::Decrement(delta) => {
            let current = unit.to_unit(current, max);
            debug!("{current}{unit} - {delta}{unit}");
            if current < delta {
                return Err(BoundViolation::BelowZero {
                    current,
                    delta,
                    unit,
                });
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Operation::*;

    #[test]
    fn write_accepts_the_whole_range() {
        assert_eq!(validate(Write(0), 10, 7812, Unit::Raw), Ok(()));
        assert_eq!(validate(Write(7812), 10, 7812, Unit::Raw), Ok(()));
        assert_eq!(validate(Write(100), 10, 7812, Unit::Percent), Ok(()));
    }

    #[test]
    fn write_rejects_values_past_the_limit() {
        assert_eq!(
            validate(Write(7813), 10, 7812, Unit::Raw),
            Err(BoundViolation::OutOfRange {
                value: 7813,
                max: 7812,
                unit: Unit::Raw
            })
        );
        assert_eq!(
            validate(Write(101), 10, 7812, Unit::Percent),
            Err(BoundViolation::OutOfRange {
                value: 101,
                max: 100,
                unit: Unit::Percent
            })
        );
    }

    #[test]
    fn increment_accepts_the_boundary() {
        assert_eq!(validate(Increment(500), 3000, 7812, Unit::Raw), Ok(()));
        assert_eq!(validate(Increment(4812), 3000, 7812, Unit::Raw), Ok(()));
        // 3000 of 7812 is 38%
        assert_eq!(validate(Increment(62), 3000, 7812, Unit::Percent), Ok(()));
    }

    #[test]
    fn increment_rejects_overshoot() {
        assert!(matches!(
            validate(Increment(4813), 3000, 7812, Unit::Raw),
            Err(BoundViolation::AboveMaximum { current: 3000, .. })
        ));
        assert!(matches!(
            validate(Increment(63), 3000, 7812, Unit::Percent),
            Err(BoundViolation::AboveMaximum { current: 38, max: 100, .. })
        ));
    }

    #[test]
    fn increment_does_not_overflow() {
        assert!(validate(Increment(u32::MAX), u32::MAX, u32::MAX, Unit::Raw).is_err());
        assert!(validate(Increment(u32::MAX), 0, 100, Unit::Percent).is_err());
    }

    #[test]
    fn decrement_accepts_reaching_zero() {
        assert_eq!(validate(Decrement(10), 10, 100, Unit::Raw), Ok(()));
        assert_eq!(validate(Decrement(38), 3000, 7812, Unit::Percent), Ok(()));
    }

    #[test]
    fn decrement_rejects_underflow() {
        assert_eq!(
            validate(Decrement(20), 10, 100, Unit::Raw),
            Err(BoundViolation::BelowZero {
                current: 10,
                delta: 20,
                unit: Unit::Raw
            })
        );
        assert!(validate(Decrement(39), 3000, 7812, Unit::Percent).is_err());
    }

    #[test]
    fn reads_are_always_in_range() {
        assert_eq!(validate(Read, 0, 1, Unit::Percent), Ok(()));
        assert_eq!(validate(ReadMax, 0, 1, Unit::Raw), Ok(()));
    }

    #[test]
    fn messages_carry_units() {
        let err = validate(Increment(63), 3000, 7812, Unit::Percent).unwrap_err();
        assert_eq!(
            err.to_string(),
            "38% + 63% would exceed the maximum of 100%"
        );
        let err = validate(Decrement(20), 10, 100, Unit::Raw).unwrap_err();
        assert_eq!(err.to_string(), "10 - 20 would go below zero");
    }
}
