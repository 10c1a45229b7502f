#![warn(clippy::match_same_arms)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::unnecessary_wraps)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Read and adjust a Linux backlight through its sysfs control directory.
//!
//! One call to [`execute`] performs one [`Operation`] against the
//! `brightness` and `max_brightness` files of the configured directory.

#[macro_use]
mod util;
mod bounds;
mod config;
mod consts;
mod device;
mod errors;
mod scale;

pub use crate::bounds::BoundViolation;
pub use crate::config::{Config, ConfigBuilder, Operation};
pub use crate::consts::{DEFAULT_CONTROL_DIR, DEVICES_PATH};
pub use crate::device::ControlDirectory;
pub use crate::errors::{BrightlightError, ErrorKind, Result};
pub use crate::scale::{Unit, to_percent, to_raw};

use crate::bounds::validate;
use crate::consts::*;

make_log_macro!(debug, "executor");

/// Outcome of a successful [`execute`], in the units the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Brightness before anything was changed.
    Current { value: u32, unit: Unit },
    /// `max_brightness`, always raw.
    Maximum { value: u32 },
    /// A write went through. `new` is the value that was requested.
    Changed { old: u32, new: u32, unit: Unit },
}

/// Perform `config.operation` on `config.control_dir`.
///
/// Every error is final; nothing is written unless the requested change
/// passed validation.
pub fn execute(config: &Config) -> Result<Report> {
    let unit = config.unit();
    let dir = ControlDirectory::open(&config.control_dir)?;
    debug!("directory validated: {}", dir.path().display());

    let max = dir.read_value(FILE_MAX_BRIGHTNESS)?;
    debug!("max read: {max}");

    if config.operation == Operation::ReadMax {
        return Ok(Report::Maximum { value: max });
    }

    let current = dir.read_value(FILE_BRIGHTNESS)?;
    debug!("current read: {current}");
    let old = unit.to_unit(current, max);

    let (new_raw, new) = match config.operation {
        Operation::Read | Operation::ReadMax => {
            return Ok(Report::Current { value: old, unit });
        }
        Operation::Write(target) => {
            validate(config.operation, current, max, unit)?;
            (unit.to_raw(target, max), target)
        }
        Operation::Increment(delta) => {
            validate(config.operation, current, max, unit)?;
            let raw = current.saturating_add(unit.to_raw(delta, max));
            (clamp_to_max(raw, max), old + delta)
        }
        Operation::Decrement(delta) => {
            validate(config.operation, current, max, unit)?;
            // The percentage delta is rounded on its own, so stop at zero.
            (current.saturating_sub(unit.to_raw(delta, max)), old - delta)
        }
    };
    debug!("validated: {current} -> {new_raw}");

    dir.write_value(FILE_BRIGHTNESS, new_raw)?;
    debug!("written: {new_raw}");

    Ok(Report::Changed { old, new, unit })
}

// A percentage delta is rounded on its own, so `current + delta` can land a
// few raw units past a maximum the percentage check allowed.
fn clamp_to_max(raw: u32, max: u32) -> u32 {
    if raw > max {
        debug!("clamping {raw} to {max}");
        max
    } else {
        raw
    }
}
