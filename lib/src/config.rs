use crate::consts::*;
use crate::errors::*;
use crate::scale::Unit;

use std::fs::read_dir;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use smart_default::SmartDefault;

make_log_macro!(debug, "config");

/// The single action performed by one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault)]
pub enum Operation {
    /// Report the current brightness.
    #[default]
    Read,
    /// Set the brightness to the given value.
    Write(u32),
    /// Raise the brightness by the given amount.
    Increment(u32),
    /// Lower the brightness by the given amount.
    Decrement(u32),
    /// Report `max_brightness`.
    ReadMax,
}

/// Everything needed to run one [`Operation`], fixed before it starts.
#[derive(Debug, Clone, PartialEq, Eq, SmartDefault)]
pub struct Config {
    pub operation: Operation,

    /// Interpret and report values as percentages of `max_brightness`.
    pub percentage: bool,

    #[default(PathBuf::from(DEFAULT_CONTROL_DIR))]
    pub control_dir: PathBuf,
}

impl Config {
    pub fn unit(&self) -> Unit {
        Unit::from_percentage(self.percentage)
    }
}

/// Used to construct [`Config`]
#[derive(Default)]
pub struct ConfigBuilder<'a> {
    operation: Operation,
    percentage: bool,
    control_dir: Option<PathBuf>,
    device_regex: Option<&'a str>,
    devices_path: Option<&'a Path>,
}

impl<'a> ConfigBuilder<'a> {
    /// Create a new [`ConfigBuilder`].
    pub fn new() -> Self {
        ConfigBuilder::default()
    }

    /// Defaults to [`Operation::Read`].
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    /// Defaults to `false` (raw units).
    pub fn with_percentage(mut self, percentage: bool) -> Self {
        self.percentage = percentage;
        self
    }

    /// Use this control directory. Takes precedence over a device regex.
    pub fn with_control_dir(mut self, control_dir: impl Into<PathBuf>) -> Self {
        self.control_dir = Some(control_dir.into());
        self
    }

    /// Pick the first device, by name, whose name matches `device_regex`.
    pub fn with_device_regex(mut self, device_regex: &'a str) -> Self {
        self.device_regex = Some(device_regex);
        self
    }

    /// Defaults to [`DEVICES_PATH`].
    pub fn with_devices_path(mut self, devices_path: &'a Path) -> Self {
        self.devices_path = Some(devices_path);
        self
    }

    /// Returns the constructed [`Config`].
    pub fn build(self) -> Result<Config> {
        let control_dir = match (self.control_dir, self.device_regex) {
            (Some(control_dir), _) => control_dir,
            (None, Some(device_regex)) => find_device(
                self.devices_path.unwrap_or(Path::new(DEVICES_PATH)),
                &Regex::new(device_regex)?,
            )?,
            (None, None) => PathBuf::from(DEFAULT_CONTROL_DIR),
        };
        debug!("using control directory {}", control_dir.display());

        Ok(Config {
            operation: self.operation,
            percentage: self.percentage,
            control_dir,
        })
    }
}

fn find_device(devices_path: &Path, device_regex: &Regex) -> Result<PathBuf> {
    let entries = read_dir(devices_path).map_err(|source| {
        let path = devices_path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => BrightlightError::DirectoryNotFound { path },
            _ => BrightlightError::DirectoryAccess { path, source },
        }
    })?;

    let mut device_names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BrightlightError::DirectoryAccess {
            path: devices_path.to_path_buf(),
            source,
        })?;
        let device_name = entry.file_name().to_string_lossy().to_string();
        if device_regex.is_match(&device_name) {
            debug!("{:?} matched {}", device_name, device_regex.as_str());
            device_names.push(device_name);
        }
    }
    device_names.sort();

    device_names
        .into_iter()
        .next()
        .map(|device_name| devices_path.join(device_name))
        .ok_or_else(|| BrightlightError::NoDevices(device_regex.as_str().to_string()))
}
