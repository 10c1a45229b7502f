/// Location of backlight devices
pub const DEVICES_PATH: &str = "/sys/class/backlight";

/// Control directory used when none is given
pub const DEFAULT_CONTROL_DIR: &str = "/sys/class/backlight/intel_backlight";

/// Filename for device's max brightness
pub const FILE_MAX_BRIGHTNESS: &str = "max_brightness";

/// Filename for the current brightness, read and written.
pub const FILE_BRIGHTNESS: &str = "brightness";

/// Longest control directory path accepted, in bytes.
pub const MAX_PATH_LEN: usize = 200;

/// Bytes read from a control file before parsing.
pub const READ_BUFFER_LEN: usize = 200;

/// Bytes available for the formatted value written to a control file.
pub const WRITE_BUFFER_LEN: usize = 16;

/// Upper bound of the percentage scale.
pub const PERCENT_MAX: u32 = 100;
