use crate::consts::*;
use crate::errors::*;
use crate::util::*;

use std::fs::File;
use std::io::{self, Cursor, Write};
use std::os::fd::{IntoRawFd, OwnedFd};
use std::path::{Path, PathBuf};

use nix::unistd::close as close_fd;
use rustix::fs::{CWD, Mode, OFlags, openat};

make_log_macro!(debug, "device");
make_log_macro!(warn, "device");

/// An opened backlight control directory, such as
/// `/sys/class/backlight/intel_backlight`.
///
/// Control files are opened relative to the directory descriptor, which is
/// released when the handle is dropped.
#[derive(Debug)]
pub struct ControlDirectory {
    path: PathBuf,
    fd: OwnedFd,
}

impl ControlDirectory {
    /// Open and validate the control directory at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let len = path.as_os_str().len();
        if len > MAX_PATH_LEN {
            return Err(BrightlightError::PathTooLong {
                len,
                max: MAX_PATH_LEN,
            });
        }

        let fd = openat(
            CWD,
            path,
            OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC,
            Mode::empty(),
        )
        .map_err(|errno| {
            let source = io::Error::from(errno);
            let path = path.to_path_buf();
            match source.kind() {
                io::ErrorKind::NotFound => BrightlightError::DirectoryNotFound { path },
                io::ErrorKind::NotADirectory => BrightlightError::NotADirectory { path },
                io::ErrorKind::PermissionDenied => BrightlightError::PermissionDenied { path },
                _ => BrightlightError::DirectoryAccess { path, source },
            }
        })?;
        debug!("opened control directory {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            fd,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_file(&self, file: &'static str, flags: OFlags) -> Result<File> {
        openat(&self.fd, file, flags | OFlags::CLOEXEC, Mode::empty())
            .map(File::from)
            .map_err(|errno| BrightlightError::FileOpen {
                file,
                source: errno.into(),
            })
    }

    /// Read the unsigned decimal value held in `file`.
    pub fn read_value(&self, file: &'static str) -> Result<u32> {
        let mut handle = self.open_file(file, OFlags::RDONLY)?;
        let mut buf = [0u8; READ_BUFFER_LEN];
        let read = read_retrying(&mut handle, &mut buf);
        close(handle, file);
        let len = read.map_err(|source| BrightlightError::FileRead { file, source })?;

        let value = parse_value(file, &buf[..len])?;
        debug!("read {value} from {}/{file}", self.path.display());
        Ok(value)
    }

    /// Write `value` to `file` as newline terminated decimal text.
    pub fn write_value(&self, file: &'static str, value: u32) -> Result<()> {
        let mut buf = [0u8; WRITE_BUFFER_LEN];
        let text = format_value(value, &mut buf)?;

        let mut handle = self.open_file(file, OFlags::RDWR | OFlags::TRUNC)?;
        let written = write_all_retrying(&mut handle, text);
        close(handle, file);
        written.map_err(|source| BrightlightError::FileWrite { file, source })?;

        debug!("wrote {value} to {}/{file}", self.path.display());
        Ok(())
    }
}

/// Close `handle`, reporting but otherwise ignoring a failure.
fn close(handle: File, file: &str) {
    if let Err(errno) = close_fd(handle.into_raw_fd()) {
        warn!("Failed to close {file} file: {errno}");
    }
}

fn parse_value(file: &'static str, text: &[u8]) -> Result<u32> {
    let digits = leading_digits(text);
    if digits.is_empty() {
        return Err(BrightlightError::InvalidFileContent {
            file,
            reason: "no decimal value found".into(),
        });
    }
    // `digits` is ASCII, so the lossy conversion is exact.
    String::from_utf8_lossy(digits)
        .parse()
        .map_err(|e: std::num::ParseIntError| BrightlightError::InvalidFileContent {
            file,
            reason: e.to_string(),
        })
}

fn format_value(value: u32, buf: &mut [u8]) -> Result<&[u8]> {
    let capacity = buf.len();
    let mut cursor = Cursor::new(buf);
    writeln!(cursor, "{value}")
        .map_err(|_| BrightlightError::FormatOverflow { value, capacity })?;
    let len = cursor.position() as usize;
    let buf: &[u8] = cursor.into_inner();
    Ok(&buf[..len])
}
