use std::io::{self, Read, Write};

macro_rules! make_log_macro {
    (@wdoll $macro_name:ident, $block_name:literal, ($dol:tt)) => {
        #[allow(unused_macros)]
        macro_rules! $macro_name {
            ($dol($args:tt)+) => {
                ::log::$macro_name!(target: $block_name, $dol($args)+);
            };
        }
    };
    ($macro_name:ident, $block_name:literal) => {
        make_log_macro!(@wdoll $macro_name, $block_name, ($));
    };
}

make_log_macro!(trace, "io");

fn is_transient(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
    )
}

/// Read into `buf` until it is full or the reader reports end of file.
/// Interrupted and would-block reads are resumed.
pub fn read_retrying<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if is_transient(&e) => {
                trace!("resuming read after {e}");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Write all of `buf`, resuming partial, interrupted and would-block writes.
pub fn write_all_retrying<W: Write>(writer: &mut W, mut buf: &[u8]) -> io::Result<()> {
    while !buf.is_empty() {
        match writer.write(buf) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "no bytes were accepted",
                ));
            }
            Ok(n) => buf = &buf[n..],
            Err(e) if is_transient(&e) => {
                trace!("resuming write after {e}");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// The run of ASCII digits at the start of `text`, after leading whitespace.
pub fn leading_digits(text: &[u8]) -> &[u8] {
    let start = text
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(text.len());
    let text = &text[start..];
    let len = text
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..len]
}
