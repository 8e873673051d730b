//! Hex dump helper for wire-level tracing

use std::io::{self, Write};

const BYTES_PER_ROW: usize = 16;

/// Write an annotated hex/ASCII dump of `bytes` to `out`.
///
/// One header line with `msg` and the byte count, then rows of sixteen bytes
/// each: offset, hex pairs, and the printable-ASCII rendering. Intended for
/// dumping protocol frames next to the log stream while debugging; callers
/// on diagnostic paths usually discard the result.
///
/// ```
/// let mut out = Vec::new();
/// ldcp_logging::dump_bytes(&mut out, "REQ header", &[0x80, 0x57, 0x00, 0x02]).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("REQ header (4 bytes)"));
/// ```
pub fn dump_bytes<W: Write>(out: &mut W, msg: &str, bytes: &[u8]) -> io::Result<()> {
    writeln!(out, "{} ({} bytes)", msg, bytes.len())?;

    for (row, chunk) in bytes.chunks(BYTES_PER_ROW).enumerate() {
        write!(out, "{:08x}  ", row * BYTES_PER_ROW)?;

        for col in 0..BYTES_PER_ROW {
            match chunk.get(col) {
                Some(b) => write!(out, "{:02x} ", b)?,
                None => write!(out, "   ")?,
            }
            if col == BYTES_PER_ROW / 2 - 1 {
                write!(out, " ")?;
            }
        }

        write!(out, " |")?;
        for b in chunk {
            let c = if b.is_ascii_graphic() || *b == b' ' {
                *b as char
            } else {
                '.'
            };
            write!(out, "{}", c)?;
        }
        writeln!(out, "|")?;
    }

    Ok(())
}
