//! Lists the local file headers of a ZIP archive.
//!
//! ```text
//! cargo run --example zip_headers -- archive.zip
//! ```
//!
//! This is intentionally minimal and is not a ZIP parser. It walks local file headers from the
//! start of the file and stops at the first thing that is not one (normally the central
//! directory). Data descriptors, ZIP64 and the central directory are not supported.

use std::process::ExitCode;

use binary_io::{LeReader, OutOfRange};
use bstr::ByteSlice;

const LOCAL_FILE_HEADER_MAGIC: u32 = 0x04034b50;

/// Why a local file header could not be parsed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum HeaderError {
    /// The archive ended in the middle of a header or its payload.
    Truncated,
    /// The next four bytes are not a local file header signature.
    BadMagic(u32),
}

impl From<OutOfRange> for HeaderError {
    fn from(_: OutOfRange) -> Self {
        Self::Truncated
    }
}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truncated => f.write_str("archive is truncated"),
            Self::BadMagic(m) => write!(f, "not a local file header (signature 0x{m:08x})"),
        }
    }
}

/// MS-DOS packed date and time, as stored in ZIP headers.
#[derive(Copy, Clone, Debug)]
struct DosDateTime {
    time: u16,
    date: u16,
}

impl std::fmt::Display for DosDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = (self.time >> 11) & 0x1f;
        let minutes = (self.time >> 5) & 0x3f;
        let seconds = (self.time & 0x1f) * 2;
        let year = ((self.date >> 9) & 0x7f) + 1980;
        let month = (self.date >> 5) & 0x0f;
        let day = self.date & 0x1f;
        write!(
            f,
            "{year}-{month:02}-{day:02} {hours:02}:{minutes:02}:{seconds:02}"
        )
    }
}

#[derive(Debug)]
struct LocalFileHeader {
    version: u16,
    flags: u16,
    compression_method: u16,
    modified: DosDateTime,
    crc32: u32,
    compressed_size: u32,
    uncompressed_size: u32,
    file_name: Vec<u8>,
}

fn read_header(r: &mut LeReader<'_>) -> Result<LocalFileHeader, HeaderError> {
    let magic = r.read_u32()?;
    if magic != LOCAL_FILE_HEADER_MAGIC {
        return Err(HeaderError::BadMagic(magic));
    }

    let version = r.read_u16()?;
    let flags = r.read_u16()?;
    let compression_method = r.read_u16()?;
    let time = r.read_u16()?;
    let date = r.read_u16()?;
    let crc32 = r.read_u32()?;
    let compressed_size = r.read_u32()?;
    let uncompressed_size = r.read_u32()?;
    let file_name_len = r.read_u16()?;
    let extra_len = r.read_u16()?;

    let mut file_name = vec![0u8; usize::from(file_name_len)];
    r.read_bytes(&mut file_name)?;
    r.skip(usize::from(extra_len))?;

    Ok(LocalFileHeader {
        version,
        flags,
        compression_method,
        modified: DosDateTime { time, date },
        crc32,
        compressed_size,
        uncompressed_size,
        file_name,
    })
}

/// Reads one header and skips over its compressed payload. On failure the reader is left
/// where it was.
fn read_entry(r: &mut LeReader<'_>) -> Result<LocalFileHeader, HeaderError> {
    let mut attempt = r.clone();
    let header = read_header(&mut attempt)?;
    attempt.skip(header.compressed_size as usize)?;
    *r = attempt;
    Ok(header)
}

fn print_header(h: &LocalFileHeader) {
    println!("file_name: {}", h.file_name.as_bstr());
    println!("  version: {}", h.version);
    println!("  flags: {:016b}", h.flags);
    println!("  compression_method: {}", h.compression_method);
    println!("  last_modification: {}", h.modified);
    println!("  crc32: {:08x}", h.crc32);
    println!("  compressed_size: {}", h.compressed_size);
    println!("  uncompressed_size: {}", h.uncompressed_size);
}

fn main() -> ExitCode {
    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: zip_headers <archive.zip>");
        return ExitCode::FAILURE;
    };

    let data = match std::fs::read(&path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("{}: {e}", path.to_string_lossy());
            return ExitCode::FAILURE;
        }
    };
    println!("Read {} bytes from {}", data.len(), path.to_string_lossy());

    let mut r = LeReader::new(&data);
    let mut count = 0usize;
    loop {
        match read_entry(&mut r) {
            Ok(header) => {
                print_header(&header);
                count += 1;
            }
            Err(e) => {
                if r.remaining() != 0 {
                    println!("stopped at offset {}: {e}", r.position());
                }
                break;
            }
        }
    }
    println!("{count} local file header(s)");
    ExitCode::SUCCESS
}
