//! Walks ZIP local file headers using only `read_u16`, `read_u32`, `read_bytes` and `skip`.

use binary_io::{LeReader, LeWriter, OutOfRange, Status};
use pretty_hex::PrettyHex;

const LOCAL_FILE_HEADER_MAGIC: u32 = 0x04034b50;
const CENTRAL_DIRECTORY_MAGIC: u32 = 0x02014b50;

#[derive(Debug, Eq, PartialEq)]
enum HeaderError {
    Truncated,
    BadMagic(u32),
}

impl From<OutOfRange> for HeaderError {
    fn from(_: OutOfRange) -> Self {
        Self::Truncated
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Entry {
    version: u16,
    flags: u16,
    method: u16,
    time: u16,
    date: u16,
    crc32: u32,
    compressed_size: u32,
    uncompressed_size: u32,
    name: Vec<u8>,
}

fn read_entry(r: &mut LeReader<'_>) -> Result<Entry, HeaderError> {
    let magic = r.read_u32()?;
    if magic != LOCAL_FILE_HEADER_MAGIC {
        return Err(HeaderError::BadMagic(magic));
    }
    let version = r.read_u16()?;
    let flags = r.read_u16()?;
    let method = r.read_u16()?;
    let time = r.read_u16()?;
    let date = r.read_u16()?;
    let crc32 = r.read_u32()?;
    let compressed_size = r.read_u32()?;
    let uncompressed_size = r.read_u32()?;
    let name_len = r.read_u16()?;
    let extra_len = r.read_u16()?;
    let mut name = vec![0u8; name_len as usize];
    r.read_bytes(&mut name)?;
    r.skip(extra_len as usize)?;
    r.skip(compressed_size as usize)?;
    Ok(Entry {
        version,
        flags,
        method,
        time,
        date,
        crc32,
        compressed_size,
        uncompressed_size,
        name,
    })
}

fn write_entry(w: &mut LeWriter<'_>, e: &Entry, extra: &[u8], payload: &[u8]) -> Status {
    w.write_u32(LOCAL_FILE_HEADER_MAGIC)?;
    w.write_u16(e.version)?;
    w.write_u16(e.flags)?;
    w.write_u16(e.method)?;
    w.write_u16(e.time)?;
    w.write_u16(e.date)?;
    w.write_u32(e.crc32)?;
    w.write_u32(e.compressed_size)?;
    w.write_u32(e.uncompressed_size)?;
    w.write_u16(e.name.len() as u16)?;
    w.write_u16(extra.len() as u16)?;
    w.write_bytes(&e.name)?;
    w.write_bytes(extra)?;
    w.write_bytes(payload)
}

fn sample_entries() -> [Entry; 2] {
    [
        Entry {
            version: 20,
            flags: 0,
            method: 0,
            time: 0x6b4a,
            date: 0x5a21,
            crc32: 0x3610a686,
            compressed_size: 5,
            uncompressed_size: 5,
            name: b"hello.txt".to_vec(),
        },
        Entry {
            version: 20,
            flags: 0x0800,
            method: 8,
            time: 0,
            date: 0x0021,
            crc32: 0xdeadbeef,
            compressed_size: 3,
            uncompressed_size: 12,
            name: b"dir/a.bin".to_vec(),
        },
    ]
}

/// Two local entries followed by the start of a central directory record.
fn sample_archive(buf: &mut [u8]) -> usize {
    let entries = sample_entries();
    let mut w = LeWriter::new(buf);
    write_entry(&mut w, &entries[0], &[], b"hello").unwrap();
    write_entry(&mut w, &entries[1], &[0xca, 0xfe, 0x00, 0x00], &[1, 2, 3]).unwrap();
    w.write_u32(CENTRAL_DIRECTORY_MAGIC).unwrap();
    w.write_u16(20).unwrap();
    println!("{}", w.written().hex_dump());
    w.position()
}

#[test]
fn walks_local_headers_until_central_directory() {
    let mut buf = [0u8; 128];
    let len = sample_archive(&mut buf);

    let mut r = LeReader::new(&buf[..len]);
    let expected = sample_entries();
    assert_eq!(read_entry(&mut r), Ok(expected.into_iter().next().unwrap()));
    assert_eq!(r.position(), 30 + 9 + 5);

    let second = read_entry(&mut r).unwrap();
    assert_eq!(second.name, b"dir/a.bin");
    assert_eq!(second.method, 8);
    assert_eq!(second.crc32, 0xdeadbeef);
    assert_eq!(r.position(), 2 * 30 + 9 + 5 + 9 + 4 + 3);

    assert_eq!(
        read_entry(&mut r),
        Err(HeaderError::BadMagic(CENTRAL_DIRECTORY_MAGIC))
    );
    assert_eq!(r.remaining(), 2);
}

#[test]
fn magic_is_little_endian_pk() {
    let mut buf = [0u8; 4];
    let mut w = LeWriter::new(&mut buf);
    w.write_u32(LOCAL_FILE_HEADER_MAGIC).unwrap();
    assert_eq!(&buf, b"PK\x03\x04");
}

#[test]
fn truncated_archive_reports_out_of_range() {
    let mut buf = [0u8; 128];
    let len = sample_archive(&mut buf);

    // Cut inside the fixed header, inside the file name, and inside the payload.
    for cut in [10, 30 + 4, 30 + 9 + 2] {
        let mut r = LeReader::new(&buf[..cut]);
        assert_eq!(read_entry(&mut r), Err(HeaderError::Truncated), "cut = {cut}");
    }

    let mut r = LeReader::new(&buf[..len]);
    assert!(read_entry(&mut r).is_ok());
    assert!(read_entry(&mut r).is_ok());
    let mut tail = LeReader::new(&r.rest()[..3]);
    assert_eq!(read_entry(&mut tail), Err(HeaderError::Truncated));
}

#[test]
fn empty_archive() {
    let mut r = LeReader::new(&[]);
    assert_eq!(read_entry(&mut r), Err(HeaderError::Truncated));
    assert_eq!(r.position(), 0);
}
