//! Allocation-free cursors for decoding and encoding fixed-width values in byte buffers.
//!
//! [`ByteReader`] walks a borrowed `&[u8]` and [`ByteWriter`] walks a borrowed `&mut [u8]`.
//! Both are generic over a byte order ([`LittleEndian`] or [`BigEndian`]), chosen once when the
//! cursor is created. Every operation is bounds-checked and either succeeds completely or fails
//! with [`OutOfRange`] without consuming input, advancing the cursor, or touching the buffer.
//!
//! ```
//! use binary_io::{LeReader, LeWriter};
//!
//! let mut buf = [0u8; 8];
//! let mut w = LeWriter::new(&mut buf);
//! w.write_u32(0x12345678).unwrap();
//! w.write_u32(0xDEADBEEF).unwrap();
//! assert_eq!(buf, [0x78, 0x56, 0x34, 0x12, 0xef, 0xbe, 0xad, 0xde]);
//!
//! let mut r = LeReader::new(&buf);
//! assert_eq!(r.read_u32(), Ok(0x12345678));
//! assert_eq!(r.read_u32(), Ok(0xDEADBEEF));
//! assert!(r.read_u8().is_err());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod codec;
mod reader;
mod status;
mod writer;


pub use codec::{BigEndian, Codec, LittleEndian, BE, LE};
pub use reader::{BeReader, ByteReader, LeReader};
pub use status::{OutOfRange, Result, Status};
pub use writer::{BeWriter, ByteWriter, LeWriter};
