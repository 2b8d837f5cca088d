/// Result type returned by every `ByteReader` and `ByteWriter` operation.
pub type Result<T> = core::result::Result<T, OutOfRange>;

/// Outcome of an operation that produces no value, such as a write or a skip.
///
/// `status.is_ok()` is the boolean form.
pub type Status = Result<()>;

/// The only error a cursor can report: the requested width or length is larger than the number
/// of bytes that remain.
///
/// A failed operation never consumes input or writes output. It carries no offset or length;
/// use `position()` and `remaining()` on the cursor if you need them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct OutOfRange;

impl core::error::Error for OutOfRange {}

impl core::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("not enough bytes remain in the buffer")
    }
}

#[cfg(feature = "std")]
impl From<OutOfRange> for std::io::Error {
    fn from(e: OutOfRange) -> Self {
        std::io::Error::new(std::io::ErrorKind::UnexpectedEof, e)
    }
}
