use core::marker::PhantomData;

use crate::codec::{BigEndian, Codec, LittleEndian};
use crate::status::{OutOfRange, Result, Status};

/// A [`ByteWriter`] that encodes little-endian values.
pub type LeWriter<'a> = ByteWriter<'a, LittleEndian>;

/// A [`ByteWriter`] that encodes big-endian values.
pub type BeWriter<'a> = ByteWriter<'a, BigEndian>;

/// Encodes fixed-width values into a caller-provided buffer.
///
/// The writer never grows the buffer. A `write_*` call that does not fit returns
/// `Err(OutOfRange)` and leaves both the buffer contents and the cursor exactly as they were;
/// no byte is written past the end of the buffer, not even temporarily.
pub struct ByteWriter<'a, O> {
    /// The output buffer. Bytes in `buf[..pos]` have been written or skipped.
    buf: &'a mut [u8],
    pos: usize,
    order: PhantomData<O>,
}

impl<'a, O> core::fmt::Debug for ByteWriter<'a, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteWriter")
            .field("position", &self.pos)
            .field("remaining", &(self.buf.len() - self.pos))
            .finish()
    }
}

impl<'a, O: Codec> ByteWriter<'a, O> {
    /// Creates a writer positioned at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            order: PhantomData,
        }
    }

    /// Number of bytes that can still be written.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Number of bytes written or skipped so far.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Length of the buffer the writer was created over.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// The part of the buffer before the cursor.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Consumes the writer and returns the part of the buffer before the cursor.
    pub fn into_written(self) -> &'a mut [u8] {
        let Self { buf, pos, .. } = self;
        &mut buf[..pos]
    }

    /// Bounds-checks `len` bytes and advances over them, returning them for the caller to fill.
    #[inline(always)]
    fn claim(&mut self, len: usize) -> Result<&mut [u8]> {
        if self.remaining() < len {
            return Err(OutOfRange);
        }
        let start = self.pos;
        self.pos += len;
        Ok(&mut self.buf[start..start + len])
    }

    #[inline(always)]
    fn claim_array<const N: usize>(&mut self) -> Result<&mut [u8; N]> {
        let start = self.pos;
        let chunk = self.buf[start..]
            .first_chunk_mut::<N>()
            .ok_or(OutOfRange)?;
        self.pos = start + N;
        Ok(chunk)
    }

    /// Writes `bytes` verbatim. An empty slice always succeeds.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Status {
        self.claim(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Writes a small, fixed-size array of bytes.
    #[inline(always)]
    pub fn write_array<const N: usize>(&mut self, value: [u8; N]) -> Status {
        *self.claim_array()? = value;
        Ok(())
    }

    /// Advances past `len` bytes, leaving their current contents in place.
    /// `len == 0` always succeeds.
    pub fn skip(&mut self, len: usize) -> Status {
        self.claim(len).map(|_| ())
    }

    /// Writes a single `u8` value
    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) -> Status {
        self.write_array([value])
    }

    /// Writes a single `u16` value
    #[inline(always)]
    pub fn write_u16(&mut self, value: u16) -> Status {
        O::store_u16(value, self.claim_array()?);
        Ok(())
    }

    /// Writes a single `u32` value
    #[inline(always)]
    pub fn write_u32(&mut self, value: u32) -> Status {
        O::store_u32(value, self.claim_array()?);
        Ok(())
    }

    /// Writes a single `u64` value
    #[inline(always)]
    pub fn write_u64(&mut self, value: u64) -> Status {
        O::store_u64(value, self.claim_array()?);
        Ok(())
    }

    /// Writes a single `i8` value
    #[inline(always)]
    pub fn write_i8(&mut self, value: i8) -> Status {
        self.write_u8(value as u8)
    }

    /// Writes a single `i16` value
    #[inline(always)]
    pub fn write_i16(&mut self, value: i16) -> Status {
        self.write_u16(value as u16)
    }

    /// Writes a single `i32` value
    #[inline(always)]
    pub fn write_i32(&mut self, value: i32) -> Status {
        self.write_u32(value as u32)
    }

    /// Writes a single `i64` value
    #[inline(always)]
    pub fn write_i64(&mut self, value: i64) -> Status {
        self.write_u64(value as u64)
    }

    /// Writes a `bool` value. True is encoded as 1. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) -> Status {
        self.write_u8(value as u8)
    }

    /// Writes an `f32` value as the 4 bytes of its bit pattern. NaN payloads and the sign of
    /// zero are kept.
    #[inline(always)]
    pub fn write_f32(&mut self, value: f32) -> Status {
        self.write_u32(value.to_bits())
    }

    /// Writes an `f64` value as the 8 bytes of its bit pattern.
    #[inline(always)]
    pub fn write_f64(&mut self, value: f64) -> Status {
        self.write_u64(value.to_bits())
    }
}
