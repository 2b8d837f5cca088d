use core::marker::PhantomData;

use crate::codec::{BigEndian, Codec, LittleEndian};
use crate::status::{OutOfRange, Result, Status};

/// A [`ByteReader`] that decodes little-endian values.
pub type LeReader<'a> = ByteReader<'a, LittleEndian>;

/// A [`ByteReader`] that decodes big-endian values.
pub type BeReader<'a> = ByteReader<'a, BigEndian>;

/// Reads fixed-width values from a slice of bytes, advancing a cursor as it goes.
///
/// Multi-byte values are decoded using the byte order `O`. Byte spans are returned or copied
/// verbatim, without any byte-order transform.
///
/// If a `read_*` method fails, it returns `Err(OutOfRange)` and the reader is unchanged: the
/// position does not move and no partial value is produced. This makes it safe to retry a
/// failed read after the caller has found more data, or to fall back to a different parse.
///
/// The reader borrows the slice and never copies it. Cloning a reader snapshots its cursor.
pub struct ByteReader<'a, O> {
    /// The bytes that have not been consumed yet. Each successful read reassigns `data` to the
    /// remaining tail.
    data: &'a [u8],
    size: usize,
    order: PhantomData<O>,
}

impl<'a, O> Clone for ByteReader<'a, O> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            size: self.size,
            order: PhantomData,
        }
    }
}

impl<'a, O> core::fmt::Debug for ByteReader<'a, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteReader")
            .field("position", &(self.size - self.data.len()))
            .field("remaining", &self.data.len())
            .finish()
    }
}

impl<'a, O: Codec> ByteReader<'a, O> {
    /// Creates a reader positioned at the start of `data`. An empty slice is allowed; the
    /// resulting reader is already exhausted.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            size: data.len(),
            order: PhantomData,
        }
    }

    /// Number of bytes that have not been read yet.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes consumed so far. `position() + remaining() == size()` always holds.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.size - self.data.len()
    }

    /// Length of the slice the reader was created over.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The bytes that have not been read yet. Does not advance the reader.
    pub fn rest(&self) -> &'a [u8] {
        self.data
    }

    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them.
    ///
    /// `len == 0` always succeeds, even when the reader is exhausted.
    #[inline(always)]
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.data.len() < len {
            Err(OutOfRange)
        } else {
            let (lo, hi) = self.data.split_at(len);
            self.data = hi;
            Ok(lo)
        }
    }

    /// Copies the next `out.len()` bytes into `out`.
    ///
    /// If fewer bytes remain, `out` is left as it was.
    pub fn read_bytes(&mut self, out: &mut [u8]) -> Status {
        let src = self.read_slice(out.len())?;
        out.copy_from_slice(src);
        Ok(())
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let Some((lo, hi)) = self.data.split_first_chunk::<N>() else {
            return Err(OutOfRange);
        };
        self.data = hi;
        Ok(*lo)
    }

    /// Advances past `len` bytes without reading them. `len == 0` always succeeds.
    pub fn skip(&mut self, len: usize) -> Status {
        self.read_slice(len).map(|_| ())
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        if let Some((&value, hi)) = self.data.split_first() {
            self.data = hi;
            Ok(value)
        } else {
            Err(OutOfRange)
        }
    }

    /// Reads a `u16`.
    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(O::load_u16(&self.read_array()?))
    }

    /// Reads a `u32`.
    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(O::load_u32(&self.read_array()?))
    }

    /// Reads a `u64`.
    #[inline(always)]
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(O::load_u64(&self.read_array()?))
    }

    /// Reads an `i8`, reinterpreting the byte as two's complement.
    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads an `i16`, reinterpreting the bits of a `u16` as two's complement.
    #[inline(always)]
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads an `i32`, reinterpreting the bits of a `u32` as two's complement.
    #[inline(always)]
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads an `i64`, reinterpreting the bits of a `u64` as two's complement.
    #[inline(always)]
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Reads an `f32` from the bits of a `u32`.
    ///
    /// The bits are used as-is, so NaN payloads, signed zero, infinities and subnormals come
    /// back exactly as they were written.
    #[inline(always)]
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads an `f64` from the bits of a `u64`. See [`Self::read_f32`].
    #[inline(always)]
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Reads a `bool` encoded as one byte. Any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads `len` bytes and returns them as a `bstr::BStr`, without copying or validating them.
    #[cfg(feature = "bstr")]
    pub fn read_bstr(&mut self, len: usize) -> Result<&'a bstr::BStr> {
        Ok(bstr::BStr::new(self.read_slice(len)?))
    }
}
