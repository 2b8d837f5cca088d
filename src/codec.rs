use zerocopy::byteorder::{ByteOrder, U16, U32, U64};

pub use zerocopy::byteorder::{BigEndian, LittleEndian, BE, LE};

/// Converts between fixed-size byte arrays and unsigned integers in one byte order.
///
/// `store` followed by `load` on the same bytes returns the original value. The arrays are
/// exactly as wide as the integer, so nothing here can fail; cursors check bounds before
/// calling in.
///
/// Implemented for [`LittleEndian`] and [`BigEndian`]. These are uninhabited marker types,
/// so a codec is chosen by type and never exists as a value.
pub trait Codec {
    /// Decodes a `u16`.
    fn load_u16(bytes: &[u8; 2]) -> u16;
    /// Decodes a `u32`.
    fn load_u32(bytes: &[u8; 4]) -> u32;
    /// Decodes a `u64`.
    fn load_u64(bytes: &[u8; 8]) -> u64;

    /// Encodes a `u16`.
    fn store_u16(value: u16, out: &mut [u8; 2]);
    /// Encodes a `u32`.
    fn store_u32(value: u32, out: &mut [u8; 4]);
    /// Encodes a `u64`.
    fn store_u64(value: u64, out: &mut [u8; 8]);
}

impl<O: ByteOrder> Codec for O {
    #[inline(always)]
    fn load_u16(bytes: &[u8; 2]) -> u16 {
        U16::<O>::from_bytes(*bytes).get()
    }

    #[inline(always)]
    fn load_u32(bytes: &[u8; 4]) -> u32 {
        U32::<O>::from_bytes(*bytes).get()
    }

    #[inline(always)]
    fn load_u64(bytes: &[u8; 8]) -> u64 {
        U64::<O>::from_bytes(*bytes).get()
    }

    #[inline(always)]
    fn store_u16(value: u16, out: &mut [u8; 2]) {
        *out = U16::<O>::new(value).to_bytes();
    }

    #[inline(always)]
    fn store_u32(value: u32, out: &mut [u8; 4]) {
        *out = U32::<O>::new(value).to_bytes();
    }

    #[inline(always)]
    fn store_u64(value: u64, out: &mut [u8; 8]) {
        *out = U64::<O>::new(value).to_bytes();
    }
}
