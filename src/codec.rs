// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Byte encodings for identifiers embedded in paged storage.
//!
//! # Fixed width
//!
//! [`FixedCodec`] writes every identifier as 4 big-endian bytes. The width
//! is known without looking at a value, so pages can lay out fixed-size
//! slots. Big-endian keeps byte-wise order equal to identifier order, so
//! encoded keys sort correctly in a B-tree page. Values above `u32::MAX`
//! cannot be encoded.
//!
//! # Variable width
//!
//! [`VarintCodec`] writes unsigned LEB128, 1 to 10 bytes, and covers the
//! whole `u64` range. Small identifiers take one byte.

use crate::error::IdError;
use crate::error::IdResult;
use crate::id::Dbid;

/// Maximum LEB128 length of a u64.
const VARINT_MAX_LEN: usize = 10;

/// Converts values to and from bytes.
pub trait ByteCodec<T> {
    /// Append the encoding of `value` to `out`.
    fn encode(&self, value: &T, out: &mut Vec<u8>) -> IdResult<()>;

    /// Decode one value from the front of `bytes`.
    /// Returns the value and the number of bytes consumed.
    fn decode(&self, bytes: &[u8]) -> IdResult<(T, usize)>;

    /// Number of bytes `encode` writes for `value`.
    fn encoded_len(&self, value: &T) -> usize;
}

/// A codec whose encodings all have the same length.
pub trait FixedWidthCodec<T>: ByteCodec<T> {
    /// Length of every encoding.
    fn fixed_len(&self) -> usize;

    /// Write the encoding of `value` into the start of `slot`.
    fn encode_into(&self, value: &T, slot: &mut [u8]) -> IdResult<()>;
}

/// Fixed 4-byte big-endian identifier codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedCodec;

impl FixedCodec {
    /// Encoding width in bytes.
    pub const WIDTH: usize = 4;

    fn narrow(id: &Dbid) -> IdResult<u32> {
        return u32::try_from(id.value()).map_err(|_| IdError::EncodingOverflow {
            value: id.value(),
            width: FixedCodec::WIDTH,
        });
    }
}

impl ByteCodec<Dbid> for FixedCodec {
    fn encode(&self, value: &Dbid, out: &mut Vec<u8>) -> IdResult<()> {
        let narrow = FixedCodec::narrow(value)?;
        out.extend_from_slice(&narrow.to_be_bytes());
        return Ok(());
    }

    fn decode(&self, bytes: &[u8]) -> IdResult<(Dbid, usize)> {
        let Some(head) = bytes.first_chunk::<{ FixedCodec::WIDTH }>() else {
            return Err(IdError::Truncated {
                needed: FixedCodec::WIDTH,
                available: bytes.len(),
            });
        };
        let value = u32::from_be_bytes(*head);
        return Ok((Dbid::from_raw(value as u64), FixedCodec::WIDTH));
    }

    fn encoded_len(&self, _value: &Dbid) -> usize {
        return FixedCodec::WIDTH;
    }
}

impl FixedWidthCodec<Dbid> for FixedCodec {
    fn fixed_len(&self) -> usize {
        return FixedCodec::WIDTH;
    }

    fn encode_into(&self, value: &Dbid, slot: &mut [u8]) -> IdResult<()> {
        let narrow = FixedCodec::narrow(value)?;
        let available = slot.len();
        let Some(head) = slot.first_chunk_mut::<{ FixedCodec::WIDTH }>() else {
            return Err(IdError::Truncated {
                needed: FixedCodec::WIDTH,
                available,
            });
        };
        *head = narrow.to_be_bytes();
        return Ok(());
    }
}

/// Variable-length (LEB128) identifier codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VarintCodec;

impl ByteCodec<Dbid> for VarintCodec {
    fn encode(&self, value: &Dbid, out: &mut Vec<u8>) -> IdResult<()> {
        let mut rest = value.value();
        loop {
            let byte = (rest & 0x7f) as u8;
            rest >>= 7;
            if rest == 0 {
                out.push(byte);
                return Ok(());
            }
            out.push(byte | 0x80);
        }
    }

    fn decode(&self, bytes: &[u8]) -> IdResult<(Dbid, usize)> {
        let mut value: u64 = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            if i == VARINT_MAX_LEN {
                return Err(IdError::Malformed("varint longer than 10 bytes"));
            }
            let payload = (byte & 0x7f) as u64;
            // The tenth byte may only carry the top bit of a u64.
            if i == VARINT_MAX_LEN - 1 && payload > 1 {
                return Err(IdError::Malformed("varint overflows u64"));
            }
            value |= payload << (7 * i);
            if byte & 0x80 == 0 {
                return Ok((Dbid::from_raw(value), i + 1));
            }
        }
        return Err(IdError::Truncated {
            needed: bytes.len() + 1,
            available: bytes.len(),
        });
    }

    fn encoded_len(&self, value: &Dbid) -> usize {
        let bits = 64 - value.value().leading_zeros() as usize;
        return bits.div_ceil(7).max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u64) -> Dbid {
        return Dbid::from_raw(value);
    }

    #[test]
    fn fixed_layout_is_big_endian() {
        let mut out = Vec::new();
        FixedCodec.encode(&id(0x0102_0304), &mut out).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4]);
        assert_eq!(FixedCodec.fixed_len(), 4);
        assert_eq!(FixedCodec.encoded_len(&id(0)), 4);
    }

    #[test]
    fn fixed_bytes_sort_like_ids() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        FixedCodec.encode(&id(255), &mut a).unwrap();
        FixedCodec.encode(&id(256), &mut b).unwrap();
        assert!(a < b);
    }

    #[test]
    fn fixed_overflow() {
        let mut out = Vec::new();
        let err = FixedCodec.encode(&id(u32::MAX as u64 + 1), &mut out).unwrap_err();
        assert_eq!(err, IdError::EncodingOverflow { value: u32::MAX as u64 + 1, width: 4 });
        assert!(out.is_empty());

        FixedCodec.encode(&id(u32::MAX as u64), &mut out).unwrap();
        assert_eq!(FixedCodec.decode(&out).unwrap(), (id(u32::MAX as u64), 4));
    }

    #[test]
    fn fixed_decode_truncated() {
        let err = FixedCodec.decode(&[0, 1, 2]).unwrap_err();
        assert_eq!(err, IdError::Truncated { needed: 4, available: 3 });
    }

    #[test]
    fn fixed_decode_ignores_trailing_bytes() {
        let (value, used) = FixedCodec.decode(&[0, 0, 0, 9, 0xff]).unwrap();
        assert_eq!(value, id(9));
        assert_eq!(used, 4);
    }

    #[test]
    fn fixed_encode_into_slot() {
        let mut page = [0xaau8; 6];
        FixedCodec.encode_into(&id(7), &mut page[2..]).unwrap();
        assert_eq!(page, [0xaa, 0xaa, 0, 0, 0, 7]);

        let err = FixedCodec.encode_into(&id(7), &mut page[4..]).unwrap_err();
        assert_eq!(err, IdError::Truncated { needed: 4, available: 2 });
    }

    #[test]
    fn varint_lengths() {
        let cases = [(0u64, 1usize), (127, 1), (128, 2), (16_383, 2), (16_384, 3), (u64::MAX, 10)];
        for (value, len) in cases {
            let mut out = Vec::new();
            VarintCodec.encode(&id(value), &mut out).unwrap();
            assert_eq!(out.len(), len, "value {}", value);
            assert_eq!(VarintCodec.encoded_len(&id(value)), len);
            assert_eq!(VarintCodec.decode(&out).unwrap(), (id(value), len));
        }
    }

    #[test]
    fn varint_truncated() {
        let err = VarintCodec.decode(&[0x80, 0x80]).unwrap_err();
        assert_eq!(err, IdError::Truncated { needed: 3, available: 2 });
        assert!(VarintCodec.decode(&[]).is_err());
    }

    #[test]
    fn varint_rejects_overlong() {
        let too_long = [0x80u8; 11];
        assert_eq!(
            VarintCodec.decode(&too_long).unwrap_err(),
            IdError::Malformed("varint longer than 10 bytes"),
        );

        let mut overflow = [0xffu8; 10];
        overflow[9] = 0x02;
        assert_eq!(
            VarintCodec.decode(&overflow).unwrap_err(),
            IdError::Malformed("varint overflows u64"),
        );
    }
}
