//! Hex text <-> byte buffer conversions.
//!
//! Every decoder validates length and digits before writing anything, so
//! malformed input is reported as [`CodecError`] instead of being truncated.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::CodecError;

/// Strip an optional `0x` / `0X` marker.
#[inline]
pub fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode a hex string of any length. An empty string decodes to no bytes.
///
/// Surrounding whitespace is not skipped and counts as a bad digit.
pub fn decode(s: &str) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(strip_0x(s))?)
}

/// Decode a hex string holding at most `max` bytes.
pub fn decode_bounded(s: &str, max: usize) -> Result<Vec<u8>, CodecError> {
    let bytes = decode(s)?;
    if bytes.len() > max {
        return Err(CodecError::TooLong {
            max,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Decode a big-endian value into an `N`-byte buffer.
///
/// Shorter input is right-aligned and zero-padded on the left.
pub fn decode_right_aligned<const N: usize>(s: &str) -> Result<[u8; N], CodecError> {
    let bytes = decode_bounded(s, N)?;
    let mut buf = [0u8; N];
    buf[N - bytes.len()..].copy_from_slice(&bytes);
    Ok(buf)
}

/// Encode bytes as `0x`-prefixed lowercase hex.
pub fn encode_prefixed(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    out.push_str(&hex::encode(bytes));
    out
}

/// Skip leading zero bytes. An all-zero buffer yields an empty slice.
#[inline]
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_accepts_optional_prefix() {
        assert_eq!(decode("0x0102").unwrap(), vec![1, 2]);
        assert_eq!(decode("0XabCD").unwrap(), vec![0xab, 0xcd]);
        assert_eq!(decode("ff").unwrap(), vec![0xff]);
        assert!(decode("").unwrap().is_empty());
        assert!(decode("0x").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert_eq!(decode("abc"), Err(CodecError::InvalidEncoding));
        assert_eq!(decode("0xzz"), Err(CodecError::InvalidEncoding));
        assert_eq!(decode("0x0g"), Err(CodecError::InvalidEncoding));
        assert_eq!(decode(" 0x01"), Err(CodecError::InvalidEncoding));
        assert_eq!(decode("0x01\n"), Err(CodecError::InvalidEncoding));
    }

    #[test]
    fn test_right_aligned() {
        let buf: [u8; 4] = decode_right_aligned("0102").unwrap();
        assert_eq!(buf, [0, 0, 1, 2]);

        let buf: [u8; 4] = decode_right_aligned("").unwrap();
        assert_eq!(buf, [0; 4]);

        let full: [u8; 4] = decode_right_aligned("0xdeadbeef").unwrap();
        assert_eq!(full, [0xde, 0xad, 0xbe, 0xef]);

        let err = decode_right_aligned::<4>("0102030405");
        assert_eq!(err, Err(CodecError::TooLong { max: 4, actual: 5 }));
    }

    #[test]
    fn test_trim_leading_zeros() {
        assert_eq!(trim_leading_zeros(&[0, 0, 1, 2]), &[1, 2]);
        assert_eq!(trim_leading_zeros(&[0, 0, 0]), &[] as &[u8]);
        assert_eq!(trim_leading_zeros(&[5, 0]), &[5, 0]);
    }

    #[test]
    fn test_encode_prefixed() {
        assert_eq!(encode_prefixed(&[0xab, 0x01]), "0xab01");
        assert_eq!(encode_prefixed(&[]), "0x");
    }
}
