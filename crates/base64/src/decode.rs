//! Standard base64 decoding.

use crate::constants::{DECODE_TABLE, INVALID, PAD_BYTE};
use crate::Base64Error;

#[inline]
fn sextet(byte: u8, offset: usize) -> Result<u8, Base64Error> {
    match DECODE_TABLE[byte as usize] {
        INVALID if byte == PAD_BYTE => Err(Base64Error::InvalidPadding { offset }),
        INVALID => Err(Base64Error::InvalidByte { offset, byte }),
        value => Ok(value),
    }
}

/// Decodes a padded standard base64 string, reporting why malformed input
/// was rejected.
///
/// The input length must be a multiple of 4. Padding may only occupy the
/// last one or two positions of the final quartet. Bits left over in the
/// final quartet are discarded.
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] if the length is not a multiple of 4.
/// - [`Base64Error::InvalidPadding`] if `=` appears anywhere else.
/// - [`Base64Error::InvalidByte`] for bytes outside the alphabet.
///
/// # Example
///
/// ```
/// use base64_lite::{try_decode, Base64Error};
///
/// assert_eq!(try_decode("aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(try_decode("aGVsbG8"), Err(Base64Error::InvalidLength(7)));
/// ```
pub fn try_decode(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let bytes = encoded.as_bytes();
    let length = bytes.len();
    if length == 0 {
        return Ok(Vec::new());
    }
    if !length.is_multiple_of(4) {
        return Err(Base64Error::InvalidLength(length));
    }

    let padding = bytes[length - 2..]
        .iter()
        .rev()
        .take_while(|&&b| b == PAD_BYTE)
        .count();
    let main_length = if padding > 0 { length - 4 } else { length };

    let mut buf = Vec::with_capacity((length >> 2) * 3 - padding);

    for (n, quartet) in bytes[..main_length].chunks_exact(4).enumerate() {
        let i = n * 4;
        let sextet0 = sextet(quartet[0], i)?;
        let sextet1 = sextet(quartet[1], i + 1)?;
        let sextet2 = sextet(quartet[2], i + 2)?;
        let sextet3 = sextet(quartet[3], i + 3)?;

        buf.push((sextet0 << 2) | (sextet1 >> 4));
        buf.push((sextet1 << 4) | (sextet2 >> 2));
        buf.push((sextet2 << 6) | sextet3);
    }

    // Final quartet: data symbols followed by `padding` pad symbols.
    let i = main_length;
    match padding {
        1 => {
            let sextet0 = sextet(bytes[i], i)?;
            let sextet1 = sextet(bytes[i + 1], i + 1)?;
            let sextet2 = sextet(bytes[i + 2], i + 2)?;
            buf.push((sextet0 << 2) | (sextet1 >> 4));
            buf.push((sextet1 << 4) | (sextet2 >> 2));
        }
        2 => {
            let sextet0 = sextet(bytes[i], i)?;
            let sextet1 = sextet(bytes[i + 1], i + 1)?;
            buf.push((sextet0 << 2) | (sextet1 >> 4));
        }
        _ => {}
    }

    Ok(buf)
}

/// Decodes a padded standard base64 string.
///
/// Malformed input of any kind yields an empty vector, so a rejected input is
/// indistinguishable from the encoding of zero bytes. Use [`try_decode`] to
/// tell the two apart.
///
/// # Example
///
/// ```
/// use base64_lite::decode;
///
/// assert_eq!(decode("aGVsbG8sIHdvcmxk"), b"hello, world");
/// assert_eq!(decode("aGVsbG8s,"), b"");
/// ```
pub fn decode(encoded: &str) -> Vec<u8> {
    try_decode(encoded).unwrap_or_else(|err| {
        log::debug!(
            "discarding malformed base64 input ({} bytes): {}",
            encoded.len(),
            err
        );
        Vec::new()
    })
}
