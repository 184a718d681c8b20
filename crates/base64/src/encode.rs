//! Standard base64 encoding.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Two-symbol lookup table: entry `hi * 64 + lo` holds the symbols for the
/// 12-bit value formed by sextets `hi` and `lo`.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Returns the length of the padded base64 encoding of `length` bytes.
///
/// # Example
///
/// ```
/// use base64_lite::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub const fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

#[inline]
fn push_pair(out: &mut String, v: usize) {
    let [a, b] = TABLE2[v];
    out.push(a as char);
    out.push(b as char);
}

/// Encodes a byte slice to a standard base64 string with `=` padding.
///
/// # Example
///
/// ```
/// use base64_lite::encode;
///
/// assert_eq!(encode(b"hello, world"), "aGVsbG8sIHdvcmxk");
/// assert_eq!(encode(b"some string"), "c29tZSBzdHJpbmc=");
/// assert_eq!(encode(b""), "");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let length = bytes.len();
    let mut out = String::with_capacity(encoded_len(length));

    let mut groups = bytes.chunks_exact(3);
    for group in &mut groups {
        let (o1, o2, o3) = (group[0] as usize, group[1] as usize, group[2] as usize);
        push_pair(&mut out, (o1 << 4) | (o2 >> 4));
        push_pair(&mut out, ((o2 & 0b1111) << 8) | o3);
    }

    match groups.remainder() {
        &[o1] => {
            push_pair(&mut out, (o1 as usize) << 4);
            out.push(PAD);
            out.push(PAD);
        }
        &[o1, o2] => {
            let (o1, o2) = (o1 as usize, o2 as usize);
            push_pair(&mut out, (o1 << 4) | (o2 >> 4));
            out.push(ALPHABET_BYTES[(o2 & 0b1111) << 2] as char);
            out.push(PAD);
        }
        _ => {}
    }

    out
}
