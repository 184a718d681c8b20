//! Standard base64 encoding and decoding.
//!
//! This crate provides a small codec for the RFC 4648 standard alphabet
//! (`A-Z`, `a-z`, `0-9`, `+`, `/`) with `=` padding:
//! - [`encode`] is total over all byte slices
//! - [`decode`] is fail-soft: malformed input decodes to an empty vector
//! - [`try_decode`] performs the same validation but reports the error
//!
//! # Example
//!
//! ```
//! use base64_lite::{decode, encode, try_decode, Base64Error};
//!
//! let data = b"some long string";
//! let encoded = encode(data);
//! assert_eq!(encoded, "c29tZSBsb25nIHN0cmluZw==");
//! assert_eq!(decode(&encoded).as_slice(), data);
//!
//! assert!(decode("c29tZQ,,").is_empty());
//! assert_eq!(
//!     try_decode("c29tZQ,,"),
//!     Err(Base64Error::InvalidByte { offset: 6, byte: b',' })
//! );
//! ```

mod constants;
mod decode;
mod encode;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use decode::{decode, try_decode};
pub use encode::{encode, encoded_len};

use thiserror::Error;

/// Error type for base64 decoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    /// The input length is not a multiple of 4.
    #[error("base64 string length must be a multiple of 4, got {0}")]
    InvalidLength(usize),
    /// A padding character appears outside the last two positions of the final quartet.
    #[error("misplaced base64 padding at offset {offset}")]
    InvalidPadding { offset: usize },
    /// The input contains a byte outside the base64 alphabet.
    #[error("invalid base64 byte {byte:#04x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },
}
