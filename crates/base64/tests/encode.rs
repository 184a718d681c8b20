//! Tests for base64 encoding (encode).

use base64_lite::{encode, encoded_len, ALPHABET, PAD};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

/// Bit-by-bit reference encoder for test verification.
fn base64_encode(data: &[u8]) -> String {
    let alphabet = ALPHABET.as_bytes();
    let mut result = String::new();

    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        result.push(alphabet[(b0 >> 2) as usize] as char);
        result.push(alphabet[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            result.push(alphabet[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            result.push(PAD);
        }

        if chunk.len() > 2 {
            result.push(alphabet[(b2 & 0x3f) as usize] as char);
        } else {
            result.push(PAD);
        }
    }

    result
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = encode(&blob);
        let expected = base64_encode(&blob);
        assert_eq!(result, expected, "Failed for blob of length {}", blob.len());
    }
}

#[test]
fn does_not_mutate_input() {
    let blob = generate_blob();
    let dupe = blob.clone();
    let _ = encode(&blob);
    assert_eq!(dupe, blob);
}

#[test]
fn empty_input() {
    assert_eq!(encode(b""), "");
    assert_eq!(encoded_len(0), 0);
}

#[test]
fn hello_world() {
    assert_eq!(encode(b"hello, world"), "aGVsbG8sIHdvcmxk");
}

#[test]
fn pad_one() {
    assert_eq!(encode(b"some string"), "c29tZSBzdHJpbmc=");
}

#[test]
fn pad_two() {
    assert_eq!(encode(b"some long string"), "c29tZSBsb25nIHN0cmluZw==");
}

#[test]
fn padding_follows_remainder() {
    for length in 1..=30 {
        let encoded = encode(&vec![0x5Au8; length]);
        assert_eq!(encoded.len(), encoded_len(length));
        assert_eq!(encoded.len() % 4, 0);
        let pads = encoded.chars().rev().take_while(|&c| c == PAD).count();
        let expected = match length % 3 {
            0 => 0,
            1 => 2,
            _ => 1,
        };
        assert_eq!(pads, expected, "Wrong padding for length {}", length);
    }
}

#[test]
fn utf8_text() {
    assert_eq!(
        encode("Полтора Землекопа".as_bytes()),
        "0J/QvtC70YLQvtGA0LAg0JfQtdC80LvQtdC60L7Qv9Cw"
    );
}
