use sha3::{Digest, Keccak256};

use super::{ADDRESS_BODY_LENGTH, AddressBody, STANDARD_PREFIX};

const KECCAK_256_HASH_LENGTH: usize = 32;
const UPPERCASE_NIBBLE_THRESHOLD: u8 = 8;

/// Legacy Keccak-256 (pre-NIST padding), as used by EIP-55.
pub fn keccak256(data: &[u8]) -> [u8; KECCAK_256_HASH_LENGTH] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Applies EIP-55 mixed-case checksum casing to a lowercase body, without a prefix.
pub fn apply(body: &AddressBody) -> String {
    let hash = keccak256(body.as_str().as_bytes());

    body.as_str()
        .bytes()
        .enumerate()
        .map(|(i, ch)| {
            if ch.is_ascii_alphabetic() && nibble(&hash, i) >= UPPERCASE_NIBBLE_THRESHOLD {
                ch.to_ascii_uppercase() as char
            } else {
                ch as char
            }
        })
        .collect()
}

/// Encodes a body in the standard `0x`-prefixed checksummed form.
pub fn encode(body: &AddressBody) -> String {
    let mut out = String::with_capacity(STANDARD_PREFIX.len() + ADDRESS_BODY_LENGTH);
    out.push_str(STANDARD_PREFIX);
    out.push_str(&apply(body));
    out
}

// High nibble for even positions, low nibble for odd ones.
#[inline(always)]
fn nibble(hash: &[u8; KECCAK_256_HASH_LENGTH], index: usize) -> u8 {
    let byte = hash[index / 2];
    if index % 2 == 0 { byte >> 4 } else { byte & 0x0f }
}
