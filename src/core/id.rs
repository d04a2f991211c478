//! Random identifier generation.

use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Length of a generated identifier.
pub const UUID_LEN: usize = 36;

/// Generate a version-4 style identifier using the thread-local RNG.
///
/// The result is 36 lowercase hex characters with the version nibble at
/// index 14 and the variant nibble at index 19. No dashes are inserted.
pub fn uuid() -> String {
    uuid_with_rng(&mut rand::thread_rng())
}

/// Generate an identifier from the given RNG.
pub fn uuid_with_rng<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = [0u8; UUID_LEN];
    for digit in digits.iter_mut() {
        *digit = HEX_DIGITS[rng.gen_range(0..16)];
    }

    // Version 4
    digits[14] = b'4';
    // Variant 10xx
    digits[19] = HEX_DIGITS[(rng.gen_range(0..16) & 0x3) | 0x8];

    digits.iter().map(|&b| b as char).collect()
}
