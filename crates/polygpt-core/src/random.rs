//! Random display tokens for the mock wallet and ledger
//!
//! None of these values identify anything real; they only need to look
//! plausible on screen.

use rand::Rng;

const HEX_CHARS: &[u8] = b"0123456789abcdef";
const BASE36_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn random_chars<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// `len` lowercase hex characters
pub fn hex_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    random_chars(rng, HEX_CHARS, len)
}

/// `len` lowercase base-36 characters
pub fn base36_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    random_chars(rng, BASE36_CHARS, len)
}

/// Abbreviated address: `0x` + 8 hex + `...` + 4 hex
pub fn short_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("0x{}...{}", hex_string(rng, 8), hex_string(rng, 4))
}

/// Abbreviated transaction hash: `0x` + 18 hex + `...`
pub fn tx_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("0x{}...", hex_string(rng, 18))
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
