//! Client-generated identifiers.

#[cfg(test)]
#[path = "id_test.rs"]
mod id_test;

use super::browser::now_ms;

const RANDOM_DIGITS: usize = 11;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Lowercase base-36 rendering of `value`.
pub fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Time-ordered prefix plus random suffix, both base 36: sortable by
/// creation time to the millisecond and unique within it.
pub fn generate_unique_id() -> String {
    let random = to_base36(uuid::Uuid::new_v4().as_u128());
    let suffix = &random[random.len().saturating_sub(RANDOM_DIGITS)..];
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = now_ms().max(0.0) as u128;
    format!("{}{suffix}", to_base36(millis))
}
