//! Weighted mod-11 check digit.
//!
//! The letter part contributes through weights 9 and 8 on top of a +10
//! offset per letter index (A=0). Single-letter identifiers fill the first
//! slot with the fixed placeholder value 36 used by the two-character
//! encoding scheme. The six digits then contribute with weights 7 down to 2.

use super::HkidError;

const DIGIT_WEIGHTS: [u32; 6] = [7, 6, 5, 4, 3, 2];

/// Check symbol indexed by `sum % 11`: remainder 0 maps to '0', remainder 1
/// to 'A' (the 11 - r == 10 case), remainder r to the digit 11 - r.
const CHECK_SYMBOLS: &[u8; 11] = b"0A987654321";

/// Placeholder letter value for the empty first slot of one-letter prefixes.
const SINGLE_LETTER_PAD: u32 = 36;

/// Computes the check digit for the given letter and number parts.
///
/// # Errors
///
/// Returns [`HkidError::InvalidFormat`] when the letter part is empty or
/// longer than two characters, the number part is not exactly six
/// characters, or any character falls outside A–Z / 0–9.
pub fn check_digit(letter_part: &str, number_part: &str) -> Result<char, HkidError> {
    if letter_part.is_empty() || letter_part.len() > 2 {
        return Err(HkidError::InvalidFormat(format!(
            "letter part must be 1 or 2 characters, got {letter_part:?}"
        )));
    }
    if number_part.len() != 6 {
        return Err(HkidError::InvalidFormat(format!(
            "number part must be 6 digits, got {number_part:?}"
        )));
    }

    let letters = letter_part.chars().map(letter_index).collect::<Result<Vec<_>, _>>()?;
    let mut sum = if let [first, second] = letters[..] {
        9 * (10 + first) + 8 * (10 + second)
    } else {
        9 * SINGLE_LETTER_PAD + 8 * (10 + letters[0])
    };

    for (weight, ch) in DIGIT_WEIGHTS.iter().zip(number_part.chars()) {
        let digit = ch.to_digit(10).ok_or_else(|| {
            HkidError::InvalidFormat(format!("number part contains non-digit {ch:?}"))
        })?;
        sum += weight * digit;
    }

    Ok(char::from(CHECK_SYMBOLS[(sum % 11) as usize]))
}

fn letter_index(ch: char) -> Result<u32, HkidError> {
    if ch.is_ascii_uppercase() {
        Ok(ch as u32 - 'A' as u32)
    } else {
        Err(HkidError::InvalidFormat(format!("letter part contains invalid character {ch:?}")))
    }
}
