//! Random identifier generation.

use crate::ports::RandomSource;
use crate::record::IdFormat;

use super::{check_digit, HkidError};

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// A freshly generated identifier, not yet persisted.
///
/// The caller threads this value into the history store; there is no
/// ambient "current identifier" state.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedHkid {
    /// Full form with the check digit in parentheses, e.g. `A123456(3)`.
    pub hkid: String,
    /// Display form without parentheses, e.g. `A1234563`.
    pub hkid_display: String,
    /// Prefix variant; `new` iff two letters were drawn.
    pub format: IdFormat,
    /// One or two uppercase letters.
    pub letter_part: String,
    /// Six decimal digits, leading zeros allowed.
    pub number_part: String,
    /// Check symbol computed from the two parts.
    pub check_digit: char,
}

/// Generates a random identifier with a valid check digit.
///
/// A draw in [1, 10] decides the prefix variant: 10 picks the two-letter
/// `new` form, everything else the one-letter `old` form. The 1-in-10 split
/// is the defined behavior, not a population statistic. Letters and digits
/// are then drawn uniformly and independently.
///
/// # Errors
///
/// Returns [`HkidError::InvalidFormat`] if the assembled parts fail the
/// checksum preconditions. Well-formed draws cannot trigger this, but the
/// parts are still checked rather than trusted.
pub fn generate(rng: &dyn RandomSource) -> Result<GeneratedHkid, HkidError> {
    let two_letters = rng.int_in_range(1, 10) == 10;

    let mut letter_part = String::with_capacity(2);
    letter_part.push(random_letter(rng));
    if two_letters {
        letter_part.push(random_letter(rng));
    }

    let mut number_part = String::with_capacity(6);
    for _ in 0..6 {
        number_part.push(char::from(DIGITS[rng.int_in_range(0, 9) as usize]));
    }

    let check_digit = check_digit(&letter_part, &number_part)?;

    Ok(GeneratedHkid {
        hkid: format!("{letter_part}{number_part}({check_digit})"),
        hkid_display: format!("{letter_part}{number_part}{check_digit}"),
        format: if two_letters { IdFormat::New } else { IdFormat::Old },
        letter_part,
        number_part,
        check_digit,
    })
}

fn random_letter(rng: &dyn RandomSource) -> char {
    char::from(LETTERS[rng.int_in_range(0, 25) as usize])
}
