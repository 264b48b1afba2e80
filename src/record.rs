//! Persisted history record model.

use serde::{Deserialize, Serialize};

/// Prefix variant of an identifier: one letter (`old`) or two (`new`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdFormat {
    /// Single-letter prefix.
    Old,
    /// Two-letter prefix.
    New,
}

/// One generated identifier as stored in the history.
///
/// Field names serialize in camelCase to stay wire-compatible with
/// previously exported history files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Opaque unique id, assigned at creation and never changed.
    pub id: String,
    /// Full identifier with the check digit in parentheses, e.g. `A123456(3)`.
    pub hkid: String,
    /// Identifier without parentheses, e.g. `A1234563`.
    pub hkid_display: String,
    /// Prefix variant; `new` iff the letter part has two characters.
    pub format: IdFormat,
    /// One or two uppercase letters.
    pub letter_part: String,
    /// Exactly six decimal digits.
    pub number_part: String,
    /// Weighted mod-11 check symbol: `'0'`–`'9'` or `'A'`.
    pub check_digit: char,
    /// User-editable note; trimmed on every save, may be empty.
    pub remark: String,
    /// Creation time in milliseconds since the Unix epoch; set once.
    pub created_at: i64,
}

impl Record {
    /// The key used to detect duplicates when merging imported records.
    #[must_use]
    pub fn composite_key(&self) -> (String, i64) {
        (self.hkid.clone(), self.created_at)
    }
}
