//! Devanagari digit substitution.

use crate::error::FormatError;
use crate::names::Language;

const DEVANAGARI: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Renders ASCII digits in `language`. Other characters pass through.
pub fn localize_number(text: &str, language: Language) -> String {
    match language {
        Language::English => text.to_string(),
        Language::Nepali => text
            .chars()
            .map(|c| c.to_digit(10).map_or(c, |d| DEVANAGARI[d as usize]))
            .collect(),
    }
}

/// Replaces Devanagari digits with ASCII. Other characters pass through.
pub fn delocalize_number(text: &str) -> String {
    text.chars()
        .map(|c| match DEVANAGARI.iter().position(|&d| d == c) {
            Some(i) => char::from(b'0' + i as u8),
            None => c,
        })
        .collect()
}

/// Parses an unsigned number written in either digit set.
///
/// # Errors
///
/// Returns [`FormatError::InvalidNumber`] unless the text is one or more
/// digits.
pub fn parse_localized_number(text: &str) -> Result<u32, FormatError> {
    let ascii = delocalize_number(text.trim());
    if ascii.is_empty() || !ascii.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidNumber {
            text: text.to_string(),
        });
    }
    ascii.parse().map_err(|_| FormatError::InvalidNumber {
        text: text.to_string(),
    })
}
