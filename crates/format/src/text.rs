//! Delimiter handling and reading dates typed in either digit set.

use sambat_calendar::{SimpleDate, parse_compact_date};

use crate::digits::{delocalize_number, parse_localized_number};
use crate::error::FormatError;

/// Replaces `old` with `new`, or every non-alphanumeric character when
/// `old` is `None`.
pub fn replace_delimiter(text: &str, new: &str, old: Option<&str>) -> String {
    match old {
        Some(old) if !old.is_empty() => text.replace(old, new),
        _ => text
            .chars()
            .fold(String::with_capacity(text.len()), |mut out, c| {
                if c.is_alphanumeric() {
                    out.push(c);
                } else {
                    out.push_str(new);
                }
                out
            }),
    }
}

/// Reads `yyyy-mm-dd`, `yyyy/mm/dd`, `yyyy.mm.dd` or compact `yyyymmdd`
/// text, in ASCII or Devanagari digits.
///
/// Only the shape is checked; the calendar that consumes the date validates it.
///
/// # Errors
///
/// Returns [`FormatError::MalformedDate`] if the text does not split into
/// three fields, [`FormatError::InvalidNumber`] if a field is not a number,
/// or [`FormatError::Calendar`] for malformed compact text.
pub fn parse_date_text(text: &str) -> Result<SimpleDate, FormatError> {
    let ascii = delocalize_number(text.trim());
    let fields: Vec<&str> = ascii
        .split(|c: char| !c.is_alphanumeric())
        .filter(|f| !f.is_empty())
        .collect();

    match fields.as_slice() {
        &[compact] => Ok(parse_compact_date(compact)?),
        &[year, month, day] => {
            let narrow = |field: &str| -> Result<u8, FormatError> {
                u8::try_from(parse_localized_number(field)?).map_err(|_| {
                    FormatError::InvalidNumber {
                        text: field.to_string(),
                    }
                })
            };
            let year = i32::try_from(parse_localized_number(year)?).map_err(|_| {
                FormatError::InvalidNumber {
                    text: year.to_string(),
                }
            })?;
            Ok(SimpleDate::new(year, narrow(month)?, narrow(day)?))
        }
        _ => Err(FormatError::MalformedDate {
            text: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sambat_calendar::CalendarError;

    #[test]
    fn replace_named_delimiter() {
        assert_eq!(replace_delimiter("09:45 AM", " ", Some(":")), "09 45 AM");
        assert_eq!(replace_delimiter("2081/05/24", "-", Some("/")), "2081-05-24");
    }

    #[test]
    fn replace_any_delimiter() {
        assert_eq!(replace_delimiter("2024/06/21", "-", None), "2024-06-21");
        assert_eq!(replace_delimiter("2024.06 21", "/", None), "2024/06/21");
        assert_eq!(replace_delimiter("२०८१/०५/२४", "-", None), "२०८१-०५-२४");
    }

    #[test]
    fn parse_delimited_dates() {
        assert_eq!(parse_date_text("2081-05-24").unwrap(), SimpleDate::new(2081, 5, 24));
        assert_eq!(parse_date_text("2081/5/24").unwrap(), SimpleDate::new(2081, 5, 24));
        assert_eq!(parse_date_text("२०८१.०५.२४").unwrap(), SimpleDate::new(2081, 5, 24));
        assert_eq!(parse_date_text(" 2024 2 29 ").unwrap(), SimpleDate::new(2024, 2, 29));
    }

    #[test]
    fn parse_compact_dates() {
        assert_eq!(parse_date_text("20810524").unwrap(), SimpleDate::new(2081, 5, 24));
        assert_eq!(parse_date_text("२०८१०५२४").unwrap(), SimpleDate::new(2081, 5, 24));
        assert!(matches!(
            parse_date_text("2081052"),
            Err(FormatError::Calendar(CalendarError::Parse { .. }))
        ));
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        assert!(matches!(
            parse_date_text("2081-05"),
            Err(FormatError::MalformedDate { .. })
        ));
        assert!(matches!(parse_date_text(""), Err(FormatError::MalformedDate { .. })));
        assert!(matches!(
            parse_date_text("2081-May-24"),
            Err(FormatError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_date_text("2081-300-24"),
            Err(FormatError::InvalidNumber { .. })
        ));
    }
}
