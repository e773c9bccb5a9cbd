//! Clock-time rendering.

use sambat_calendar::SimpleTime;

use crate::digits::localize_number;
use crate::names::{Language, english_period, nepali_period};

/// Renders hours and minutes in `language`.
///
/// | Language | 12-hour | 24-hour |
/// |----------|---------|---------|
/// | English | `4:30 PM` | `16:30` |
/// | Nepali | `दिउँसो ४ : ३०` | `१६ : ३०` |
pub fn format_time(time: SimpleTime, language: Language, use_24_hour: bool) -> String {
    let hour = if use_24_hour {
        time.hour()
    } else {
        time.hour_12()
    };
    let minute = format!("{:02}", time.minute());

    match (language, use_24_hour) {
        (Language::English, true) => format!("{hour}:{minute}"),
        (Language::English, false) => {
            format!("{hour}:{minute} {}", english_period(time.hour()))
        }
        (Language::Nepali, _) => {
            let clock = localize_number(&format!("{hour} : {minute}"), language);
            if use_24_hour {
                clock
            } else {
                format!("{} {clock}", nepali_period(time.hour()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8) -> SimpleTime {
        SimpleTime::new(hour, minute, 48, 22).unwrap()
    }

    #[test]
    fn english() {
        assert_eq!(format_time(at(16, 30), Language::English, false), "4:30 PM");
        assert_eq!(format_time(at(16, 30), Language::English, true), "16:30");
        assert_eq!(format_time(at(0, 5), Language::English, false), "12:05 AM");
        assert_eq!(format_time(at(12, 0), Language::English, false), "12:00 PM");
        assert_eq!(format_time(at(9, 7), Language::English, true), "9:07");
    }

    #[test]
    fn nepali() {
        assert_eq!(format_time(at(16, 30), Language::Nepali, false), "दिउँसो ४ : ३०");
        assert_eq!(format_time(at(16, 30), Language::Nepali, true), "१६ : ३०");
        assert_eq!(format_time(at(6, 5), Language::Nepali, false), "बिहान ६ : ०५");
        assert_eq!(format_time(at(1, 0), Language::Nepali, false), "राति १ : ००");
    }
}
