//! # sambat-format
//!
//! Localized rendering of resolved calendar records: month and weekday
//! names, Devanagari digits, fixed date layouts, clock times and
//! Unicode-style patterns.
//!
//! ```mermaid
//! graph LR
//!     C["CustomCalendar"] --> S["format_date()"]
//!     C --> P["Pattern::render()"]
//!     T["SimpleTime"] --> P
//!     T --> F["format_time()"]
//!     N["names"] --> S
//!     N --> P
//!     D["localize_number()"] --> S
//!     D --> P
//!     D --> F
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use sambat_calendar::{SimpleTime, to_bs};
//! use sambat_format::{Language, format_bs_pattern};
//!
//! let cal = to_bs(2024, 9, 9).unwrap(); // BS 2081/05/24
//! let time = SimpleTime::new(14, 45, 15, 0).unwrap();
//!
//! let text = format_bs_pattern("yyyy MMMM d, EEEE hh:mm a", &cal, Some(time), Language::Nepali);
//! assert_eq!(text, "२०८१ भदौ २४, सोमबार ०२:४५ दिउँसो");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `names` | Month, weekday and period-of-day names |
//! | `digits` | Devanagari digit substitution |
//! | `locale` | Language, layout and name widths |
//! | `style` | Fixed date layouts |
//! | `time` | Clock-time rendering |
//! | `pattern` | Pattern tokenizer and renderer |
//! | `text` | Delimiters and date text input |
//! | `error` | Error types |

mod digits;
mod error;
mod locale;
mod names;
mod pattern;
mod style;
mod text;
mod time;

pub use digits::{delocalize_number, localize_number, parse_localized_number};
pub use error::FormatError;
pub use locale::Locale;
pub use names::{
    Language, MonthNames, NameFormat, english_period, month_name, nepali_period, weekday_name,
};
pub use pattern::{Pattern, format_ad_pattern, format_bs_pattern, format_time_pattern};
pub use style::{DateFormatStyle, format_date};
pub use text::{parse_date_text, replace_delimiter};
pub use time::format_time;
