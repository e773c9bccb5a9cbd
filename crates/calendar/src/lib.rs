//! # sambat-calendar
//!
//! Table-driven conversion between Bikram Sambat (BS) and Gregorian (AD)
//! dates, with month resolution and date arithmetic.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     T["BS_MONTH_LENGTHS"] --> A["anchors (one per year)"]
//!     T --> M["resolve_month()"]
//!     A --> M
//!     A -->|"day-walk"| W["to_bs() / to_ad()"]
//!     M --> R["resolve_bs_date()"]
//!     R --> D["adjust_by_days() / shift_months()"]
//!     M --> N["add_months()"]
//!     W --> I["from_iso8601() / to_iso8601()"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use sambat_calendar::{SimpleDate, adjust_by_days, days_between, to_ad, to_bs};
//!
//! let bs = to_bs(2024, 2, 29).unwrap(); // BS 2080/11/17, a Thursday
//! assert_eq!(bs.day_of_week(), 5);
//!
//! let ad = to_ad(2079, 1, 1).unwrap(); // AD 2022-04-14
//! assert_eq!(ad.day_of_year(), 104);
//!
//! let month_start = adjust_by_days(2082, 4, 20, -19).unwrap();
//! let n = days_between(SimpleDate::new(1980, 12, 31), SimpleDate::new(2081, 5, 24)).unwrap();
//! assert_eq!(n, 36675);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | BS month lengths and supported year windows |
//! | `anchor` | Year-end anchor states built once from the epoch |
//! | `walk` | Day-walk conversion in both directions |
//! | `month` | Month resolution and direct BS date resolution |
//! | `arithmetic` | Day and month arithmetic, day counts |
//! | `gregorian` | Gregorian helpers backed by chrono |
//! | `civil` | Kathmandu civil time and the wall clock |
//! | `iso` | ISO-8601 parsing and UTC rendering |
//! | `date`, `record` | Value types |
//! | `error` | Error types |

mod anchor;
mod arithmetic;
mod civil;
mod date;
mod error;
mod gregorian;
mod iso;
mod month;
mod record;
mod table;
mod walk;

pub use arithmetic::{add_months, adjust_by_days, days_between, shift_months, subtract_months};
pub use civil::{CIVIL_TZ, now, today};
pub use date::{Era, SimpleDate, SimpleTime};
pub use error::CalendarError;
pub use gregorian::{
    ad_days_between, compare_dates, days_in_ad_month, parse_compact_date, resolve_ad_date,
};
pub use iso::{from_iso8601, to_iso8601};
pub use month::{DayOverflow, resolve_bs_date, resolve_month};
pub use record::{CustomCalendar, CustomDateTime, NepaliMonthCalendar};
pub use table::{AD_YEARS, BS_YEARS, days_in_bs_month, days_in_bs_year, month_lengths};
pub use walk::{to_ad, to_bs};
