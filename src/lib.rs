//! ## Intuitive Date Formats
//!
//! strftime layouts are compact but hard to read back: is `%M` the month or
//! the minute? `idf` lets you write layouts the way you would describe them,
//! `yyyy-mm-dd hh:ii aa`, and translates them into chrono's strftime layouts
//! before formatting or parsing.
//!
//! ## Tokens
//!
//! Tokens are case-insensitive and the longest token wins, so `yyyy` is a
//! four digit year and never two `yy`s.
//!
//! | tokens | meaning |
//! |---|---|
//! | `yyyy` `yy` | year, two digit year |
//! | `mmmm` `mmm` `mm` `m` | month name, short name, padded, unpadded |
//! | `mt` | month as an ordinal, `3rd` |
//! | `ddd` `dd` `d` | day of year, padded day, unpadded day |
//! | `dt` | day as an ordinal, `22nd` |
//! | `wwww` `www` | weekday name, short name |
//! | `hhh` `hh` `h` | 24 hour clock, padded 12 hour clock, unpadded 12 hour clock |
//! | `aa` `a` | `AM`/`PM`, `am`/`pm` |
//! | `ii` `i` | minutes, padded and unpadded |
//! | `ss` `s` | seconds, padded and unpadded |
//! | `.000` `.000000` `.000000000` | fraction of a second with fixed digits |
//! | `.999` `.999999` `.999999999` | fraction of a second, trailing zeros dropped |
//! | `zzzz` `z` | offset `+07:00` |
//! | `zzz` | zone abbreviation, not read when parsing |
//! | `zz` | offset `+0700` |
//! | `zhh` `zh` | offset `+07` |
//!
//! Anything else is copied as is. A backslash makes the next character
//! literal, so `\d` is just a `d`. A backslash at the very end of a layout is
//! kept as a backslash.
//!
//! Ordinals (`dt`, `mt`) can only be used for formatting. When parsing, `zzz`
//! skips over the zone text without reading an offset from it, so the value is
//! UTC unless another offset token is present. `zhh` and `zh` also accept a
//! full offset such as `+07:30`. Well known strftime
//! layouts such as RFC 3339's `%Y-%m-%dT%H:%M:%S%:z` are used unchanged.
//!
//! ## API
//!
//! ```
//! use chrono::{TimeZone, Utc};
//!
//! let date = Utc.with_ymd_and_hms(2012, 6, 3, 14, 5, 0).unwrap();
//! assert_eq!(idf::format(&date, "wwww, dt mmmm yyyy").unwrap(), "Sunday, 3rd June 2012");
//!
//! let parsed = idf::parse("dd/mm/yyyy hhh:ii", "03/06/2012 14:05").unwrap();
//! assert_eq!(parsed, date);
//!
//! let text = idf::convert("01/24/1984", "mm/dd/yyyy", "dd-mm-yyyy").unwrap();
//! assert_eq!(text, "24-01-1984");
//! ```
//!
//! The free functions share one process-wide [`Translator`] that caches every
//! translation. Build your own [`Translator`] for a separate cache or a
//! different [`Grammar`].
#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod builtins;
mod cache;
mod datetime;
mod errors;
pub mod grammar;
mod layout;
mod parser;
mod translator;

pub use builtins::{BuiltinLayout, BUILTIN_LAYOUTS, NATIVE_TIER};
pub use cache::FormatCache;
pub use datetime::Timestamp;
pub use errors::{FormatError, FormatResult};
pub use grammar::{Grammar, OrdinalKind};
pub use layout::{ordinal_suffix, Segment, TranslatedLayout};
pub use translator::Translator;

use chrono::{DateTime, FixedOffset, TimeZone};
use once_cell::sync::Lazy;

static DEFAULT: Lazy<Translator> = Lazy::new(Translator::new);

/// The translator behind the free functions of this crate.
pub fn default_translator() -> &'static Translator {
    &DEFAULT
}

/// Formats `value` with an intuitive `layout`.
///
/// ```
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 3, 22).unwrap();
/// assert_eq!(idf::format(&date, "mmm dt, yyyy").unwrap(), "Mar 22nd, 2021");
/// ```
pub fn format<T: Timestamp + ?Sized>(value: &T, layout: &str) -> FormatResult<String> {
    DEFAULT.format(value, layout)
}

/// Parses `text` with an intuitive `layout`. Text without an offset is UTC.
///
/// ```
/// use idf::FormatError;
///
/// let date = idf::parse("yyyy-mm-dd zz", "2017-06-30 +0200").unwrap();
/// assert_eq!(date.to_rfc3339(), "2017-06-30T00:00:00+02:00");
///
/// let err = idf::parse("dt mmm yyyy", "3rd Jun 2012").unwrap_err();
/// assert!(matches!(err, FormatError::OrdinalNotSupportedForParsing { .. }));
/// ```
pub fn parse(layout: &str, text: &str) -> FormatResult<DateTime<FixedOffset>> {
    DEFAULT.parse(layout, text)
}

/// Parses `text` with an intuitive `layout`. Text without an offset is read
/// as a local time in `tz`.
pub fn parse_in_location<Tz: TimeZone>(layout: &str, text: &str, tz: &Tz) -> FormatResult<DateTime<Tz>> {
    DEFAULT.parse_in_location(layout, text, tz)
}

/// Reads `text` with the `from` layout and writes it with the `to` layout.
/// Returns `text` untouched when both layouts are the same.
pub fn convert(text: &str, from: &str, to: &str) -> FormatResult<String> {
    DEFAULT.convert(text, from, to)
}

/// Turns the shared cache back on, starting from an empty table.
pub fn enable_cache() {
    DEFAULT.enable_cache();
}

/// Turns the shared cache off and forgets everything in it.
pub fn disable_cache() {
    DEFAULT.disable_cache();
}

pub fn is_cache_enabled() -> bool {
    DEFAULT.is_cache_enabled()
}
