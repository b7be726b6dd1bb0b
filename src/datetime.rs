use core::fmt::{self, Write};

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// A value that can be rendered with a chrono strftime layout.
pub trait Timestamp {
    /// Appends `self` formatted with the native `layout` to `out`.
    fn write_native(&self, layout: &str, out: &mut String) -> fmt::Result;

    /// Day of the month, starting at 1.
    fn day(&self) -> u32;
    /// Month of the year, starting at 1.
    fn month(&self) -> u32;
}

impl<Tz: TimeZone> Timestamp for chrono::DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn write_native(&self, layout: &str, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format(layout))
    }

    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    fn month(&self) -> u32 {
        Datelike::month(self)
    }
}

impl Timestamp for NaiveDateTime {
    fn write_native(&self, layout: &str, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format(layout))
    }

    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    fn month(&self) -> u32 {
        Datelike::month(self)
    }
}

impl Timestamp for NaiveDate {
    fn write_native(&self, layout: &str, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format(layout))
    }

    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    fn month(&self) -> u32 {
        Datelike::month(self)
    }
}
