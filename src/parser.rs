//! Reading text with a native layout, filling in what the layout leaves out.

use chrono::{
    format::{self, Parsed, StrftimeItems},
    DateTime, FixedOffset, LocalResult, TimeZone,
};

use crate::{FormatError, FormatResult};

/// Parses `text`, keeping its offset or assuming UTC when it has none.
pub(crate) fn parse_fixed(layout: &str, text: &str) -> FormatResult<DateTime<FixedOffset>> {
    let mut parsed = parse_fields(layout, text)?;
    if parsed.offset.is_none() {
        parsed.set_offset(0).map_err(|e| failure(layout, text, e))?;
    }
    parsed.to_datetime().map_err(|e| failure(layout, text, e))
}

/// Parses `text`, reading offset-less values as local times in `tz`.
pub(crate) fn parse_in<Tz: TimeZone>(layout: &str, text: &str, tz: &Tz) -> FormatResult<DateTime<Tz>> {
    let parsed = parse_fields(layout, text)?;
    if parsed.offset.is_some() {
        // an explicit offset wins, the location only decides how it is shown
        let dt = parsed.to_datetime().map_err(|e| failure(layout, text, e))?;
        return Ok(dt.with_timezone(tz));
    }

    let naive = parsed
        .to_naive_datetime_with_offset(0)
        .map_err(|e| failure(layout, text, e))?;
    match tz.from_local_datetime(&naive) {
        // ambiguous local times take the earlier instant
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt),
        // skipped by a transition, let chrono report it
        LocalResult::None => parsed
            .to_datetime_with_timezone(tz)
            .map_err(|e| failure(layout, text, e)),
    }
}

fn parse_fields(layout: &str, text: &str) -> FormatResult<Parsed> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, text, StrftimeItems::new(layout))
        .and_then(|()| fill_defaults(&mut parsed))
        .map_err(|e| failure(layout, text, e))?;
    Ok(parsed)
}

/// Defaults missing fields to year 0, January 1st, midnight.
fn fill_defaults(parsed: &mut Parsed) -> format::ParseResult<()> {
    // weekday names are read but never checked against the date
    parsed.weekday = None;

    if parsed.year.is_none() && parsed.year_div_100.is_none() && parsed.year_mod_100.is_none() {
        parsed.set_year(0)?;
    }
    if parsed.ordinal.is_none() {
        if parsed.month.is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day.is_none() {
            parsed.set_day(1)?;
        }
    }

    match (parsed.hour_div_12, parsed.hour_mod_12) {
        (None, None) => parsed.set_hour(0)?,
        // a 12-hour clock without am/pm reads as am
        (None, Some(_)) => parsed.set_ampm(false)?,
        // am/pm alone is the start of that half of the day
        (Some(_), None) => parsed.set_hour12(12)?,
        (Some(_), Some(_)) => {}
    }
    if parsed.minute.is_none() {
        parsed.set_minute(0)?;
    }
    Ok(())
}

fn failure(layout: &str, text: &str, source: format::ParseError) -> FormatError {
    FormatError::NativeParseFailure {
        layout: layout.to_owned(),
        text: text.to_owned(),
        source,
    }
}
