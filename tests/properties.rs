use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Timelike};
use idf::{
    grammar::{Fragment, Grammar},
    Translator, TranslatedLayout,
};
use proptest::prelude::*;

const LAYOUTS: &[&str] = &[
    "yyyy-mm-dd hhh:ii:ss",
    "dd/mm/yyyy hh:ii:ss aa",
    "wwww, d mmmm yyyy hhh:ii:ss.000000000",
    "mmm dd yyyy h:i:s a zz",
    "yyyy ddd hhh ii ss zzzz",
    "yyyy-mm-dd hhh:ii:ss z",
    "yyyy-mm-dd hhh:ii:ss zh",
    "yyyy-mm-dd hhh:ii:ss zhh",
    "yyyy-mm-dd hhh:ii:ss.000 zz",
    "yyyy-mm-dd hhh:ii:ss.000000",
    "yyyy-mm-dd hhh:ii:ss.999",
    "yyyy-mm-dd hhh:ii:ss.999999",
    "yyyy-mm-dd hhh:ii:ss.999999999",
];

const BASE: &str = "yyyy-mm-dd hhh:ii:ss";

/// Every token of the default grammar that can be read back.
fn readable_tokens() -> Vec<&'static str> {
    Grammar::default()
        .classes()
        .iter()
        .flat_map(|class| class.tokens())
        .filter(|token| matches!(token.fragment, Fragment::Native { .. }))
        // zone names are skipped when parsing
        .filter(|token| token.text != "zzz")
        .map(|token| token.text)
        .collect()
}

/// The base layout with `token` appended, fractions straight after the seconds.
fn with_token(token: &str) -> String {
    if token.starts_with('.') {
        format!("{BASE}{token}")
    } else {
        format!("{BASE} {token}")
    }
}

fn is_offset(layout: &str) -> bool {
    layout.contains('z')
}

fn hour_only_offset(layout: &str) -> bool {
    layout.contains("zh")
}

fn any_datetime() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (
        1i32..9999,
        1u32..=366,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1_000_000_000,
        -12i32..=14,
        prop_oneof![Just(0), Just(30), Just(45)],
    )
        .prop_filter_map("invalid date", |(y, ordinal, h, m, s, ns, off_h, off_m)| {
            let date = NaiveDate::from_yo_opt(y, ordinal)?;
            let naive = date.and_hms_nano_opt(h, m, s, ns)?;
            let secs = off_h * 3600 + off_h.signum() * off_m * 60;
            let offset = FixedOffset::east_opt(secs)?;
            offset.from_local_datetime(&naive).single()
        })
}

/// What survives formatting with `layout`: the precision of its fraction
/// token, and the minutes of the offset unless it only shows hours.
fn expected(dt: DateTime<FixedOffset>, layout: &str) -> DateTime<FixedOffset> {
    let nanos = dt.nanosecond();
    let kept = if layout.contains(".000000000") || layout.contains(".999") {
        nanos
    } else if layout.contains(".000000") {
        nanos - nanos % 1_000
    } else if layout.contains(".000") {
        nanos - nanos % 1_000_000
    } else {
        0
    };
    dt.with_nanosecond(kept).unwrap()
}

fn check_round_trip(dt: DateTime<FixedOffset>, layout: &str) -> Result<(), TestCaseError> {
    let text = idf::format(&dt, layout).unwrap();
    let parsed = idf::parse(layout, &text).unwrap();
    let expected = expected(dt, layout);

    if is_offset(layout) {
        prop_assert_eq!(parsed, expected, "{} formatted as {:?}", layout, text);
        prop_assert_eq!(parsed.offset(), expected.offset(), "{} formatted as {:?}", layout, text);
    } else {
        // without an offset the wall clock is read back as UTC
        prop_assert_eq!(
            parsed.naive_utc(),
            expected.naive_local(),
            "{} formatted as {:?}",
            layout,
            text
        );
    }
    Ok(())
}

/// Hour-only offsets cannot carry minutes.
fn whole_hours(dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let secs = dt.offset().local_minus_utc();
    let offset = FixedOffset::east_opt(secs - secs % 3600).unwrap();
    offset.from_local_datetime(&dt.naive_local()).unwrap()
}

proptest! {
    #[test]
    fn round_trip(dt in any_datetime(), layout in proptest::sample::select(LAYOUTS)) {
        let dt = if hour_only_offset(layout) { whole_hours(dt) } else { dt };
        check_round_trip(dt, layout)?;
    }

    #[test]
    fn every_token_round_trips(dt in any_datetime(), token in proptest::sample::select(readable_tokens())) {
        let layout = with_token(token);
        let dt = if hour_only_offset(&layout) { whole_hours(dt) } else { dt };
        check_round_trip(dt, &layout)?;
    }

    #[test]
    fn longest_token_is_chosen(layout in "[ymdwhaisz.09 \\-]{0,24}") {
        let t = Translator::new();
        let translated = t.translate(&layout, false).unwrap();
        // translating token by token must agree with the whole layout
        let mut rebuilt = String::new();
        let mut rest = layout.as_str();
        while let Some(c) = rest.chars().next() {
            let token = t.grammar().class_for(c).and_then(|class| class.longest_match(rest));
            match token {
                Some(token) => {
                    for longer in t.grammar().class_for(c).unwrap().tokens() {
                        if longer.text.len() > token.text.len() {
                            prop_assert!(!rest.to_ascii_lowercase().starts_with(longer.text));
                        }
                    }
                    if let Fragment::Native { format, .. } = token.fragment {
                        rebuilt.push_str(format);
                    }
                    rest = &rest[token.text.len()..];
                }
                None => {
                    rebuilt.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        if let TranslatedLayout::Literal(native) = translated {
            prop_assert_eq!(native, rebuilt);
        }
    }
}

#[test]
fn every_readable_token_is_covered() {
    let tokens = readable_tokens();
    for token in ["zh", "zhh", "z", "zz", "zzzz", ".000", ".000000", ".000000000", ".999"] {
        assert!(tokens.contains(&token), "{token} is missing");
    }
    assert!(!tokens.contains(&"dt"));
    assert!(!tokens.contains(&"zzz"));
}
