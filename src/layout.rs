use crate::{datetime::Timestamp, grammar::OrdinalKind, FormatError, FormatResult};

/// One piece of a layout that contains ordinal tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Ordinal(OrdinalKind),
}

/// The result of translating an intuitive layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslatedLayout {
    /// A complete chrono strftime layout.
    Literal(String),
    /// Native layouts interleaved with ordinals. Only produced for formatting.
    Segments(Vec<Segment>),
}

impl TranslatedLayout {
    /// The native layout, if no ordinal tokens were involved.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            TranslatedLayout::Literal(layout) => Some(layout),
            TranslatedLayout::Segments(_) => None,
        }
    }

    pub fn has_ordinals(&self) -> bool {
        matches!(self, TranslatedLayout::Segments(_))
    }

    /// Formats `value`, concatenating every segment.
    pub fn render<T: Timestamp + ?Sized>(&self, value: &T) -> FormatResult<String> {
        let mut out = String::new();
        match self {
            TranslatedLayout::Literal(layout) => write_native(value, layout, &mut out)?,
            TranslatedLayout::Segments(segments) => {
                for segment in segments {
                    match segment {
                        Segment::Literal(layout) => write_native(value, layout, &mut out)?,
                        Segment::Ordinal(OrdinalKind::Day) => push_ordinal(value.day(), &mut out),
                        Segment::Ordinal(OrdinalKind::Month) => {
                            push_ordinal(value.month(), &mut out);
                        }
                    }
                }
            }
        }
        Ok(out)
    }
}

fn write_native<T: Timestamp + ?Sized>(value: &T, layout: &str, out: &mut String) -> FormatResult<()> {
    if layout.is_empty() {
        return Ok(());
    }
    value
        .write_native(layout, out)
        .map_err(|_| FormatError::NativeFormatFailure {
            layout: layout.to_owned(),
        })
}

fn push_ordinal(n: u32, out: &mut String) {
    out.push_str(&n.to_string());
    out.push_str(ordinal_suffix(n));
}

/// English suffix for `n`: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st...
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn suffixes() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (24, "24th"),
            (31, "31st"),
            (111, "111th"),
        ];
        for (n, expected) in cases {
            let mut out = String::new();
            push_ordinal(n, &mut out);
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn renders_segments_in_order() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 22).unwrap();
        let layout = TranslatedLayout::Segments(vec![
            Segment::Literal(String::new()),
            Segment::Ordinal(OrdinalKind::Day),
            Segment::Literal(" of %B, ".to_owned()),
            Segment::Ordinal(OrdinalKind::Month),
            Segment::Literal(String::new()),
            Segment::Ordinal(OrdinalKind::Day),
            Segment::Literal(" %Y".to_owned()),
        ]);
        assert_eq!(layout.render(&date).unwrap(), "22nd of March, 3rd22nd 2021");
    }

    #[test]
    fn missing_fields_are_errors() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 22).unwrap();
        let layout = TranslatedLayout::Literal("%Y %H".to_owned());
        assert_eq!(
            layout.render(&date),
            Err(FormatError::NativeFormatFailure {
                layout: "%Y %H".to_owned()
            })
        );
    }
}
