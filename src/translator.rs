use chrono::{DateTime, FixedOffset, TimeZone};
use log::trace;

use crate::{
    builtins::{self, NATIVE_TIER},
    datetime::Timestamp,
    grammar::{Fragment, Grammar, OrdinalKind},
    parser, FormatCache, FormatError, FormatResult, Segment, TranslatedLayout,
};

/// Translates intuitive layouts into chrono strftime layouts and uses them
/// to format and parse.
#[derive(Debug)]
pub struct Translator {
    grammar: Grammar,
    cache: FormatCache,
    tier: u32,
}

impl Translator {
    /// A translator for the default grammar with an enabled cache.
    pub fn new() -> Translator {
        Translator::with_grammar(Grammar::default())
    }

    pub fn with_grammar(grammar: Grammar) -> Translator {
        Translator {
            grammar,
            cache: FormatCache::enabled(),
            tier: NATIVE_TIER,
        }
    }

    /// Replaces the cache, e.g. with [`FormatCache::disabled`].
    #[must_use]
    pub fn with_cache(mut self, cache: FormatCache) -> Translator {
        self.cache = cache;
        self
    }

    /// Limits which builtin layouts are passed through untranslated.
    #[must_use]
    pub fn with_native_tier(mut self, tier: u32) -> Translator {
        self.tier = tier;
        self
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn cache(&self) -> &FormatCache {
        &self.cache
    }

    pub fn enable_cache(&self) {
        self.cache.enable();
    }

    pub fn disable_cache(&self) {
        self.cache.disable();
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.cache.is_enabled()
    }

    /// Translates `layout`. With `for_parsing` set, ordinal tokens are an
    /// error and the result is always [`TranslatedLayout::Literal`].
    pub fn translate(&self, layout: &str, for_parsing: bool) -> FormatResult<TranslatedLayout> {
        if let Some(builtin) = builtins::lookup(layout, self.tier) {
            return Ok(TranslatedLayout::Literal(builtin.layout.to_owned()));
        }

        if let Some(cached) = self.cache.get(layout, for_parsing) {
            return Ok(cached);
        }

        let translated = self.scan(layout, for_parsing)?;
        trace!("translated layout {layout:?} to {translated:?}");
        self.cache.set(layout, for_parsing, translated.clone());
        Ok(translated)
    }

    fn scan(&self, layout: &str, for_parsing: bool) -> FormatResult<TranslatedLayout> {
        let escape = self.grammar.escape();
        let mut out = Builder::default();
        let mut pos = 0;

        while let Some(c) = layout[pos..].chars().next() {
            let next = pos + c.len_utf8();

            if c == escape {
                match layout[next..].chars().next() {
                    Some(escaped) => {
                        out.push_literal(escaped);
                        pos = next + escaped.len_utf8();
                    }
                    // a trailing escape stands for itself
                    None => {
                        out.push_literal(c);
                        pos = next;
                    }
                }
                continue;
            }

            let token = self
                .grammar
                .class_for(c)
                .and_then(|class| class.longest_match(&layout[pos..]));
            match token {
                Some(token) => {
                    match token.fragment {
                        Fragment::Native { parse, .. } if for_parsing => out.push_native(parse),
                        Fragment::Native { format, .. } => out.push_native(format),
                        Fragment::Ordinal(_) if for_parsing => {
                            return Err(FormatError::OrdinalNotSupportedForParsing {
                                token: token.text,
                                position: pos,
                            });
                        }
                        Fragment::Ordinal(kind) => out.push_ordinal(kind),
                    }
                    pos += token.text.len();
                }
                None => {
                    out.push_literal(c);
                    pos = next;
                }
            }
        }

        Ok(out.finish())
    }

    // rescan to find the offending token
    fn ordinal_error(&self, layout: &str) -> FormatError {
        match self.scan(layout, true) {
            Err(err) => err,
            Ok(_) => FormatError::AmbiguousFromLayout(layout.to_owned()),
        }
    }

    /// Renders `value` with the intuitive `layout`.
    pub fn format<T: Timestamp + ?Sized>(&self, value: &T, layout: &str) -> FormatResult<String> {
        self.translate(layout, false)?.render(value)
    }

    /// Parses `text`. Values without an offset are read as UTC.
    pub fn parse(&self, layout: &str, text: &str) -> FormatResult<DateTime<FixedOffset>> {
        let native = self.parsing_layout(layout)?;
        parser::parse_fixed(&native, text)
    }

    /// Parses `text`, reading values without an offset as local to `tz`.
    pub fn parse_in_location<Tz: TimeZone>(
        &self,
        layout: &str,
        text: &str,
        tz: &Tz,
    ) -> FormatResult<DateTime<Tz>> {
        let native = self.parsing_layout(layout)?;
        parser::parse_in(&native, text, tz)
    }

    /// Reads `text` with `from` and writes it back out with `to`.
    pub fn convert(&self, text: &str, from: &str, to: &str) -> FormatResult<String> {
        if from == to {
            return Ok(text.to_owned());
        }
        if self.translate(from, false)?.has_ordinals() {
            return Err(FormatError::AmbiguousFromLayout(from.to_owned()));
        }
        let value = self.parse(from, text)?;
        self.format(&value, to)
    }

    fn parsing_layout(&self, layout: &str) -> FormatResult<String> {
        match self.translate(layout, true)? {
            TranslatedLayout::Literal(native) => Ok(native),
            TranslatedLayout::Segments(_) => Err(self.ordinal_error(layout)),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Translator::new()
    }
}

/// Accumulates the native layout, splitting it around ordinals.
#[derive(Default)]
struct Builder {
    current: String,
    segments: Option<Vec<Segment>>,
}

impl Builder {
    fn push_native(&mut self, native: &str) {
        self.current.push_str(native);
    }

    fn push_literal(&mut self, c: char) {
        if c == '%' {
            self.current.push_str("%%");
        } else {
            self.current.push(c);
        }
    }

    fn push_ordinal(&mut self, kind: OrdinalKind) {
        let literal = Segment::Literal(std::mem::take(&mut self.current));
        self.segments
            .get_or_insert_with(Vec::new)
            .extend([literal, Segment::Ordinal(kind)]);
    }

    fn finish(self) -> TranslatedLayout {
        match self.segments {
            None => TranslatedLayout::Literal(self.current),
            Some(mut segments) => {
                segments.push(Segment::Literal(self.current));
                TranslatedLayout::Segments(segments)
            }
        }
    }
}
