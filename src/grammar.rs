//! Token tables for the intuitive layout grammar.
//!
//! A [`Grammar`] is a set of [`TokenClass`]es, each keyed on the (lowercase)
//! character a token starts with, plus the escape character. The translator
//! is table driven, so alternate profiles are just different grammars.

use once_cell::sync::Lazy;

/// Which calendar number an ordinal token renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrdinalKind {
    Day,
    Month,
}

/// What a token translates to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// chrono strftime fragments such as `%Y`, one for writing and one for
    /// reading. They differ where chrono cannot read back what it wrote.
    Native {
        format: &'static str,
        parse: &'static str,
    },
    /// No strftime equivalent; rendered as `1st`, `22nd`, ...
    Ordinal(OrdinalKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: &'static str,
    pub fragment: Fragment,
}

impl Token {
    pub const fn native(text: &'static str, layout: &'static str) -> Token {
        Token::native_split(text, layout, layout)
    }

    pub const fn native_split(text: &'static str, format: &'static str, parse: &'static str) -> Token {
        Token {
            text,
            fragment: Fragment::Native { format, parse },
        }
    }

    pub const fn ordinal(text: &'static str, kind: OrdinalKind) -> Token {
        Token {
            text,
            fragment: Fragment::Ordinal(kind),
        }
    }

    // tokens are ascii, so comparing bytes never splits a char of the input
    fn matches(&self, input: &str) -> bool {
        let input = input.as_bytes();
        let text = self.text.as_bytes();
        input.len() >= text.len() && input[..text.len()].eq_ignore_ascii_case(text)
    }
}

/// All tokens sharing a leading character, kept longest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenClass {
    lead: char,
    tokens: Vec<Token>,
}

impl TokenClass {
    pub fn new(lead: char, tokens: impl IntoIterator<Item = Token>) -> TokenClass {
        let mut tokens: Vec<Token> = tokens.into_iter().collect();
        // stable, so equal lengths keep their declared order
        tokens.sort_by(|a, b| b.text.len().cmp(&a.text.len()));
        TokenClass {
            lead: lead.to_ascii_lowercase(),
            tokens,
        }
    }

    pub fn lead(&self) -> char {
        self.lead
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The longest token of this class that `input` starts with.
    pub fn longest_match(&self, input: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.matches(input))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grammar {
    classes: Vec<TokenClass>,
    escape: char,
}

impl Grammar {
    pub fn new(classes: Vec<TokenClass>, escape: char) -> Grammar {
        Grammar { classes, escape }
    }

    pub fn escape(&self) -> char {
        self.escape
    }

    pub fn classes(&self) -> &[TokenClass] {
        &self.classes
    }

    /// Finds the class for `c`, ignoring ascii case.
    pub fn class_for(&self, c: char) -> Option<&TokenClass> {
        let c = c.to_ascii_lowercase();
        self.classes.iter().find(|class| class.lead == c)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        DEFAULT_GRAMMAR.clone()
    }
}

pub(crate) static DEFAULT_GRAMMAR: Lazy<Grammar> = Lazy::new(|| {
    use OrdinalKind::{Day, Month};

    Grammar::new(
        vec![
            TokenClass::new(
                'y',
                [Token::native("yyyy", "%Y"), Token::native("yy", "%y")],
            ),
            TokenClass::new(
                'm',
                [
                    Token::native("mmmm", "%B"),
                    Token::native("mmm", "%b"),
                    Token::native("mm", "%m"),
                    Token::ordinal("mt", Month),
                    Token::native("m", "%-m"),
                ],
            ),
            TokenClass::new(
                'd',
                [
                    Token::native("ddd", "%j"),
                    Token::native("dd", "%d"),
                    Token::ordinal("dt", Day),
                    Token::native("d", "%-d"),
                ],
            ),
            TokenClass::new(
                'w',
                [Token::native("wwww", "%A"), Token::native("www", "%a")],
            ),
            TokenClass::new(
                'h',
                [
                    Token::native("hhh", "%H"),
                    Token::native("hh", "%I"),
                    Token::native("h", "%-I"),
                ],
            ),
            TokenClass::new('a', [Token::native("aa", "%p"), Token::native("a", "%P")]),
            TokenClass::new('i', [Token::native("ii", "%M"), Token::native("i", "%-M")]),
            TokenClass::new('s', [Token::native("ss", "%S"), Token::native("s", "%-S")]),
            TokenClass::new(
                '.',
                [
                    Token::native(".000000000", "%.9f"),
                    Token::native(".000000", "%.6f"),
                    Token::native(".000", "%.3f"),
                    Token::native(".999999999", "%.f"),
                    Token::native(".999999", "%.f"),
                    Token::native(".999", "%.f"),
                ],
            ),
            TokenClass::new(
                'z',
                [
                    Token::native("zzzz", "%:z"),
                    Token::native("zzz", "%Z"),
                    // chrono only reads hour-only offsets permissively
                    Token::native_split("zhh", "%:::z", "%#z"),
                    Token::native("zz", "%z"),
                    Token::native_split("zh", "%:::z", "%#z"),
                    Token::native("z", "%:z"),
                ],
            ),
        ],
        '\\',
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_longest_first() {
        for class in DEFAULT_GRAMMAR.classes() {
            let lens: Vec<usize> = class.tokens().iter().map(|t| t.text.len()).collect();
            let mut sorted = lens.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(lens, sorted, "class {:?} is out of order", class.lead());
        }
    }

    #[test]
    fn construction_reorders_tokens() {
        let class = TokenClass::new(
            'Q',
            [Token::native("q", "%-d"), Token::native("qqq", "%j"), Token::native("qq", "%d")],
        );
        assert_eq!(class.lead(), 'q');
        let texts: Vec<&str> = class.tokens().iter().map(|t| t.text).collect();
        assert_eq!(texts, ["qqq", "qq", "q"]);
        assert_eq!(class.longest_match("QQ-").map(|t| t.text), Some("qq"));
    }

    #[test]
    fn lookups_ignore_case() {
        let class = DEFAULT_GRAMMAR.class_for('Y').unwrap();
        assert_eq!(
            class.longest_match("YyYy").map(|t| t.fragment),
            Some(Fragment::Native {
                format: "%Y",
                parse: "%Y"
            })
        );
        assert_eq!(class.longest_match("Y-"), None);
        assert!(DEFAULT_GRAMMAR.class_for('-').is_none());
    }

    #[test]
    fn non_ascii_input_does_not_split() {
        let class = DEFAULT_GRAMMAR.class_for('m').unwrap();
        assert_eq!(class.longest_match("mé").map(|t| t.text), Some("m"));
    }
}
