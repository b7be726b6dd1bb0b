use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// `dt` and `mt` have no native equivalent and cannot be read back.
    #[error("ordinal token {token:?} at position {position} cannot be used for parsing")]
    OrdinalNotSupportedForParsing {
        token: &'static str,
        position: usize,
    },

    #[error("could not parse {text:?} with layout {layout:?}: {source}")]
    NativeParseFailure {
        layout: String,
        text: String,
        #[source]
        source: chrono::format::ParseError,
    },

    #[error("layout {0:?} contains ordinal tokens and cannot be converted from")]
    AmbiguousFromLayout(String),

    #[error("value cannot be rendered with native layout {layout:?}")]
    NativeFormatFailure { layout: String },
}

pub type FormatResult<T> = Result<T, FormatError>;
