//! Input to the parser: the text, the language it is written in, and an
//! optional per-call confidence threshold.

/// Raw input to [`crate::Parser::parse`].
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    /// The text the user typed.
    pub text: String,

    /// The language of `text`. Defaults to "en".
    pub locale: String,

    /// Overrides the parser's configured threshold for this call.
    pub threshold: Option<crate::score::Confidence>,
}

impl Input {
    pub fn new(text: impl Into<String>) -> Self {
        Input {
            text: text.into(),
            locale: "en".into(),
            threshold: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(crate::score::Confidence::new(threshold));
        self
    }
}
