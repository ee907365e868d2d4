//! One module per language: a profile, plus hand-authored patterns where a
//! construction cannot be derived from the schemas.

pub mod arabic;
pub mod chinese;
pub mod english;
pub mod french;
pub mod german;
pub mod indonesian;
pub mod japanese;
pub mod korean;
pub mod russian;
pub mod spanish;
pub mod turkish;
pub mod vietnamese;

use dialog_nlp::{LanguagePattern, LanguageProfile};

/// Codes of the built-in languages, in registration order.
pub const CODES: &[&str] = &[
    "en", "es", "fr", "de", "ru", "ar", "tr", "ja", "ko", "zh", "id", "vi",
];

pub fn profiles() -> Vec<LanguageProfile> {
    vec![
        english::profile(),
        spanish::profile(),
        french::profile(),
        german::profile(),
        russian::profile(),
        arabic::profile(),
        turkish::profile(),
        japanese::profile(),
        korean::profile(),
        chinese::profile(),
        indonesian::profile(),
        vietnamese::profile(),
    ]
}

/// Hand-authored patterns for all languages.
pub fn patterns() -> Vec<LanguagePattern> {
    [english::patterns(), german::patterns(), chinese::patterns()].concat()
}
