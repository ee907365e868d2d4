//! The per-language dictionary the tokenizer segments against.
//!
//! Keywords, role markers and particles are flattened into one list sorted
//! longest-first, so `ke dalam` wins over `ke` and `非表示` over `表示`.
//! Entries of equal length keep keyword → marker → particle → word
//! precedence, then declaration order.

use std::cmp::Reverse;

use crate::profile::LanguageProfile;
use crate::role::MarkerPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Keyword,
    Marker,
    Particle,
    /// A word the dictionary segmenter keeps whole (`现在`).
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Lowercased surface form; may span several words.
    pub surface: String,
    pub kind: EntryKind,
    /// Action name for keywords, role tag for role markers.
    pub canonical: Option<String>,
    /// Postpositions and particles, which only ever follow a value.
    pub trailing: bool,
    words: Vec<String>,
}

impl LexiconEntry {
    fn new(surface: &str, kind: EntryKind, canonical: Option<&str>, trailing: bool) -> Self {
        let surface = surface.to_lowercase();
        let words = surface.split_whitespace().map(str::to_string).collect();
        LexiconEntry {
            surface,
            kind,
            canonical: canonical.map(str::to_string),
            trailing,
            words,
        }
    }

    fn char_len(&self) -> usize {
        self.words.iter().map(|w| w.chars().count()).sum()
    }

    /// Byte length of the prefix of `text` spelling this entry, if any.
    /// Case-insensitive; multi-word entries accept any run of whitespace
    /// between their words.
    fn prefix_len(&self, text: &str) -> Option<usize> {
        let mut consumed = 0;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                let rest = &text[consumed..];
                let gap = rest.len() - rest.trim_start().len();
                if gap == 0 {
                    return None;
                }
                consumed += gap;
            }
            consumed += strip_prefix_ignore_case(&text[consumed..], word)?;
        }
        Some(consumed)
    }
}

/// Bytes of `text` matched by `word` (already lowercase).
fn strip_prefix_ignore_case(text: &str, word: &str) -> Option<usize> {
    let mut expected = word.chars();
    let mut consumed = 0;
    for (offset, c) in text.char_indices() {
        if expected.as_str().is_empty() {
            return Some(offset);
        }
        for lower in c.to_lowercase() {
            if expected.next() != Some(lower) {
                return None;
            }
        }
        consumed = offset + c.len_utf8();
    }
    expected.as_str().is_empty().then_some(consumed)
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Keywords, role markers, particles and whole words from `profile`.
    pub fn from_profile(profile: &LanguageProfile) -> Self {
        let mut lexicon = Lexicon::default();
        for (action, keyword) in &profile.keywords {
            for form in keyword.forms() {
                lexicon.push(form, EntryKind::Keyword, Some(action.as_str()), false);
            }
        }
        for (role, marker) in &profile.role_markers {
            let trailing = marker.position == MarkerPosition::After;
            for form in marker.forms() {
                lexicon.push(form, EntryKind::Marker, Some(role.as_str()), trailing);
            }
        }
        for particle in &profile.tokenization.particles {
            lexicon.push(particle, EntryKind::Particle, None, true);
        }
        for word in &profile.tokenization.words {
            lexicon.push(word, EntryKind::Word, None, false);
        }
        lexicon.sort();
        lexicon
    }

    /// Add markers that are not part of the profile, such as schema
    /// overrides or literals used by hand-authored patterns.
    pub fn with_markers<'a>(mut self, markers: impl IntoIterator<Item = &'a str>) -> Self {
        for marker in markers {
            self.push(marker, EntryKind::Marker, None, false);
        }
        self.sort();
        self
    }

    fn push(&mut self, surface: &str, kind: EntryKind, canonical: Option<&str>, trailing: bool) {
        if surface.trim().is_empty() {
            return;
        }
        let entry = LexiconEntry::new(surface, kind, canonical, trailing);
        if !self.entries.iter().any(|e| e.surface == entry.surface) {
            self.entries.push(entry);
        }
    }

    fn sort(&mut self) {
        self.entries
            .sort_by_key(|entry| (Reverse(entry.char_len()), entry.kind));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Exact, case-insensitive lookup of a whole word.
    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        let word = word.to_lowercase();
        self.entries.iter().find(|e| e.surface == word)
    }

    /// The longest entry spelled at the start of `text`, with its byte
    /// length in `text`.
    pub fn longest_match(&self, text: &str) -> Option<(&LexiconEntry, usize)> {
        self.entries
            .iter()
            .find_map(|entry| entry.prefix_len(text).map(|len| (entry, len)))
    }

    /// Like [`Lexicon::longest_match`], but the match must end at a word
    /// boundary as decided by `is_boundary` on the following character.
    pub fn longest_word_match(
        &self,
        text: &str,
        is_boundary: impl Fn(char) -> bool,
    ) -> Option<(&LexiconEntry, usize)> {
        self.entries.iter().find_map(|entry| {
            let len = entry.prefix_len(text)?;
            text[len..]
                .chars()
                .next()
                .is_none_or(&is_boundary)
                .then_some((entry, len))
        })
    }

    /// The keyword entry spelled by `word`, if any.
    pub fn keyword(&self, word: &str) -> Option<&LexiconEntry> {
        self.lookup(word).filter(|e| e.kind == EntryKind::Keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::WordOrder;
    use crate::role::{RoleMarker, SemanticRole};
    use pretty_assertions::assert_eq;

    fn indonesian() -> Lexicon {
        let profile = LanguageProfile::new("id", "Indonesian", WordOrder::Svo)
            .keyword("add", "tambah", &["tambahkan"])
            .keyword("put", "taruh", &[])
            .marker(SemanticRole::Destination, RoleMarker::before("ke").alt("ke dalam"));
        Lexicon::from_profile(&profile)
    }

    #[test]
    fn longest_entry_is_tried_first() {
        let lexicon = indonesian();
        assert_eq!(lexicon.entries()[0].surface, "tambahkan");
        let (entry, len) = lexicon.longest_match("ke  dalam #list").unwrap();
        assert_eq!(entry.surface, "ke dalam");
        assert_eq!(len, "ke  dalam".len());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lexicon = indonesian();
        let entry = lexicon.lookup("Tambah").unwrap();
        assert_eq!(entry.kind, EntryKind::Keyword);
        assert_eq!(entry.canonical.as_deref(), Some("add"));
        assert!(lexicon.lookup("tambahan").is_none());
    }

    #[test]
    fn word_match_requires_a_boundary() {
        let lexicon = indonesian();
        assert!(lexicon.longest_word_match("keluar", char::is_whitespace).is_none());
        let (entry, _) = lexicon.longest_word_match("ke #x", char::is_whitespace).unwrap();
        assert_eq!(entry.canonical.as_deref(), Some("destination"));
    }

    #[test]
    fn extra_markers_do_not_shadow_existing_entries() {
        let lexicon = indonesian().with_markers(["ke", "pada"]);
        assert_eq!(lexicon.lookup("ke").unwrap().canonical.as_deref(), Some("destination"));
        assert_eq!(lexicon.lookup("pada").unwrap().kind, EntryKind::Marker);
    }

    #[test]
    fn dictionary_match_without_spaces() {
        let profile = LanguageProfile::new("ja", "Japanese", WordOrder::Sov)
            .without_spaces()
            .keyword("show", "表示", &[])
            .keyword("hide", "非表示", &[]);
        let lexicon = Lexicon::from_profile(&profile);
        let (entry, len) = lexicon.longest_match("非表示して").unwrap();
        assert_eq!(entry.canonical.as_deref(), Some("hide"));
        assert_eq!(len, "非表示".len());
    }

    #[test]
    fn whole_words_outrank_the_markers_inside_them() {
        let profile = LanguageProfile::new("zh", "Chinese", WordOrder::Svo)
            .without_spaces()
            .marker(SemanticRole::Goal, RoleMarker::before("在"))
            .words(&["现在"]);
        let lexicon = Lexicon::from_profile(&profile);
        let (entry, _) = lexicon.longest_match("现在显示").unwrap();
        assert_eq!(entry.kind, EntryKind::Word);
        assert!(!lexicon.lookup("在").unwrap().trailing);
    }

    #[test]
    fn postpositions_are_trailing() {
        let profile = LanguageProfile::new("ja", "Japanese", WordOrder::Sov)
            .without_spaces()
            .marker(SemanticRole::Destination, RoleMarker::after("に"));
        let lexicon = Lexicon::from_profile(&profile).with_markers(["して"]);
        assert!(lexicon.lookup("に").unwrap().trailing);
        assert!(!lexicon.lookup("して").unwrap().trailing);
    }
}
