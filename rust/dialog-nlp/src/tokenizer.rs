//! Profile-driven tokenization.
//!
//! At each position the tokenizer tries, in order:
//!
//! ```text
//! fused particle   'ye after a selector           (particle languages)
//! quoted/bracketed "milk", 「牛乳」, (a b)          → literal (opaque)
//! selector         #id .class @attr *prop <tag/>  → selector
//! url / path       https://…, /api/items          → literal
//! number           2, 3.5, 500ms                  → literal
//! punctuation      , ; ! ? 。 、 …                 → punctuation
//! dictionary       longest keyword/marker match   → keyword / marker
//! word             lookup → normalizer → suffix → particle split → identifier
//! ```
//!
//! Dictionary-segmented scripts (no spaces) skip the word step: unknown
//! runs extend up to the next dictionary hit, and a keyword hit absorbs
//! the kana run after it when the normalizer maps the whole back to the
//! keyword (`追加してください` → `追加`). Postpositions only count as hits
//! after a value, and the profile's known words (`现在`) outrank the
//! markers spelled inside them.
//!
//! Unrecognized spans become `unknown` tokens; tokenization never fails.

use std::collections::VecDeque;

use dialog_morphology::MorphologicalNormalizer;
use tracing::trace;

use crate::lexicon::{EntryKind, Lexicon, LexiconEntry};
use crate::profile::{BoundaryStrategy, LanguageProfile};
use crate::token::{Token, TokenKind};

const QUOTES: &[(char, char)] = &[
    ('"', '"'),
    ('\'', '\''),
    ('`', '`'),
    ('“', '”'),
    ('「', '」'),
    ('『', '』'),
    ('«', '»'),
];

const BRACKETS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}')];

const PUNCTUATION: &[char] = &[
    ',', ';', '!', '?', ':', '。', '、', '，', '！', '？', '：', '；', '؟', '،',
];

const APOSTROPHES: &[char] = &['\'', '’'];

/// Confidence of a keyword recognized by stripping one of the profile's
/// verb suffixes.
const VERB_SUFFIX_CONFIDENCE: f64 = 0.8;

/// Tokenize `text` with `profile`. The returned iterator is finite and
/// cannot be restarted.
pub fn tokenize<'a>(
    text: &'a str,
    profile: &'a LanguageProfile,
    lexicon: &'a Lexicon,
    normalizer: Option<&'a dyn MorphologicalNormalizer>,
) -> Tokenizer<'a> {
    Tokenizer::new(text, profile, lexicon, normalizer)
}

pub struct Tokenizer<'a> {
    text: &'a str,
    offset: usize,
    profile: &'a LanguageProfile,
    lexicon: &'a Lexicon,
    normalizer: Option<&'a dyn MorphologicalNormalizer>,
    particles: Vec<&'a str>,
    pending: VecDeque<Token>,
    /// Whether the last scanned token can fill a role.
    after_value: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(
        text: &'a str,
        profile: &'a LanguageProfile,
        lexicon: &'a Lexicon,
        normalizer: Option<&'a dyn MorphologicalNormalizer>,
    ) -> Self {
        let mut particles: Vec<&str> = profile
            .tokenization
            .particles
            .iter()
            .map(String::as_str)
            .collect();
        particles.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
        Tokenizer {
            text,
            offset: 0,
            profile,
            lexicon,
            normalizer,
            particles,
            pending: VecDeque::new(),
            after_value: false,
        }
    }

    fn boundary(&self) -> BoundaryStrategy {
        self.profile.tokenization.boundary
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token {
        Token::new(kind, &self.text[start..end], start..end, self.profile.code.as_str())
    }

    fn entry_token(&self, entry: &LexiconEntry, start: usize, end: usize) -> Token {
        let kind = match entry.kind {
            EntryKind::Keyword => TokenKind::Keyword,
            EntryKind::Marker | EntryKind::Particle => TokenKind::Marker,
            EntryKind::Word => TokenKind::Identifier,
        };
        let token = self.token(kind, start, end);
        match &entry.canonical {
            Some(canonical) => token.with_canonical(canonical),
            None => token,
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.text[self.offset..];
        self.offset += rest.len() - rest.trim_start().len();
    }

    /// Scan one or more tokens starting at `self.offset` into `pending`.
    fn scan(&mut self) {
        let start = self.offset;
        let rest = &self.text[start..];
        let Some(c) = rest.chars().next() else {
            return;
        };

        let tokens = self
            .fused_particle(c, start)
            .or_else(|| self.enclosed(c, start))
            .or_else(|| self.selector(c, start))
            .or_else(|| self.url_or_path(c, start))
            .or_else(|| self.number(c, start))
            .or_else(|| self.punctuation(c, start))
            .map(|token| vec![token])
            .unwrap_or_else(|| {
                if self.boundary() == BoundaryStrategy::Dictionary && !c.is_ascii() {
                    vec![self.dictionary_segment(start)]
                } else {
                    self.word(start)
                }
            });

        if let Some(last) = tokens.last() {
            self.offset = last.range.end.max(start + c.len_utf8());
            self.after_value = last.is_value();
        }
        self.pending.extend(tokens);
    }

    /// `'ye` after a selector or quoted word in particle languages.
    fn fused_particle(&self, c: char, start: usize) -> Option<Token> {
        if self.boundary() != BoundaryStrategy::Particle || !APOSTROPHES.contains(&c) {
            return None;
        }
        let particle_start = start + c.len_utf8();
        let after = &self.text[particle_start..];
        let particle = self.particles.iter().find(|p| {
            after
                .strip_prefix(**p)
                .is_some_and(|rest| rest.chars().next().is_none_or(is_separator))
        })?;
        let end = particle_start + particle.len();
        let marker = self.token(TokenKind::Marker, particle_start, end);
        Some(match self.lexicon.lookup(particle).and_then(|e| e.canonical.as_ref()) {
            Some(canonical) => marker.with_canonical(canonical),
            None => marker,
        })
    }

    /// Quoted strings and balanced brackets are opaque literals. An
    /// unterminated opener swallows the rest of the input as `unknown`.
    fn enclosed(&self, c: char, start: usize) -> Option<Token> {
        let body_start = start + c.len_utf8();
        if let Some((_, close)) = QUOTES.iter().find(|(open, _)| *open == c) {
            let end = self.text[body_start..]
                .find(*close)
                .map(|i| body_start + i + close.len_utf8());
            return Some(self.closed_or_unknown(start, end));
        }
        let (open, close) = BRACKETS.iter().find(|(open, _)| *open == c)?;
        let mut depth = 0usize;
        let mut end = None;
        for (i, ch) in self.text[start..].char_indices() {
            if ch == *open {
                depth += 1;
            } else if ch == *close {
                depth -= 1;
                if depth == 0 {
                    end = Some(start + i + ch.len_utf8());
                    break;
                }
            }
        }
        Some(self.closed_or_unknown(start, end))
    }

    fn closed_or_unknown(&self, start: usize, end: Option<usize>) -> Token {
        match end {
            Some(end) => self.token(TokenKind::Literal, start, end),
            None => self.token(TokenKind::Unknown, start, self.text.len()),
        }
    }

    fn selector(&self, c: char, start: usize) -> Option<Token> {
        let rest = &self.text[start..];
        let next = rest[c.len_utf8()..].chars().next()?;
        if c == '<' && next.is_ascii_alphabetic() {
            let end = rest.find('>')?;
            return Some(self.token(TokenKind::Selector, start, start + end + 1));
        }
        let starts = match c {
            '#' | '@' | '*' => next.is_ascii_alphanumeric() || next == '-' || next == '_',
            '.' => next.is_ascii_alphabetic(),
            _ => false,
        };
        if !starts {
            return None;
        }
        let mut end = start + c.len_utf8();
        let mut chars = rest[c.len_utf8()..].chars().peekable();
        while let Some(ch) = chars.next() {
            let chained = matches!(ch, '.' | '#' | ':')
                && chars.peek().is_some_and(|n| n.is_ascii_alphanumeric());
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || chained {
                end += ch.len_utf8();
            } else {
                break;
            }
        }
        Some(self.token(TokenKind::Selector, start, end))
    }

    fn url_or_path(&self, c: char, start: usize) -> Option<Token> {
        let rest = &self.text[start..];
        let is_url = rest.starts_with("http://") || rest.starts_with("https://");
        let is_path = c == '/' && rest[1..].chars().next().is_some_and(|n| !n.is_whitespace());
        if !is_url && !is_path {
            return None;
        }
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        Some(self.token(TokenKind::Literal, start, start + len))
    }

    /// `2`, `-1`, `3.5`, `500ms`, `50%`.
    fn number(&self, c: char, start: usize) -> Option<Token> {
        let rest = &self.text[start..];
        let signed = (c == '-' || c == '+')
            && rest[1..].chars().next().is_some_and(|n| n.is_ascii_digit());
        if !c.is_ascii_digit() && !signed {
            return None;
        }
        let bytes = rest.as_bytes();
        let mut end = if signed { 1 } else { 0 };
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
            end += 1;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }
        while end < bytes.len() && (bytes[end].is_ascii_alphabetic() || bytes[end] == b'%') {
            end += 1;
        }
        Some(self.token(TokenKind::Literal, start, start + end))
    }

    fn punctuation(&self, c: char, start: usize) -> Option<Token> {
        (PUNCTUATION.contains(&c) || c == '.')
            .then(|| self.token(TokenKind::Punctuation, start, start + c.len_utf8()))
    }

    /// Whitespace- and particle-delimited words.
    fn word(&self, start: usize) -> Vec<Token> {
        let rest = &self.text[start..];
        if let Some((entry, len)) = self.lexicon.longest_word_match(rest, is_separator) {
            return vec![self.entry_token(entry, start, start + len)];
        }
        let dictionary = self.boundary() == BoundaryStrategy::Dictionary;
        let mut len = 0;
        let mut chars = rest.char_indices().peekable();
        while let Some((i, ch)) = chars.next() {
            let trailing_dot = ch == '.'
                && chars.peek().is_none_or(|(_, n)| n.is_whitespace());
            if ch.is_whitespace()
                || PUNCTUATION.contains(&ch)
                || trailing_dot
                || (i > 0 && is_opener(ch))
                || (dictionary && !ch.is_ascii())
            {
                break;
            }
            len = i + ch.len_utf8();
        }
        if len == 0 {
            let width = rest.chars().next().map_or(0, char::len_utf8);
            return vec![self.token(TokenKind::Unknown, start, start + width)];
        }
        self.classify_word(start, start + len)
    }

    fn classify_word(&self, start: usize, end: usize) -> Vec<Token> {
        if let Some(token) = self.recognize(start, end) {
            return vec![token];
        }
        if self.boundary() == BoundaryStrategy::Particle {
            if let Some(tokens) = self.split_prefix(start, end) {
                return tokens;
            }
            if let Some(tokens) = self.split_particle(start, end) {
                return tokens;
            }
        }
        vec![self.bare(start, end)]
    }

    /// Dictionary lookup, then normalizer retry, then verb-suffix retry.
    fn recognize(&self, start: usize, end: usize) -> Option<Token> {
        let word = &self.text[start..end];
        if let Some(entry) = self.lexicon.lookup(word) {
            return Some(self.entry_token(entry, start, end));
        }
        if let Some(token) = self.normalized(start, end) {
            return Some(token);
        }
        let lower = word.to_lowercase();
        self.profile
            .verb
            .suffixes
            .iter()
            .filter_map(|suffix| lower.strip_suffix(suffix.as_str()))
            .filter(|stem| !stem.is_empty())
            .find_map(|stem| {
                let entry = self.lexicon.keyword(stem)?;
                Some(
                    self.entry_token(entry, start, end)
                        .with_normalized(stem, VERB_SUFFIX_CONFIDENCE),
                )
            })
    }

    /// Normalize the word and look the stem up. Canonical words never get
    /// here because the direct lookup already found them.
    fn normalized(&self, start: usize, end: usize) -> Option<Token> {
        let normalizer = self.normalizer?;
        let word = &self.text[start..end];
        if !normalizer.is_normalizable(word) {
            return None;
        }
        let result = normalizer.normalize(word);
        if result.is_unchanged() {
            return None;
        }
        let entry = self.lexicon.lookup(&result.stem)?;
        Some(
            self.entry_token(entry, start, end)
                .with_normalized(result.stem, result.confidence),
        )
    }

    /// `بالقائمة` → `ب` + `القائمة`.
    fn split_prefix(&self, start: usize, end: usize) -> Option<Vec<Token>> {
        let word = &self.text[start..end];
        let rule = self.profile.tokenization.prefixes.iter().find(|rule| {
            word.starts_with(rule.prefix.as_str())
                && word.len() > rule.prefix.len()
                && rule.prefix.starts_with(rule.marker.as_str())
        })?;
        let split = start + rule.marker.len();
        let marker = match self.lexicon.lookup(&rule.marker) {
            Some(entry) => self.entry_token(entry, start, split),
            None => self.token(TokenKind::Marker, start, split),
        };
        let mut tokens = vec![marker];
        tokens.extend(self.classify_word(split, end));
        Some(tokens)
    }

    /// `목록에서` → `목록` + `에서`; `liste'ye` → `liste` + `ye`.
    fn split_particle(&self, start: usize, end: usize) -> Option<Vec<Token>> {
        let word = &self.text[start..end];
        let min_stem = self.profile.tokenization.min_stem;
        self.particles.iter().find_map(|particle| {
            let stem = word.strip_suffix(*particle)?;
            let stem = stem.trim_end_matches(APOSTROPHES);
            if stem.chars().count() < min_stem.max(1) {
                return None;
            }
            let particle_start = end - particle.len();
            let stem_token = self
                .recognize(start, start + stem.len())
                .unwrap_or_else(|| self.bare(start, start + stem.len()));
            let marker = self
                .lexicon
                .lookup(particle)
                .map(|entry| self.entry_token(entry, particle_start, end))
                .unwrap_or_else(|| self.token(TokenKind::Marker, particle_start, end));
            Some(vec![stem_token, marker])
        })
    }

    /// An unrecognized word.
    fn bare(&self, start: usize, end: usize) -> Token {
        let word = &self.text[start..end];
        let identifier = word
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || APOSTROPHES.contains(&c));
        let kind = if identifier {
            TokenKind::Identifier
        } else {
            TokenKind::Unknown
        };
        self.token(kind, start, end)
    }

    /// One token in a script written without spaces.
    fn dictionary_segment(&self, start: usize) -> Token {
        let rest = &self.text[start..];
        // A postposition with nothing before it is the start of a word:
        // `にんじん`, not `に` + `んじん`.
        let hit = self
            .lexicon
            .longest_match(rest)
            .filter(|(entry, _)| !entry.trailing || self.after_value);
        if let Some((entry, len)) = hit {
            let end = start + len;
            if entry.kind == EntryKind::Keyword {
                if let Some(token) = self.extend_keyword(entry, start, end) {
                    return token;
                }
            }
            return self.entry_token(entry, start, end);
        }

        // An unknown run extends to the next dictionary hit.
        let mut end = start;
        for (i, ch) in rest.char_indices() {
            let boundary = ch.is_whitespace()
                || ch.is_ascii()
                || PUNCTUATION.contains(&ch)
                || is_opener(ch)
                || (i > 0 && self.lexicon.longest_match(&rest[i..]).is_some());
            if boundary {
                break;
            }
            end = start + i + ch.len_utf8();
        }
        self.recognize(start, end)
            .unwrap_or_else(|| self.bare(start, end))
    }

    /// Absorb the inflection after a keyword hit: the longest run after
    /// `end` that the normalizer reduces back to the same keyword.
    fn extend_keyword(&self, entry: &LexiconEntry, start: usize, end: usize) -> Option<Token> {
        let normalizer = self.normalizer?;
        let run_len = self.text[end..]
            .char_indices()
            .find(|(_, ch)| ch.is_whitespace() || ch.is_ascii() || PUNCTUATION.contains(ch))
            .map_or(self.text.len() - end, |(i, _)| i);
        let run = &self.text[end..end + run_len];
        let mut cuts: Vec<usize> = run.char_indices().map(|(i, ch)| i + ch.len_utf8()).collect();
        cuts.reverse();
        cuts.into_iter().find_map(|cut| {
            let candidate = &self.text[start..end + cut];
            let result = normalizer.normalize(candidate);
            if result.is_unchanged() {
                return None;
            }
            let stem_entry = self.lexicon.keyword(&result.stem)?;
            (stem_entry.canonical == entry.canonical).then(|| {
                self.entry_token(entry, start, end + cut)
                    .with_normalized(result.stem, result.confidence)
            })
        })
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pending.is_empty() {
            self.skip_whitespace();
            if self.offset >= self.text.len() {
                return None;
            }
            self.scan();
        }
        let token = self.pending.pop_front()?;
        trace!(
            language = %token.language,
            kind = %token.kind,
            value = %token.value,
            confidence = token.confidence,
            "token"
        );
        Some(token)
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || PUNCTUATION.contains(&c) || c == '.'
}

fn is_opener(c: char) -> bool {
    c != '\''
        && (QUOTES.iter().any(|(open, _)| *open == c) || BRACKETS.iter().any(|(open, _)| *open == c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::WordOrder;
    use crate::role::{RoleMarker, SemanticRole};
    use crate::testing;
    use pretty_assertions::assert_eq;

    fn kinds(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.value.as_str())).collect()
    }

    fn run(code: &str, text: &str) -> Vec<Token> {
        let (profile, lexicon, normalizer) = testing::language(code);
        tokenize(text, &profile, &lexicon, normalizer.as_deref()).collect()
    }

    #[test]
    fn english_command_with_selector_and_marker() {
        let tokens = run("en", "add .highlight to #list");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "add"),
                (TokenKind::Selector, ".highlight"),
                (TokenKind::Marker, "to"),
                (TokenKind::Selector, "#list"),
            ]
        );
        assert_eq!(tokens[0].canonical.as_deref(), Some("add"));
        assert_eq!(tokens[2].canonical.as_deref(), Some("destination"));
        assert_eq!(tokens[3].range, 18..23);
    }

    #[test]
    fn quoted_literals_are_opaque() {
        let tokens = run("en", "log \"add to list\" now");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "log"),
                (TokenKind::Literal, "\"add to list\""),
                (TokenKind::Identifier, "now"),
            ]
        );
    }

    #[test]
    fn unterminated_quote_becomes_unknown() {
        let tokens = run("en", "log 'oops");
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].value, "'oops");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn numbers_paths_and_trailing_punctuation() {
        let tokens = run("en", "wait 500ms, fetch /api/items.");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "wait"),
                (TokenKind::Literal, "500ms"),
                (TokenKind::Punctuation, ","),
                (TokenKind::Keyword, "fetch"),
                (TokenKind::Literal, "/api/items."),
            ]
        );
    }

    #[test]
    fn japanese_without_spaces() {
        let tokens = run("ja", "ミルクを追加");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Identifier, "ミルク"),
                (TokenKind::Marker, "を"),
                (TokenKind::Keyword, "追加"),
            ]
        );
    }

    #[test]
    fn postposition_inside_a_leading_word() {
        let tokens = run("ja", "にんじんを追加");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Identifier, "にんじん"),
                (TokenKind::Marker, "を"),
                (TokenKind::Keyword, "追加"),
            ]
        );

        let tokens = run("ja", "リストににんじんを追加");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Identifier, "リスト"),
                (TokenKind::Marker, "に"),
                (TokenKind::Identifier, "にんじん"),
                (TokenKind::Marker, "を"),
                (TokenKind::Keyword, "追加"),
            ]
        );
    }

    #[test]
    fn known_words_keep_their_markers() {
        let profile = LanguageProfile::new("zh", "Chinese", WordOrder::Svo)
            .without_spaces()
            .keyword("show", "显示", &[])
            .marker(SemanticRole::Goal, RoleMarker::before("在"))
            .words(&["现在"]);
        let lexicon = Lexicon::from_profile(&profile);
        let tokens: Vec<Token> = tokenize("现在显示菜单", &profile, &lexicon, None).collect();
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Identifier, "现在"),
                (TokenKind::Keyword, "显示"),
                (TokenKind::Identifier, "菜单"),
            ]
        );
    }

    #[test]
    fn japanese_keyword_absorbs_inflection() {
        let tokens = run("ja", "ミルクを追加してください");
        let verb = &tokens[2];
        assert_eq!(verb.value, "追加してください");
        assert_eq!(verb.normalized.as_deref(), Some("追加"));
        assert_eq!(verb.canonical.as_deref(), Some("add"));
        assert!(verb.confidence < 1.0);
    }

    #[test]
    fn canonical_words_are_not_normalized() {
        let tokens = run("ja", "ミルク を 追加");
        assert!(tokens.iter().all(|t| t.normalized.is_none()));
        assert!(tokens.iter().all(|t| t.confidence == 1.0));
    }

    #[test]
    fn korean_particles_split_from_words() {
        let tokens = run("ko", "우유를 목록에 추가해요");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Identifier, "우유"),
                (TokenKind::Marker, "를"),
                (TokenKind::Identifier, "목록"),
                (TokenKind::Marker, "에"),
                (TokenKind::Keyword, "추가해요"),
            ]
        );
        assert_eq!(tokens[4].normalized.as_deref(), Some("추가"));
    }

    #[test]
    fn unknown_spans_do_not_stop_tokenization() {
        let tokens = run("en", "add § milk");
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[2].value, "milk");
    }
}
