//! The shared rule-cascade contract.
//!
//! Every language normalizer is a [`Cascade`]: declarative tables evaluated
//! in one fixed order, stopping at the first hit.
//!
//! ```text
//! 1. irregular     exact lookup                       table.irregular
//! 2. canonical     word already in dictionary form    1.0 (fixed point)
//! 3. compound      strip marker, recurse, re-attach   min(inner, table.compound)
//! 4. orthographic  fold, recurse                      min(inner, table.orthographic)
//! 5. suffix        compositional rules                table.for_rule(category)
//! 6. fallback      generic heuristics                 table.fallback
//! 7. none          word unchanged                     1.0
//! ```
//!
//! Suffix and fallback rules are sorted by specificity (longest affix first)
//! when the cascade is built, so a short generic suffix can never mask a
//! longer specific one regardless of declaration order. Rules of equal
//! length keep their declaration order.
//!
//! `normalize` feeds the stem back through the cascade until it stops
//! changing, so stacked suffixes (`ekliyordu` → `ekliyor` → `ekle`) come off
//! in one call and the result is always a fixed point. Confidence is the
//! weakest round's.
//!
//! A canonical ending only blocks rules whose affix is not longer than the
//! ending itself: `추가했다` still reaches the `했다` rule even though Korean
//! treats a bare `-다` as canonical.

use std::collections::HashMap;

use tracing::trace;

use crate::MorphologicalNormalizer;
use crate::confidence::ConfidenceTable;
use crate::result::{Conjugation, NormalizationResult};

/// Compound strips recurse; this bounds the recursion.
const MAX_DEPTH: usize = 3;

/// Rounds after which only a stem that gets shorter is fed back again.
const MAX_ROUNDS: usize = 8;

/// A predicate over the stem left behind once a rule's affix is removed.
pub type Guard = fn(&str) -> bool;

/// Replace a suffix (and optionally a prefix) with a dictionary ending.
#[derive(Debug, Clone)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    /// Also required and stripped at the front (de circumfix `ge…t`).
    pub prefix: Option<&'static str>,
    pub category: Conjugation,
    /// Minimum characters that must remain once affixes are removed.
    pub min_stem: usize,
    pub guard: Option<Guard>,
}

impl SuffixRule {
    pub fn new(suffix: &'static str, replacement: &'static str, category: Conjugation) -> Self {
        SuffixRule {
            suffix,
            replacement,
            prefix: None,
            category,
            min_stem: 1,
            guard: None,
        }
    }

    pub fn min_stem(mut self, chars: usize) -> Self {
        self.min_stem = chars;
        self
    }

    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    fn suffix_len(&self) -> usize {
        self.suffix.chars().count()
    }

    fn specificity(&self) -> usize {
        self.suffix_len() + self.prefix.map_or(0, |p| p.chars().count())
    }

    fn apply(&self, word: &str) -> Option<String> {
        let rest = word.strip_suffix(self.suffix)?;
        let rest = match self.prefix {
            Some(prefix) => rest.strip_prefix(prefix)?,
            None => rest,
        };
        if rest.chars().count() < self.min_stem {
            return None;
        }
        if let Some(guard) = self.guard {
            if !guard(rest) {
                return None;
            }
        }
        Some(format!("{rest}{}", self.replacement))
    }
}

/// Where a compound marker sits on the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affix {
    Prefix(&'static str),
    Suffix(&'static str),
}

impl Affix {
    fn text(&self) -> &'static str {
        match self {
            Affix::Prefix(text) | Affix::Suffix(text) => text,
        }
    }

    fn len(&self) -> usize {
        self.text().chars().count()
    }

    fn strip<'a>(&self, word: &'a str) -> Option<&'a str> {
        match self {
            Affix::Prefix(text) => word.strip_prefix(text),
            Affix::Suffix(text) => word.strip_suffix(text),
        }
    }

    fn attach(&self, base: &str, marker: &str) -> String {
        match self {
            Affix::Prefix(_) => format!("{marker}{base}"),
            Affix::Suffix(_) => format!("{base}{marker}"),
        }
    }
}

/// Strip an outer marker, normalize what is left, then optionally put a
/// canonical marker back (ru `переключись` → `переключи` → `переключить` →
/// `переключиться`).
#[derive(Debug, Clone)]
pub struct CompoundRule {
    pub affix: Affix,
    pub reattach: Option<&'static str>,
    pub category: Conjugation,
    pub min_base: usize,
    pub guard: Option<Guard>,
}

impl CompoundRule {
    pub fn suffix(marker: &'static str, category: Conjugation) -> Self {
        Self::new(Affix::Suffix(marker), category)
    }

    pub fn prefix(marker: &'static str, category: Conjugation) -> Self {
        Self::new(Affix::Prefix(marker), category)
    }

    fn new(affix: Affix, category: Conjugation) -> Self {
        CompoundRule {
            affix,
            reattach: None,
            category,
            min_base: 2,
            guard: None,
        }
    }

    pub fn reattach(mut self, marker: &'static str) -> Self {
        self.reattach = Some(marker);
        self
    }

    pub fn min_base(mut self, chars: usize) -> Self {
        self.min_base = chars;
        self
    }

    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    fn split<'a>(&self, word: &'a str) -> Option<&'a str> {
        let base = self.affix.strip(word)?;
        if base.chars().count() < self.min_base {
            return None;
        }
        match self.guard {
            Some(guard) if !guard(base) => None,
            _ => Some(base),
        }
    }
}

/// A language's normalizer, built from declarative tables.
#[derive(Debug)]
pub struct Cascade {
    language: &'static str,
    confidence: &'static ConfidenceTable,
    script: fn(char) -> bool,
    min_len: usize,
    irregular: HashMap<&'static str, &'static str>,
    canonical_endings: Vec<&'static str>,
    compounds: Vec<CompoundRule>,
    fold: Option<fn(&str) -> Option<String>>,
    suffixes: Vec<SuffixRule>,
    fallbacks: Vec<SuffixRule>,
}

impl Cascade {
    pub fn builder(
        language: &'static str,
        confidence: &'static ConfidenceTable,
        script: fn(char) -> bool,
    ) -> CascadeBuilder {
        CascadeBuilder {
            cascade: Cascade {
                language,
                confidence,
                script,
                min_len: 2,
                irregular: HashMap::new(),
                canonical_endings: Vec::new(),
                compounds: Vec::new(),
                fold: None,
                suffixes: Vec::new(),
                fallbacks: Vec::new(),
            },
        }
    }

    /// Compositional rules in evaluation order.
    pub fn suffix_rules(&self) -> &[SuffixRule] {
        &self.suffixes
    }

    fn run(&self, word: &str, depth: usize) -> NormalizationResult {
        let lower = word.to_lowercase();
        let table = self.confidence;

        if let Some(stem) = self.irregular.get(lower.as_str()) {
            trace!(language = self.language, word, stem = %stem, "irregular form");
            return NormalizationResult::changed(
                *stem,
                table.irregular,
                Vec::new(),
                Conjugation::Irregular,
            );
        }

        let canonical = self
            .canonical_endings
            .iter()
            .filter(|ending| lower.ends_with(**ending))
            .map(|ending| ending.chars().count())
            .max();
        let outranks = |affix_len: usize| canonical.is_none_or(|len| affix_len > len);

        if depth < MAX_DEPTH {
            for rule in &self.compounds {
                if !outranks(rule.affix.len()) {
                    continue;
                }
                let Some(base) = rule.split(&lower) else {
                    continue;
                };
                let inner = self.run(base, depth + 1);
                let stem = match rule.reattach {
                    Some(marker) => rule.affix.attach(&inner.stem, marker),
                    None => inner.stem,
                };
                let mut removed = vec![rule.affix.text().to_string()];
                removed.extend(inner.metadata.removed_suffixes);
                trace!(language = self.language, word, stem = %stem, "compound strip");
                return NormalizationResult::changed(
                    stem,
                    inner.confidence.min(table.compound),
                    removed,
                    rule.category,
                );
            }

            if canonical.is_none() {
                if let Some(folded) = self.fold.and_then(|fold| fold(&lower)) {
                    if folded != lower {
                        let inner = self.run(&folded, depth + 1);
                        let kind = inner
                            .metadata
                            .conjugation_type
                            .unwrap_or(Conjugation::Orthographic);
                        return NormalizationResult::changed(
                            inner.stem,
                            inner.confidence.min(table.orthographic),
                            inner.metadata.removed_suffixes,
                            kind,
                        );
                    }
                }
            }
        }

        for rule in &self.suffixes {
            if !outranks(rule.suffix_len()) {
                continue;
            }
            if let Some(stem) = rule.apply(&lower) {
                trace!(language = self.language, word, stem = %stem, suffix = rule.suffix, "suffix rule");
                return NormalizationResult::changed(
                    stem,
                    table.for_rule(rule.category),
                    vec![rule.suffix.to_string()],
                    rule.category,
                );
            }
        }

        if canonical.is_some() {
            return NormalizationResult::unchanged(word);
        }

        for rule in &self.fallbacks {
            if let Some(stem) = rule.apply(&lower) {
                trace!(language = self.language, word, stem = %stem, suffix = rule.suffix, "fallback rule");
                return NormalizationResult::changed(
                    stem,
                    table.fallback.min(table.for_rule(rule.category)),
                    vec![rule.suffix.to_string()],
                    rule.category,
                );
            }
        }

        NormalizationResult::unchanged(word)
    }
}

impl MorphologicalNormalizer for Cascade {
    fn language(&self) -> &str {
        self.language
    }

    fn is_normalizable(&self, word: &str) -> bool {
        word.chars().count() >= self.min_len
            && word.chars().any(self.script)
            && !word
                .chars()
                .any(|c| c.is_ascii_digit() || c.is_whitespace())
    }

    fn normalize(&self, word: &str) -> NormalizationResult {
        if !self.is_normalizable(word) {
            return NormalizationResult::unchanged(word);
        }
        let mut result = self.run(word, 0);
        let mut rounds = 0;
        while !result.is_unchanged() && self.is_normalizable(&result.stem) {
            let next = self.run(&result.stem, 0);
            if next.is_unchanged() || next.stem == result.stem {
                break;
            }
            rounds += 1;
            let shrinks = next.stem.chars().count() < result.stem.chars().count();
            if rounds > MAX_ROUNDS && !shrinks {
                break;
            }
            trace!(language = self.language, from = %result.stem, to = %next.stem, "stem reduced again");
            result = result.then(next);
        }
        result
    }
}

/// Builder for [`Cascade`].
pub struct CascadeBuilder {
    cascade: Cascade,
}

impl CascadeBuilder {
    /// Words shorter than this are never normalized.
    pub fn min_len(mut self, chars: usize) -> Self {
        self.cascade.min_len = chars;
        self
    }

    pub fn irregular(mut self, forms: &[(&'static str, &'static str)]) -> Self {
        self.cascade.irregular.extend(forms.iter().copied());
        self
    }

    pub fn canonical_endings(mut self, endings: &[&'static str]) -> Self {
        self.cascade.canonical_endings.extend_from_slice(endings);
        self
    }

    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.cascade.compounds.push(rule);
        self
    }

    pub fn fold(mut self, fold: fn(&str) -> Option<String>) -> Self {
        self.cascade.fold = Some(fold);
        self
    }

    pub fn suffixes(mut self, rules: impl IntoIterator<Item = SuffixRule>) -> Self {
        self.cascade.suffixes.extend(rules);
        self
    }

    pub fn fallbacks(mut self, rules: impl IntoIterator<Item = SuffixRule>) -> Self {
        self.cascade.fallbacks.extend(rules);
        self
    }

    pub fn build(mut self) -> Cascade {
        // Stable sorts: equal-length rules keep declaration order.
        self.cascade
            .suffixes
            .sort_by(|a, b| b.specificity().cmp(&a.specificity()));
        self.cascade
            .fallbacks
            .sort_by(|a, b| b.specificity().cmp(&a.specificity()));
        self.cascade
            .compounds
            .sort_by(|a, b| b.affix.len().cmp(&a.affix.len()));
        self.cascade
    }
}
