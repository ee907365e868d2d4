//! Language profiles.
//!
//! A profile is everything the engine knows about one language: its word
//! order, how it marks each semantic role, its command dictionary, and how
//! to find word boundaries. Profiles are plain data, built once at startup
//! and never mutated.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::role::{MarkerPosition, RoleMarker, SemanticRole};

/// Which positional field of a role definition governs surface order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordOrder {
    #[serde(rename = "SVO")]
    Svo,
    #[serde(rename = "SOV")]
    Sov,
    #[serde(rename = "VSO")]
    Vso,
    /// Verb-second (German, Dutch). Commands are verb-initial imperatives,
    /// so arguments follow SVO order.
    #[serde(rename = "V2")]
    V2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbPosition {
    #[default]
    Start,
    End,
    Second,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerbMorphology {
    pub position: VerbPosition,
    /// Light inflectional suffixes the tokenizer may strip when the language
    /// has no normalizer (Indonesian `-kan`, `-lah`).
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// A command word: the form used when rendering plus accepted variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub primary: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl Keyword {
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.alternatives.iter().map(String::as_str))
    }
}

/// How the tokenizer finds word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryStrategy {
    /// Words are separated by whitespace.
    #[default]
    Whitespace,
    /// Whitespace, plus particles that attach to the end of a word
    /// (`목록에`, `listeye`) or markers fused to its start (`بالقائمة`).
    Particle,
    /// No whitespace required: dictionary longest-match at every position.
    Dictionary,
}

/// A marker fused to the front of a word. The first `marker.len()` bytes
/// of a word starting with `prefix` are split off as a marker token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    pub prefix: String,
    pub marker: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tokenization {
    /// Particles that may be split off the end of a word, in any order;
    /// the tokenizer tries them longest-first.
    #[serde(default)]
    pub particles: Vec<String>,
    #[serde(default)]
    pub prefixes: Vec<PrefixRule>,
    #[serde(default)]
    pub boundary: BoundaryStrategy,
    /// Characters a word must keep once a particle is split off.
    #[serde(default = "default_min_stem")]
    pub min_stem: usize,
    /// Words the dictionary segmenter keeps whole even though a marker is
    /// spelled inside them.
    #[serde(default)]
    pub words: Vec<String>,
}

fn default_min_stem() -> usize {
    1
}

impl Default for Tokenization {
    fn default() -> Self {
        Tokenization {
            particles: Vec::new(),
            prefixes: Vec::new(),
            boundary: BoundaryStrategy::Whitespace,
            min_stem: default_min_stem(),
            words: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub code: String,
    pub name: String,
    pub word_order: WordOrder,
    pub uses_spaces: bool,
    pub verb: VerbMorphology,
    /// Where markers sit when a role has no explicit [`RoleMarker`]
    /// (schema-level overrides, for example).
    #[serde(default)]
    pub marker_position: MarkerPosition,
    pub role_markers: IndexMap<SemanticRole, RoleMarker>,
    /// Command dictionary, keyed by action name.
    pub keywords: IndexMap<String, Keyword>,
    #[serde(default)]
    pub tokenization: Tokenization,
}

impl LanguageProfile {
    pub fn new(code: impl Into<String>, name: impl Into<String>, word_order: WordOrder) -> Self {
        let marker_position = match word_order {
            WordOrder::Sov => MarkerPosition::After,
            _ => MarkerPosition::Before,
        };
        let position = match word_order {
            WordOrder::Sov => VerbPosition::End,
            _ => VerbPosition::Start,
        };
        LanguageProfile {
            code: code.into(),
            name: name.into(),
            word_order,
            uses_spaces: true,
            verb: VerbMorphology {
                position,
                suffixes: Vec::new(),
            },
            marker_position,
            role_markers: IndexMap::new(),
            keywords: IndexMap::new(),
            tokenization: Tokenization::default(),
        }
    }

    /// Scripts written without spaces; switches to dictionary segmentation.
    pub fn without_spaces(mut self) -> Self {
        self.uses_spaces = false;
        self.tokenization.boundary = BoundaryStrategy::Dictionary;
        self
    }

    pub fn verb_at(mut self, position: VerbPosition) -> Self {
        self.verb.position = position;
        self
    }

    pub fn verb_suffixes(mut self, suffixes: &[&str]) -> Self {
        self.verb.suffixes.extend(suffixes.iter().map(|s| s.to_string()));
        self
    }

    pub fn marker(mut self, role: SemanticRole, marker: RoleMarker) -> Self {
        self.role_markers.insert(role, marker);
        self
    }

    pub fn keyword(mut self, action: &str, primary: &str, alternatives: &[&str]) -> Self {
        self.keywords.insert(
            action.to_string(),
            Keyword {
                primary: primary.to_string(),
                alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
            },
        );
        self
    }

    pub fn particles(mut self, particles: &[&str]) -> Self {
        self.tokenization.boundary = BoundaryStrategy::Particle;
        self.tokenization
            .particles
            .extend(particles.iter().map(|p| p.to_string()));
        self
    }

    pub fn prefix_rule(mut self, prefix: &str, marker: &str) -> Self {
        self.tokenization.boundary = BoundaryStrategy::Particle;
        self.tokenization.prefixes.push(PrefixRule {
            prefix: prefix.to_string(),
            marker: marker.to_string(),
        });
        self
    }

    pub fn min_stem(mut self, chars: usize) -> Self {
        self.tokenization.min_stem = chars;
        self
    }

    pub fn words(mut self, words: &[&str]) -> Self {
        self.tokenization
            .words
            .extend(words.iter().map(|w| w.to_string()));
        self
    }

    /// The marker for `role`, if the language marks it at all.
    pub fn role_marker(&self, role: SemanticRole) -> Option<&RoleMarker> {
        self.role_markers.get(&role).filter(|m| !m.primary.is_empty())
    }

    /// Where the marker for `role` sits.
    pub fn marker_position_for(&self, role: SemanticRole) -> MarkerPosition {
        self.role_markers
            .get(&role)
            .map_or(self.marker_position, |m| m.position)
    }

    pub fn keyword_for(&self, action: &str) -> Option<&Keyword> {
        self.keywords.get(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sov_profiles_default_to_postpositions_and_final_verbs() {
        let profile = LanguageProfile::new("ja", "Japanese", WordOrder::Sov).without_spaces();
        assert_eq!(profile.marker_position, MarkerPosition::After);
        assert_eq!(profile.verb.position, VerbPosition::End);
        assert_eq!(profile.tokenization.boundary, BoundaryStrategy::Dictionary);
        assert!(!profile.uses_spaces);
    }

    #[test]
    fn empty_primary_means_unmarked() {
        let profile = LanguageProfile::new("en", "English", WordOrder::Svo)
            .marker(SemanticRole::Patient, RoleMarker::before(""))
            .marker(SemanticRole::Destination, RoleMarker::before("to"));
        assert!(profile.role_marker(SemanticRole::Patient).is_none());
        assert_eq!(
            profile.role_marker(SemanticRole::Destination).map(|m| m.primary.as_str()),
            Some("to")
        );
    }

    #[test]
    fn profile_round_trips_through_json() {
        let profile = LanguageProfile::new("tr", "Turkish", WordOrder::Sov)
            .particles(&["ye", "ya"])
            .min_stem(3)
            .keyword("add", "ekle", &[]);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"word_order\":\"SOV\""));
        let back: LanguageProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
