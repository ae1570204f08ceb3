//! # Intent Matching
//!
//! File: cli/src/chat/intent.rs
//!
//! ## Overview
//!
//! This module holds the intent catalog types and the matching algorithm that
//! decides which canned response answers a question.
//!
//! ## Algorithm
//!
//! Matching is substring containment over normalized text, first match wins:
//! 1. The raw input is normalized (see [`normalize`]).
//! 2. Intents are scanned in catalog declaration order; within an intent, its
//!    triggers are scanned in declaration order.
//! 3. The first trigger whose normalized form occurs anywhere inside the
//!    normalized input ends the search and its intent's response is returned.
//! 4. If nothing matches, the result is [`MatchResult::NoMatch`].
//!
//! Containment is not word-boundary aware: the trigger `"data"` matches inside
//! `"candidatar"`. Overlaps between intents are settled purely by catalog
//! order, so the catalog's order is part of its meaning.
//!
//! ## Examples
//!
//! ```
//! use boteleitor::chat::intent::{Intent, IntentMatcher};
//!
//! let matcher = IntentMatcher::new(vec![
//!     Intent::new("data_eleicao", ["data", "quando"], "09/10/2025"),
//! ])
//! .unwrap();
//!
//! assert_eq!(matcher.find("Quando é?").response(), Some("09/10/2025"));
//! assert!(!matcher.find("Bom dia").is_match());
//! ```
//!
use crate::chat::normalize::normalize;
use crate::core::error::BotError;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, trace};

/// A named category of question with its trigger phrases and fixed response.
///
/// Deserialized from `[[intents]]` tables in the configuration file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Intent {
    /// Stable identifier, unique within a catalog.
    pub name: String,
    /// Trigger phrases in precedence order. Never empty in a valid catalog.
    pub triggers: Vec<String>,
    /// Text returned when one of the triggers is found. May span lines.
    pub response: String,
}

impl Intent {
    /// Convenience constructor, mostly for building catalogs in code.
    pub fn new<I, S>(name: &str, triggers: I, response: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            triggers: triggers.into_iter().map(Into::into).collect(),
            response: response.to_string(),
        }
    }
}

/// Outcome of [`IntentMatcher::find`].
///
/// `NoMatch` is a regular outcome; callers answer it with their fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    Matched {
        /// Name of the matched intent.
        intent: &'a str,
        /// The trigger that fired, as declared in the catalog.
        trigger: &'a str,
        /// The intent's response text.
        response: &'a str,
    },
    NoMatch,
}

impl<'a> MatchResult<'a> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    pub fn intent(&self) -> Option<&'a str> {
        match *self {
            MatchResult::Matched { intent, .. } => Some(intent),
            MatchResult::NoMatch => None,
        }
    }

    pub fn response(&self) -> Option<&'a str> {
        match *self {
            MatchResult::Matched { response, .. } => Some(response),
            MatchResult::NoMatch => None,
        }
    }
}

/// An intent together with its triggers in normalized form.
#[derive(Debug, Clone)]
struct CompiledIntent {
    intent: Intent,
    normalized_triggers: Vec<String>,
}

/// Ordered, immutable intent catalog plus the first-match-wins search.
///
/// Triggers are normalized once, at construction.
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    entries: Vec<CompiledIntent>,
}

impl IntentMatcher {
    /// Builds a matcher from a catalog, keeping its order.
    ///
    /// ## Errors
    ///
    /// - [`BotError::EmptyCatalog`] if `intents` is empty.
    /// - [`BotError::NoTriggers`] if an intent declares no triggers.
    /// - [`BotError::BlankTrigger`] if a trigger normalizes to blank text; it
    ///   would be contained in every input and shadow everything after it.
    /// - [`BotError::DuplicateIntent`] if two intents share a name.
    pub fn new(intents: Vec<Intent>) -> Result<Self, BotError> {
        if intents.is_empty() {
            return Err(BotError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(intents.len());
        for intent in intents {
            if !seen.insert(intent.name.clone()) {
                return Err(BotError::DuplicateIntent { name: intent.name });
            }
            if intent.triggers.is_empty() {
                return Err(BotError::NoTriggers {
                    intent: intent.name,
                });
            }
            let normalized_triggers: Vec<String> =
                intent.triggers.iter().map(|t| normalize(t)).collect();
            if normalized_triggers.iter().any(|t| t.trim().is_empty()) {
                return Err(BotError::BlankTrigger {
                    intent: intent.name,
                });
            }
            entries.push(CompiledIntent {
                intent,
                normalized_triggers,
            });
        }

        debug!("Compiled intent catalog with {} intent(s).", entries.len());
        Ok(Self { entries })
    }

    /// Finds the response for `raw_input`.
    ///
    /// Total over all strings. Blank input simply yields `NoMatch`, since no
    /// valid catalog contains a blank trigger.
    pub fn find(&self, raw_input: &str) -> MatchResult<'_> {
        let normalized = normalize(raw_input);
        trace!("Matching normalized input: {:?}", normalized);

        for entry in &self.entries {
            let hit = entry
                .normalized_triggers
                .iter()
                .position(|trigger| normalized.contains(trigger.as_str()));
            if let Some(idx) = hit {
                let intent = &entry.intent;
                debug!(
                    "Input matched intent '{}' via trigger '{}'.",
                    intent.name, intent.triggers[idx]
                );
                return MatchResult::Matched {
                    intent: &intent.name,
                    trigger: &intent.triggers[idx],
                    response: &intent.response,
                };
            }
        }

        debug!("No intent matched input.");
        MatchResult::NoMatch
    }

    /// Intents in precedence order.
    pub fn intents(&self) -> impl Iterator<Item = &Intent> {
        self.entries.iter().map(|e| &e.intent)
    }

    /// Looks an intent up by name, returning it with its normalized triggers.
    pub fn get(&self, name: &str) -> Option<(&Intent, &[String])> {
        self.entries
            .iter()
            .find(|e| e.intent.name == name)
            .map(|e| (&e.intent, e.normalized_triggers.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed matcher; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(intents: Vec<Intent>) -> IntentMatcher {
        IntentMatcher::new(intents).expect("valid test catalog")
    }

    #[test]
    fn matches_case_and_accent_insensitively() {
        let m = matcher(vec![Intent::new("eleicao", ["Eleição"], "ok")]);
        assert_eq!(m.find("ELEICAO amanhã?").intent(), Some("eleicao"));
        assert_eq!(m.find("a eleiçao").intent(), Some("eleicao"));
    }

    #[test]
    fn earlier_intent_wins_on_overlap() {
        let m = matcher(vec![
            Intent::new("primeiro", ["voto"], "first"),
            Intent::new("segundo", ["peso do voto"], "second"),
        ]);
        // Both intents are present in the input; catalog order decides.
        assert_eq!(m.find("qual o peso do voto?").response(), Some("first"));
    }

    #[test]
    fn trigger_order_within_intent_decides_reported_trigger() {
        let m = matcher(vec![Intent::new("datas", ["quando", "data"], "r")]);
        match m.find("data e quando") {
            MatchResult::Matched { trigger, .. } => assert_eq!(trigger, "quando"),
            MatchResult::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn matches_inside_longer_words() {
        let m = matcher(vec![Intent::new("data_eleicao", ["data"], "r")]);
        assert!(m.find("posso me candidatar?").is_match());
    }

    #[test]
    fn reports_no_match() {
        let m = matcher(vec![Intent::new("regras", ["regra"], "r")]);
        let result = m.find("previsão do tempo");
        assert_eq!(result, MatchResult::NoMatch);
        assert_eq!(result.response(), None);
        assert_eq!(m.find("").intent(), None);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(
            IntentMatcher::new(Vec::new()).unwrap_err(),
            BotError::EmptyCatalog
        );
    }

    #[test]
    fn rejects_intent_without_triggers() {
        let err = IntentMatcher::new(vec![Intent::new("vazio", Vec::<String>::new(), "r")])
            .unwrap_err();
        assert_eq!(
            err,
            BotError::NoTriggers {
                intent: "vazio".into()
            }
        );
    }

    #[test]
    fn rejects_blank_trigger() {
        // U+0301 alone normalizes to the empty string.
        for blank in ["", "   ", "\u{0301}"] {
            let err =
                IntentMatcher::new(vec![Intent::new("x", ["ok", blank], "r")]).unwrap_err();
            assert_eq!(err, BotError::BlankTrigger { intent: "x".into() });
        }
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = IntentMatcher::new(vec![
            Intent::new("regras", ["regra"], "a"),
            Intent::new("regras", ["norma"], "b"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BotError::DuplicateIntent {
                name: "regras".into()
            }
        );
    }

    #[test]
    fn exposes_catalog_in_declaration_order() {
        let m = matcher(vec![
            Intent::new("b", ["bb"], "1"),
            Intent::new("a", ["aa"], "2"),
        ]);
        let names: Vec<&str> = m.intents().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(m.len(), 2);

        let (intent, normalized) = m.get("a").expect("intent 'a' exists");
        assert_eq!(intent.response, "2");
        assert_eq!(normalized, ["aa"]);
        assert!(m.get("c").is_none());
    }
}
