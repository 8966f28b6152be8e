//! Findings produced by the checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Check;

/// What a check found, one variant per check kind.
///
/// Each variant carries only what its check knows. Distances count back from
/// the word right before the triggering one (0 = immediately preceding).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "kebab-case")]
pub enum FindingKind {
    /// Another "-mente" adverb too close to this one.
    Mente {
        /// The triggering adverb.
        word: String,
        /// The earlier adverb.
        old_word: String,
        /// Words between them.
        distance: usize,
    },
    /// The same word used again too soon.
    Repetition {
        /// The repeated word.
        word: String,
        /// Words back to the earlier occurrence.
        distance: usize,
    },
    /// One word contains the other and they are close together.
    Contained {
        /// The triggering word.
        word: String,
        /// The earlier word sharing the substring.
        old_word: String,
        /// Words between them.
        distance: usize,
    },
    /// Filler vocabulary.
    Overused {
        /// The word.
        word: String,
        /// The pattern it matched.
        pattern: String,
    },
    /// A pedantic dialogue verb.
    PedanticSayword {
        /// The verb.
        word: String,
    },
    /// A usually misused dialogue verb.
    MisusedSayword {
        /// The verb.
        word: String,
    },
    /// A conjugation of a usually misused verb.
    MisusedVerb {
        /// The conjugated word.
        word: String,
        /// The root it was matched by.
        root: String,
    },
    /// A usually misused multi-word expression.
    MisusedExpression {
        /// The last word of the expression.
        word: String,
        /// The matched expression patterns in reading order.
        expression: Vec<String>,
    },
}

impl FindingKind {
    /// The check that produces this kind of finding.
    pub const fn check(&self) -> Check {
        match self {
            Self::Mente { .. } => Check::Mente,
            Self::Repetition { .. } => Check::Repetition,
            Self::Contained { .. } => Check::Contained,
            Self::Overused { .. } => Check::Overused,
            Self::PedanticSayword { .. } => Check::PedanticSayword,
            Self::MisusedSayword { .. } => Check::MisusedSayword,
            Self::MisusedVerb { .. } => Check::MisusedVerb,
            Self::MisusedExpression { .. } => Check::MisusedExpression,
        }
    }

    /// The word that triggered the finding.
    pub fn word(&self) -> &str {
        match self {
            Self::Mente { word, .. }
            | Self::Repetition { word, .. }
            | Self::Contained { word, .. }
            | Self::Overused { word, .. }
            | Self::PedanticSayword { word }
            | Self::MisusedSayword { word }
            | Self::MisusedVerb { word, .. }
            | Self::MisusedExpression { word, .. } => word,
        }
    }

    /// Human-readable description, in Spanish.
    pub fn message(&self) -> String {
        match self {
            Self::Mente {
                word,
                old_word,
                distance,
            } => format!(
                "adverbio en -mente \"{word}\" repetido {distance} palabras atrás: {old_word}"
            ),
            Self::Repetition { word, distance } => {
                format!("palabra \"{word}\" repetida {distance} palabras atrás")
            }
            Self::Contained {
                word,
                old_word,
                distance,
            } => format!(
                "palabra \"{word}\" contenida en otra {distance} palabras atrás: {old_word}"
            ),
            Self::Overused { word, .. } => format!("palabra o verbo comodín: {word}"),
            Self::PedanticSayword { word } => {
                format!("verbo generalmente pedante en diálogos: {word}")
            }
            Self::MisusedSayword { word } => {
                format!("verbo generalmente mal usado en diálogos: {word}")
            }
            Self::MisusedVerb { word, .. } => format!("verbo generalmente mal usado: {word}"),
            Self::MisusedExpression { expression, .. } => {
                format!("expresión generalmente mal usada: {}", expression.join(" "))
            }
        }
    }
}

/// A single reported issue: what was found plus where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The check-specific details.
    #[serde(flatten)]
    pub kind: FindingKind,
    /// The last few tokens up to and including the triggering word.
    pub context: String,
}

impl Finding {
    /// Create a finding.
    pub fn new(kind: FindingKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }

    /// The check that produced this finding.
    pub const fn check(&self) -> Check {
        self.kind.check()
    }

    /// Stable code of the producing check.
    pub const fn code(&self) -> &'static str {
        self.kind.check().code()
    }

    /// The word that triggered the finding.
    pub fn word(&self) -> &str {
        self.kind.word()
    }

    /// Human-readable description, without code tag or context.
    pub fn message(&self) -> String {
        self.kind.message()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (… {})", self.code(), self.message(), self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_code_message_and_context() {
        let finding = Finding::new(
            FindingKind::Mente {
                word: "raramente".into(),
                old_word: "fácilmente".into(),
                distance: 3,
            },
            "fácilmente b b b raramente",
        );
        let line = finding.to_string();
        assert!(line.starts_with("[mente] "));
        assert!(line.contains("\"raramente\""));
        assert!(line.contains("3 palabras atrás: fácilmente"));
        assert!(line.ends_with("(… fácilmente b b b raramente)"));
    }

    #[test]
    fn expression_rendered_in_reading_order() {
        let kind = FindingKind::MisusedExpression {
            word: "cabeza".into(),
            expression: vec!["sacud*".into(), "la".into(), "cabeza".into()],
        };
        assert!(kind.message().ends_with("sacud* la cabeza"));
        assert_eq!(kind.word(), "cabeza");
        assert_eq!(kind.check(), Check::MisusedExpression);
    }

    #[test]
    fn serializes_with_check_tag() {
        let finding = Finding::new(
            FindingKind::Repetition {
                word: "casa".into(),
                distance: 4,
            },
            "casa",
        );
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["check"], "repetition");
        assert_eq!(json["word"], "casa");
        assert_eq!(json["distance"], 4);
        assert_eq!(json["context"], "casa");
    }
}
