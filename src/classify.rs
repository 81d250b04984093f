//! Keyword classification of recognized transcripts.
//!
//! Both passes are pure functions over the lowercased transcript. Matching is
//! plain substring search, not word-boundary-aware, so a short token like
//! "нет" also fires inside longer words. List order is precedence on
//! ambiguous input.

/// Answering-machine phrases, checked before the non-emptiness test
const ANSWERING_MACHINE_PHRASES: [&str; 4] = [
    "автоответчик",
    "оставьте сообщение",
    "после сигнала",
    "после гудка",
];

/// Positive-intent phrases, checked strictly before the negative list
const POSITIVE_PHRASES: [&str; 6] = [
    "слушаю",
    "могу",
    "говорите",
    "удобно",
    "хорошо",
    "давайте",
];

const NEGATIVE_PHRASES: [&str; 5] = ["занят", "нет", "до свидания", "не могу", "неудобно"];

/// Which classification pass to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Stage 1: answering machine, human, or empty recording
    Presence,
    /// Stage 2: positive or negative reply
    Sentiment,
}

impl Stage {
    /// Dispatch to the classifier this stage selects
    pub fn classify(&self, transcript: &str) -> Classification {
        match self {
            Stage::Presence => classify_presence(transcript),
            Stage::Sentiment => classify_sentiment(transcript),
        }
    }
}

/// Categorical outcome of a classification pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    AnsweringMachine,
    Human,
    EmptyRecording,
    Positive,
    Negative,
    Unrecognized,
}

impl Classification {
    /// Label written to the result log and the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::AnsweringMachine => "Автоответчик",
            Classification::Human => "Человек",
            Classification::EmptyRecording => "Пустая запись",
            Classification::Positive => "Положительно",
            Classification::Negative => "Отрицательно",
            Classification::Unrecognized => "Не распознано",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stage 1: did a machine, a person, or nobody answer
///
/// An answering-machine phrase match takes precedence over non-emptiness.
pub fn classify_presence(transcript: &str) -> Classification {
    let text = transcript.to_lowercase();
    if ANSWERING_MACHINE_PHRASES.iter().any(|p| text.contains(p)) {
        return Classification::AnsweringMachine;
    }
    if !text.is_empty() {
        return Classification::Human;
    }
    Classification::EmptyRecording
}

/// Stage 2: did the called party agree to talk
///
/// The positive list is checked first, so a transcript matching both lists
/// comes out positive.
pub fn classify_sentiment(transcript: &str) -> Classification {
    let text = transcript.to_lowercase();
    if POSITIVE_PHRASES.iter().any(|p| text.contains(p)) {
        return Classification::Positive;
    }
    if NEGATIVE_PHRASES.iter().any(|p| text.contains(p)) {
        return Classification::Negative;
    }
    Classification::Unrecognized
}
