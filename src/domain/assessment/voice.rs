//! Voice sample and transcript heuristics.
//!
//! The core never sees audio. It receives a transcript (from a speech
//! recognizer or typed by hand) and derives word counts, vocabulary richness
//! and hesitation rate from it. Derived values are recomputed on every
//! change and on deserialization, so they can never drift from the text.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Words counted as hesitation markers.
pub static FILLER_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["um", "umm", "uh", "er", "ah", "like"].into_iter().collect());

/// Minimum words a transcript needs before the voice step can be left.
pub const MIN_VOICE_WORDS: u32 = 15;

/// Splits a transcript into lowercase word tokens.
///
/// Everything that is not an ASCII letter, whitespace or an apostrophe acts
/// as a separator.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_ascii_lowercase() || c == '\'' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized.split_whitespace().map(str::to_string).collect()
}

/// Numbers derived from a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptAnalysis {
    pub total_words: u32,
    pub unique_words: u32,
    /// `unique_words / total_words`, 0 for an empty transcript.
    pub vocabulary_richness: f64,
    pub filler_count: u32,
    /// `filler_count / total_words`, 0 for an empty transcript.
    pub hesitation_rate: f64,
}

impl TranscriptAnalysis {
    pub fn of(transcript: &str) -> Self {
        let words = tokenize(transcript);
        let total_words = words.len() as u32;
        let unique_words = words.iter().collect::<HashSet<_>>().len() as u32;
        let filler_count = words
            .iter()
            .filter(|w| FILLER_WORDS.contains(w.as_str()))
            .count() as u32;

        let ratio = |n: u32| {
            if total_words > 0 {
                f64::from(n) / f64::from(total_words)
            } else {
                0.0
            }
        };

        Self {
            total_words,
            unique_words,
            vocabulary_richness: ratio(unique_words),
            filler_count,
            hesitation_rate: ratio(filler_count),
        }
    }
}

/// Stored shape of a voice sample. Only the transcript is trusted on load.
#[derive(Deserialize)]
struct StoredVoiceSample {
    #[serde(default)]
    transcript: String,
}

impl From<StoredVoiceSample> for VoiceSample {
    fn from(stored: StoredVoiceSample) -> Self {
        VoiceSample::from_transcript(stored.transcript)
    }
}

/// A transcript together with the metrics derived from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "StoredVoiceSample")]
pub struct VoiceSample {
    transcript: String,
    #[serde(flatten)]
    analysis: TranscriptAnalysis,
}

impl VoiceSample {
    pub fn from_transcript(transcript: impl Into<String>) -> Self {
        let transcript = transcript.into();
        let analysis = TranscriptAnalysis::of(&transcript);
        Self {
            transcript,
            analysis,
        }
    }

    /// Replaces the transcript and recomputes every derived value.
    pub fn replace(&mut self, transcript: impl Into<String>) {
        *self = Self::from_transcript(transcript);
    }

    /// Appends a recognizer chunk (`"{current} {chunk}"`, trimmed).
    pub fn append(&mut self, chunk: &str) {
        let joined = format!("{} {}", self.transcript, chunk);
        self.replace(joined.trim());
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn analysis(&self) -> &TranscriptAnalysis {
        &self.analysis
    }

    pub fn total_words(&self) -> u32 {
        self.analysis.total_words
    }

    pub fn unique_words(&self) -> u32 {
        self.analysis.unique_words
    }

    pub fn vocabulary_richness(&self) -> f64 {
        self.analysis.vocabulary_richness
    }

    pub fn filler_count(&self) -> u32 {
        self.analysis.filler_count
    }

    pub fn hesitation_rate(&self) -> f64 {
        self.analysis.hesitation_rate
    }

    /// Returns true once the transcript is long enough to score.
    pub fn has_enough_words(&self) -> bool {
        self.analysis.total_words >= MIN_VOICE_WORDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_transcript_is_all_zero() {
        let v = VoiceSample::from_transcript("");
        assert_eq!(v.total_words(), 0);
        assert_eq!(v.unique_words(), 0);
        assert_eq!(v.vocabulary_richness(), 0.0);
        assert_eq!(v.hesitation_rate(), 0.0);
    }

    #[test]
    fn fillers_are_counted_case_insensitively_after_stripping_punctuation() {
        let v = VoiceSample::from_transcript("um I went to the store um");
        assert_eq!(v.filler_count(), 2);
        assert_eq!(v.total_words(), 7);
        assert_eq!(v.unique_words(), 6);
        assert!(approx(v.hesitation_rate(), 2.0 / 7.0));

        let shouted = VoiceSample::from_transcript("UM, I... Uh! went home.");
        assert_eq!(shouted.filler_count(), 2);
        assert_eq!(shouted.total_words(), 5);
    }

    #[test]
    fn tokenize_keeps_apostrophes_and_splits_on_digits() {
        assert_eq!(tokenize("Don't stop"), vec!["don't", "stop"]);
        assert_eq!(tokenize("room42b"), vec!["room", "b"]);
        assert_eq!(tokenize("café"), vec!["caf"]);
    }

    #[test]
    fn richness_is_unique_over_total() {
        let v = VoiceSample::from_transcript("the cat and the dog");
        assert_eq!(v.total_words(), 5);
        assert_eq!(v.unique_words(), 4);
        assert!(approx(v.vocabulary_richness(), 0.8));
    }

    #[test]
    fn replace_recomputes_everything() {
        let mut v = VoiceSample::from_transcript("um um um");
        v.replace("a b c");
        assert_eq!(v.filler_count(), 0);
        assert!(approx(v.vocabulary_richness(), 1.0));
    }

    #[test]
    fn append_joins_with_single_space() {
        let mut v = VoiceSample::default();
        v.append("I woke up");
        v.append("and made coffee");
        assert_eq!(v.transcript(), "I woke up and made coffee");
        assert_eq!(v.total_words(), 6);
    }

    #[test]
    fn has_enough_words_at_fifteen() {
        let fourteen = vec!["word"; 14].join(" ");
        let fifteen = vec!["word"; 15].join(" ");
        assert!(!VoiceSample::from_transcript(fourteen).has_enough_words());
        assert!(VoiceSample::from_transcript(fifteen).has_enough_words());
    }

    #[test]
    fn deserialization_ignores_stored_metrics() {
        let json = r#"{"transcript":"one two","totalWords":99,"hesitationRate":0.9}"#;
        let v: VoiceSample = serde_json::from_str(json).unwrap();
        assert_eq!(v.total_words(), 2);
        assert_eq!(v.hesitation_rate(), 0.0);
    }

    #[test]
    fn serializes_transcript_with_metrics() {
        let v = VoiceSample::from_transcript("uh hello");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["transcript"], "uh hello");
        assert_eq!(json["totalWords"], 2);
        assert_eq!(json["fillerCount"], 1);
    }
}
