//! Best-effort extraction of structured fields from free-text model replies.
//!
//! The model is asked to answer with labeled segments
//! (`Translation: ... | Synonyms: ... | Antonyms: ...`); this module locates
//! them with regexes and degrades to placeholder/empty values when a label is
//! absent. Extraction never fails. Matching over generative output is
//! inherently brittle, so the strategy is kept behind this module's narrow
//! interface and callers only ever see an [`AnalysisResult`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::{AnalysisResult, DictionaryResponse, TRANSLATION_NOT_FOUND};

pub const MAX_SYNONYMS: usize = 15;
pub const MAX_ANTONYMS: usize = 10;

// Translation and synonym segments end at a `|` delimiter or a line break;
// the antonym segment is last and runs to the end of the text.
static TRANSLATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Translation:\s*([^|\n]+)").expect("static regex compile"));
static SYNONYMS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Synonyms:\s*([^|\n]+)").expect("static regex compile"));
static ANTONYMS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Antonyms:\s*(.+)").expect("static regex compile"));

/// Parse a combined reply into translation plus both word lists.
#[must_use]
pub fn extract_analysis(text: &str) -> AnalysisResult {
    let lists = extract_word_lists(text);
    AnalysisResult {
        translation: extract_translation(text),
        synonyms: lists.synonyms,
        antonyms: lists.antonyms,
    }
}

/// Locate the `Translation:` segment; absent label degrades to the
/// placeholder rather than an error.
#[must_use]
pub fn extract_translation(text: &str) -> String {
    TRANSLATION_RE
        .captures(text)
        .map(|cap| cap[1].trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| TRANSLATION_NOT_FOUND.to_string())
}

/// Locate the `Synonyms:` and `Antonyms:` segments. A missing label yields
/// an empty list, not an error.
#[must_use]
pub fn extract_word_lists(text: &str) -> DictionaryResponse {
    DictionaryResponse {
        synonyms: captured_words(&SYNONYMS_RE, text, MAX_SYNONYMS),
        antonyms: captured_words(&ANTONYMS_RE, text, MAX_ANTONYMS),
    }
}

/// Translation for the translate-only prompt, which asks for the bare
/// translation with no label: the whole reply, trimmed, is the answer.
#[must_use]
pub fn whole_text_translation(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        TRANSLATION_NOT_FOUND.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Comma-split the first capture group, trim each token, drop empties, keep
/// the first `max` in original order. No dedup, no case folding; extraction
/// trusts the model's formatting.
fn captured_words(re: &Regex, text: &str, max: usize) -> Vec<String> {
    re.captures(text)
        .map(|cap| {
            cap[1]
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .take(max)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
