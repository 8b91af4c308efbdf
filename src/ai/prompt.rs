//! Prompt builders for the three request kinds.
//!
//! Prompts spell out the expected labels and delimiters so the extractor's
//! pattern matching has something to latch on to. Low temperature on the
//! dispatcher side keeps the replies terse enough for this to mostly work.

/// Translation-only prompt. Asks for the bare translation with no label, so
/// callers take the whole trimmed reply rather than matching a label.
#[must_use]
pub fn translate_prompt(word: &str) -> String {
    format!("Translate the word \"{word}\" to Bengali. Give only the Bengali translation, nothing else.")
}

/// Synonym/antonym prompt with the `Synonyms: ... | Antonyms: ...` layout.
#[must_use]
pub fn dictionary_prompt(word: &str) -> String {
    format!(
        "For the word \"{word}\", provide exactly 15 synonyms and 10 antonyms. \
         Use only common, familiar English words that are logically related. \
         Format your response as: \
         Synonyms: word1, word2, word3, word4, word5, word6, word7, word8, word9, word10, word11, word12, word13, word14, word15 \
         | Antonyms: word1, word2, word3, word4, word5, word6, word7, word8, word9, word10"
    )
}

/// Combined prompt producing all three labeled segments in one round trip.
/// Preferred over separate translate + dictionary calls: half the external
/// call cost, and one word sense across all three fields.
#[must_use]
pub fn analyze_prompt(word: &str) -> String {
    format!(
        "For the word \"{word}\":\n\
         1. Translate to Bengali (give only Bengali translation)\n\
         2. Provide 15 synonyms and 10 antonyms using common English words\n\
         \n\
         Format: Translation: [bengali_word] \
         | Synonyms: word1, word2, word3, word4, word5, word6, word7, word8, word9, word10, word11, word12, word13, word14, word15 \
         | Antonyms: word1, word2, word3, word4, word5, word6, word7, word8, word9, word10"
    )
}
