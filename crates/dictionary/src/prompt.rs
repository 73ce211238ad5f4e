pub(crate) const ANALYSIS_TEMPERATURE: f32 = 0.3;

pub(crate) fn analysis_prompt(word: &str) -> String {
    format!(
        "Analyze the English word: \"{word}\".
You are LexiconMaster, an expert English tutor.

REQUIREMENTS:
1. Explanations must be in SIMPLIFIED CHINESE (简体中文).
2. Tone: Engaging, academic but accessible.
3. Examples and IPA must be in ENGLISH.
4. For Literature examples, you MUST provide the specific Author and Book Title.
5. Follow the strict JSON schema."
    )
}

pub(crate) fn evaluation_prompt(target_word: &str, user_answer: &str) -> String {
    format!(
        "The target word is \"{target_word}\". The user defined it as: \"{user_answer}\".
Evaluate if the user understands the core meaning.
Provide feedback in SIMPLIFIED CHINESE (简体中文).
Crucial: Use the word's etymology (roots) to explain why they are right or wrong."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_prompt_names_word_and_language_rules() {
        let prompt = analysis_prompt("Ephemeral");
        assert!(prompt.contains("\"Ephemeral\""));
        assert!(prompt.contains("SIMPLIFIED CHINESE"));
        assert!(prompt.contains("Author and Book Title"));
    }

    #[test]
    fn evaluation_prompt_quotes_both_sides() {
        let prompt = evaluation_prompt("ephemeral", "short-lived");
        assert!(prompt.contains("\"ephemeral\""));
        assert!(prompt.contains("\"short-lived\""));
        assert!(prompt.contains("etymology"));
    }
}
