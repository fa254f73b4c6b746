//! Scrabble word scorer.

/// Score above which the word earns a compliment.
const NICE_WORD_THRESHOLD: u32 = 15;

/// Standard Scrabble tile value for a lowercase ASCII letter.
fn letter_value(letter: char) -> u32 {
    match letter {
        'a' | 'e' | 'i' | 'l' | 'n' | 'o' | 'r' | 's' | 't' | 'u' => 1,
        'd' | 'g' => 2,
        'b' | 'c' | 'm' | 'p' => 3,
        'f' | 'h' | 'v' | 'w' | 'y' => 4,
        'k' => 5,
        'j' | 'x' => 8,
        'q' | 'z' => 10,
        _ => 0,
    }
}

/// Scores a word: lowercased, everything outside `a-z` ignored.
#[must_use]
pub fn score(word: &str) -> u32 {
    word.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .map(letter_value)
        .sum()
}

#[must_use]
pub fn banner() -> Vec<String> {
    vec![
        ">>> Scrabble Score Calculator".to_owned(),
        "Enter a word to calculate its score.".to_owned(),
    ]
}

#[must_use]
pub fn step(word: &str) -> Vec<String> {
    let points = score(word);
    let mut lines = vec![
        format!("Word: \"{word}\""),
        format!("Score: {points} points"),
    ];
    if points > NICE_WORD_THRESHOLD {
        lines.push("Nice word!".to_owned());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_scores_twenty_two() {
        assert_eq!(score("quiz"), 22);
    }

    #[test]
    fn test_score_ignores_case_and_non_letters() {
        assert_eq!(score("Hello, World!"), score("helloworld"));
        assert_eq!(score("123 !?"), 0);
        assert_eq!(score("café"), score("caf"));
    }

    #[test]
    fn test_full_alphabet_scores_eighty_seven() {
        assert_eq!(score("abcdefghijklmnopqrstuvwxyz"), 87);
    }

    #[test]
    fn test_high_score_gets_compliment() {
        assert_eq!(
            step("quiz"),
            vec!["Word: \"quiz\"", "Score: 22 points", "Nice word!"]
        );
    }

    #[test]
    fn test_score_of_exactly_fifteen_gets_no_compliment() {
        // j(8) + a(1) + w(4) + s(1) + a(1) = 15
        assert_eq!(score("jawsa"), 15);
        assert_eq!(step("jawsa").len(), 2);
    }
}
