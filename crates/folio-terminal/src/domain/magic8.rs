//! Magic 8-ball.

use folio_core::rng::DeterministicRng;

/// The nine possible answers.
pub const ANSWERS: [&str; 9] = [
    "Yes - definitely.",
    "It is decidedly so.",
    "Without a doubt.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "My sources say no.",
    "Outlook not so good.",
    "Very doubtful.",
];

#[must_use]
pub fn banner() -> Vec<String> {
    vec![
        ">>> Magic 8-Ball Loaded".to_owned(),
        "Ask a question to seek your fortune...".to_owned(),
    ]
}

/// Picks an answer uniformly at random; the question is only echoed.
#[allow(clippy::cast_possible_truncation)]
pub fn step(question: &str, rng: &mut dyn DeterministicRng) -> Vec<String> {
    let last = (ANSWERS.len() - 1) as u32;
    let index = rng.next_u32_range(0, last) as usize % ANSWERS.len();
    vec![
        format!("Question: {question}"),
        format!("Magic 8-Ball says: \"{}\"", ANSWERS[index]),
    ]
}
