//! Verification of answers in conjugation drills.

use core::fmt;

use serde::Serialize;

/// The outcome of checking an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub is_correct: bool,
    /// The expected answer in hiragana.
    pub expected: String,
    pub feedback: String,
}

impl Verdict {
    /// Compare an answer against the expected hiragana.
    ///
    /// Surrounding whitespace is ignored and the comparison is
    /// case-insensitive, otherwise the answer must match exactly.
    pub(crate) fn new(input: &str, expected: String) -> Self {
        let is_correct = normalize(input) == normalize(&expected);

        let feedback = if is_correct {
            String::from("Correct!")
        } else {
            format!("Incorrect. The correct answer is {expected}.")
        };

        Self {
            is_correct,
            expected,
            feedback,
        }
    }
}

impl fmt::Display for Verdict {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.feedback.fmt(f)
    }
}

fn normalize(string: &str) -> String {
    string.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::Verdict;

    #[test]
    fn test_verdict() {
        let verdict = Verdict::new(" のみます ", String::from("のみます"));
        assert!(verdict.is_correct);
        assert_eq!(verdict.feedback, "Correct!");

        let verdict = Verdict::new("のむます", String::from("のみます"));
        assert!(!verdict.is_correct);
        assert_eq!(verdict.expected, "のみます");
        assert_eq!(
            verdict.feedback,
            "Incorrect. The correct answer is のみます."
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert!(Verdict::new("NOMIMASU", String::from("nomimasu")).is_correct);
        assert!(!Verdict::new("のみ ます", String::from("のみます")).is_correct);
    }
}
