/// Longest entry accepted, sign included. Keeps every entry within `i32`.
const MAX_LEN: usize = 6;

/// Text the player types as a challenge answer.
///
/// Only ASCII digits and a single leading `-` are accepted; anything else is
/// ignored by [`push`](Self::push).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerInput {
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid answer {text:?}")]
pub struct ParseAnswerError {
    text: String,
}

impl AnswerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Appends `ch`, returning whether it was accepted.
    pub fn push(&mut self, ch: char) -> bool {
        let accepted = self.text.len() < MAX_LEN
            && (ch.is_ascii_digit() || (ch == '-' && self.text.is_empty()));
        if accepted {
            self.text.push(ch);
        }
        accepted
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Reads the entry as an answer; an entry without digits is no answer.
    pub fn value(&self) -> Result<Option<i32>, ParseAnswerError> {
        if !self.text.bytes().any(|b| b.is_ascii_digit()) {
            return Ok(None);
        }
        self.text
            .parse()
            .map(Some)
            .map_err(|_| ParseAnswerError {
                text: self.text.clone(),
            })
    }
}
