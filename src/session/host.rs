//! Host seam: prompts, messages and the working directory.

use std::collections::VecDeque;
use std::path::PathBuf;

/// What the session needs from the game client.
pub trait Host {
    /// Ask the user to pick one of `choices`. `None` if dismissed.
    fn prompt_choice(&mut self, message: &str, choices: &[String]) -> Option<usize>;

    /// Ask for a line of text, pre-filled with `default`. `None` if cancelled.
    fn prompt_string(&mut self, message: &str, default: &str) -> Option<String>;

    /// Message shown to everyone at the table.
    fn notify(&mut self, message: &str);

    /// Message shown to the local user only.
    fn whisper(&mut self, message: &str);

    /// Default location of `file_name` in the client's working directory.
    fn working_path(&self, file_name: &str) -> PathBuf;
}

/// Host that answers prompts from scripted queues and records messages.
///
/// Prompts with nothing queued accept their default: the first choice, or
/// the pre-filled text.
#[derive(Clone, Debug, Default)]
pub struct ScriptedHost {
    working_dir: PathBuf,
    choices: VecDeque<Option<usize>>,
    answers: VecDeque<Option<String>>,
    pub notices: Vec<String>,
    pub whispers: Vec<String>,
}

impl ScriptedHost {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            ..Self::default()
        }
    }

    /// Queue the answer to the next choice prompt.
    #[must_use]
    pub fn with_choice(mut self, choice: Option<usize>) -> Self {
        self.choices.push_back(choice);
        self
    }

    /// Queue the answer to the next text prompt.
    #[must_use]
    pub fn with_answer(mut self, answer: Option<&str>) -> Self {
        self.push_answer(answer);
        self
    }

    pub fn push_answer(&mut self, answer: Option<&str>) {
        self.answers.push_back(answer.map(str::to_string));
    }
}

impl Host for ScriptedHost {
    fn prompt_choice(&mut self, _message: &str, _choices: &[String]) -> Option<usize> {
        self.choices.pop_front().unwrap_or(Some(0))
    }

    fn prompt_string(&mut self, _message: &str, default: &str) -> Option<String> {
        self.answers
            .pop_front()
            .unwrap_or_else(|| Some(default.to_string()))
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn whisper(&mut self, message: &str) {
        self.whispers.push(message.to_string());
    }

    fn working_path(&self, file_name: &str) -> PathBuf {
        self.working_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_then_defaults() {
        let mut host = ScriptedHost::new("/work")
            .with_choice(Some(1))
            .with_answer(None);

        assert_eq!(host.prompt_choice("?", &[]), Some(1));
        assert_eq!(host.prompt_choice("?", &[]), Some(0));
        assert_eq!(host.prompt_string("?", "x"), None);
        assert_eq!(host.prompt_string("?", "x"), Some("x".to_string()));
        assert_eq!(host.working_path("a.json"), PathBuf::from("/work/a.json"));
    }
}
