//! Implements PrompterPort. Blocking inquire prompts, plus a scripted
//! prompter for tests and non-interactive runs.

use std::collections::VecDeque;
use std::sync::Mutex;

use inquire::Text;
use tracing::warn;

use crate::domain::DomainError;
use crate::ports::PrompterPort;

/// Width used when the terminal size cannot be queried.
const FALLBACK_WIDTH: usize = 80;

/// Interprets one reply token. Only the exact tokens `y`, `yes`, `n`, `no`
/// count; anything else — including other casings — is invalid.
fn parse_reply(reply: &str) -> Option<bool> {
    match reply {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Wraps a paragraph to the terminal width.
fn wrap_to_terminal(text: &str) -> String {
    let width = crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(FALLBACK_WIDTH);
    textwrap::fill(text, width)
}

/// Interactive prompter. Re-asks until the operator gives a valid token.
pub struct InquirePrompter;

impl PrompterPort for InquirePrompter {
    fn ask_yes_no(&self, prompt: &str) -> Result<bool, DomainError> {
        loop {
            let reply = Text::new(prompt)
                .prompt()
                .map_err(|e| DomainError::Prompt(e.to_string()))?;
            if let Some(answer) = parse_reply(&reply) {
                return Ok(answer);
            }
        }
    }

    fn say(&self, text: &str) -> Result<(), DomainError> {
        println!("{}", wrap_to_terminal(text));
        Ok(())
    }
}

/// Prompter fed from a fixed reply list. Applies the same token validation
/// as the interactive one; running out of replies is an error rather than
/// a hang.
pub struct ScriptedPrompter {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedPrompter {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
        }
    }
}

impl PrompterPort for ScriptedPrompter {
    fn ask_yes_no(&self, prompt: &str) -> Result<bool, DomainError> {
        let mut replies = self
            .replies
            .lock()
            .map_err(|_| DomainError::Prompt("scripted replies lock poisoned".into()))?;
        loop {
            let reply = replies.pop_front().ok_or_else(|| {
                DomainError::Prompt(format!("no reply scripted for {prompt:?}"))
            })?;
            match parse_reply(&reply) {
                Some(answer) => return Ok(answer),
                None => warn!(reply = %reply, "skipping invalid scripted reply"),
            }
        }
    }

    fn say(&self, _text: &str) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply_accepts_exact_tokens_only() {
        assert_eq!(parse_reply("y"), Some(true));
        assert_eq!(parse_reply("yes"), Some(true));
        assert_eq!(parse_reply("n"), Some(false));
        assert_eq!(parse_reply("no"), Some(false));
        assert_eq!(parse_reply("Y"), None);
        assert_eq!(parse_reply("NO"), None);
        assert_eq!(parse_reply("yes "), None);
        assert_eq!(parse_reply(""), None);
        assert_eq!(parse_reply("maybe"), None);
    }

    #[test]
    fn test_scripted_prompter_skips_invalid_replies() {
        let prompter = ScriptedPrompter::new(&["nope", "Y", "n"]);
        assert!(!prompter.ask_yes_no("join?").unwrap());
    }

    #[test]
    fn test_scripted_prompter_errors_when_exhausted() {
        let prompter = ScriptedPrompter::new(&[]);
        assert!(matches!(
            prompter.ask_yes_no("join?"),
            Err(DomainError::Prompt(_))
        ));
    }
}
