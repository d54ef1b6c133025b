//! Reason prompts for bulk operations

use std::io::{self, BufRead, Write};

/// Asks the operator why a bulk operation is being applied
///
/// `None` cancels the operation.
pub trait ReasonPrompt {
    /// Ask for a reason covering `count` selected rows
    fn reason(&self, operation: &str, count: usize) -> Option<String>;
}

/// Blocking prompt on stdin; an empty answer cancels
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl ReasonPrompt for StdinPrompt {
    fn reason(&self, operation: &str, count: usize) -> Option<String> {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "Reason for '{operation}' on {count} item(s): ");
        let _ = stderr.flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let reason = line.trim();
                (!reason.is_empty()).then(|| reason.to_string())
            }
        }
    }
}

/// Answers every prompt with the same value, e.g. from `--reason`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedReason(Option<String>);

impl FixedReason {
    /// Always answer `reason`
    pub fn new(reason: impl Into<String>) -> Self {
        Self(Some(reason.into()))
    }

    /// Always cancel
    #[must_use]
    pub const fn cancel() -> Self {
        Self(None)
    }
}

impl ReasonPrompt for FixedReason {
    fn reason(&self, _operation: &str, _count: usize) -> Option<String> {
        self.0.clone()
    }
}
