// src/commands/types.rs
use rand::RngCore;

use crate::fs::VirtualFileSystem;

/// Result of running one command: the text to append to the transcript
/// (empty means no line is emitted) and whether the transcript should be
/// cleared instead.
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    pub output: String,
    pub clear_screen: bool,
}

impl CommandResult {
    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            clear_screen: false,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn clear() -> Self {
        Self {
            output: String::new(),
            clear_screen: true,
        }
    }
}

/// Everything a handler gets to work with: the positional arguments after
/// the verb, mutable access to the session filesystem, the command history
/// recorded so far (most-recent-last, including the running command), and a
/// randomness source for jittered output.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub fs: &'a mut VirtualFileSystem,
    pub history: &'a [String],
    pub rng: &'a mut dyn RngCore,
}

/// A single command verb. Handlers report every failure as returned text;
/// on a reported error the tree is left unchanged.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
