//! Command Interpreter
//!
//! Turns a raw command line into an operation against the filesystem: trim,
//! split on whitespace, first token selects the handler, the rest are
//! positional arguments. No quoting, no pipes; the only shell operator is
//! `echo`'s single-target `>` redirection, which the handler itself parses.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::commands::{default_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::VirtualFileSystem;

pub struct CommandInterpreter {
    registry: CommandRegistry,
    history: Vec<String>,
    rng: Box<dyn RngCore + Send>,
}

impl CommandInterpreter {
    pub fn new() -> Self {
        Self::with_rng(Box::new(StdRng::from_entropy()))
    }

    /// Build an interpreter with an injected randomness source, so tests
    /// can pin jittered output.
    pub fn with_rng(rng: Box<dyn RngCore + Send>) -> Self {
        Self {
            registry: default_registry(),
            history: Vec::new(),
            rng,
        }
    }

    /// Execute one command line against `fs`. Blank lines do nothing and
    /// are not recorded; everything else lands in history first — including
    /// lines that turn out not to name a known verb — so `history` lists
    /// itself and failed commands alike.
    pub fn execute(&mut self, fs: &mut VirtualFileSystem, line: &str) -> CommandResult {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandResult::empty();
        }
        self.history.push(trimmed.to_string());

        let mut tokens = trimmed.split_whitespace();
        let Some(verb) = tokens.next() else {
            return CommandResult::empty();
        };
        let args: Vec<String> = tokens.map(String::from).collect();

        match self.registry.get(verb) {
            Some(cmd) => cmd.execute(CommandContext {
                args,
                fs,
                history: &self.history,
                rng: self.rng.as_mut(),
            }),
            None => CommandResult::text(format!("Command not recognized: {}", verb)),
        }
    }

    /// Previously entered command lines, most-recent-last.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
