//! Terminal Session
//!
//! Pairs one [`VirtualFileSystem`] with one [`CommandInterpreter`] and seeds
//! the starting tree. This is the whole surface a front-end needs: feed it
//! command lines, append the returned lines to its transcript, and render
//! the prompt from [`Terminal::prompt_path`]. Independent sessions are
//! independent `Terminal` values; nothing is shared.

use rand::RngCore;
use serde::Serialize;

use crate::commands::CommandResult;
use crate::fs::VirtualFileSystem;
use crate::interpreter::CommandInterpreter;

const README: &str = "Welcome to Web CLI Terminal!

This is a fully functional command-line interface backed by an in-memory
virtual filesystem.

Available commands include:
- File operations: ls, cd, mkdir, touch, rm, mv, cp
- File viewing: cat, head, tail, grep
- System info: pwd, date, whoami, ps, uptime
- Utilities: find, wc, tree, du, curl
- Type 'help' for a complete list

Try these examples:
  cat readme.txt
  echo \"Hello World\" > hello.txt
  grep \"command\" readme.txt
  tree /
  find . -name \"txt\"

Have fun exploring!";

/// What one submitted line produced: transcript lines to append, or an
/// instruction to clear the transcript instead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub lines: Vec<String>,
    pub clear_screen: bool,
}

/// One interactive session: filesystem, interpreter and history.
pub struct Terminal {
    fs: VirtualFileSystem,
    interpreter: CommandInterpreter,
}

impl Terminal {
    pub fn new() -> Self {
        Self::build(CommandInterpreter::new())
    }

    /// Session with an injected randomness source for deterministic output.
    pub fn with_rng(rng: Box<dyn RngCore + Send>) -> Self {
        Self::build(CommandInterpreter::with_rng(rng))
    }

    fn build(interpreter: CommandInterpreter) -> Self {
        let mut fs = VirtualFileSystem::new();
        seed_files(&mut fs);
        Self { fs, interpreter }
    }

    /// Run one command line and return what the transcript should do with
    /// it. An empty `lines` means nothing gets appended.
    pub fn submit(&mut self, line: &str) -> SubmitOutcome {
        let CommandResult {
            output,
            clear_screen,
        } = self.interpreter.execute(&mut self.fs, line);

        let lines = if clear_screen || output.is_empty() {
            Vec::new()
        } else {
            output.split('\n').map(String::from).collect()
        };
        SubmitOutcome {
            lines,
            clear_screen,
        }
    }

    /// Current working directory, for rendering the `<cwd>$ ` prompt.
    pub fn prompt_path(&self) -> &str {
        self.fs.current_path()
    }

    /// Previously entered command lines, most-recent-last. The caller owns
    /// any recall-cursor logic.
    pub fn history_entries(&self) -> &[String] {
        self.interpreter.history()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_files(fs: &mut VirtualFileSystem) {
    let sample = serde_json::json!({
        "name": "Web CLI Demo",
        "version": "1.0.0",
        "features": [
            "Virtual File System",
            "Command History",
            "Path Resolution",
            "File Operations"
        ]
    });
    let sample_text = serde_json::to_string_pretty(&sample).unwrap_or_default();

    for (path, content) in [
        ("/home/user/readme.txt", README),
        ("/home/user/sample.json", sample_text.as_str()),
    ] {
        // Both parents exist in a fresh tree.
        let seeded = fs.write_file(path, content);
        debug_assert!(seeded.is_ok(), "seed path missing: {}", path);
    }
}
