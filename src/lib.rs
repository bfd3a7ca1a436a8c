//! webterm - an in-memory virtual filesystem with a POSIX-like command
//! interpreter.
//!
//! Two strictly layered components: [`fs::VirtualFileSystem`] owns the node
//! tree and the working path, and [`interpreter::CommandInterpreter`] parses
//! command lines and dispatches them against it. [`terminal::Terminal`] ties
//! one of each into a session and is the entry point for front-ends.

pub mod commands;
pub mod fs;
pub mod interpreter;
pub mod terminal;

pub use fs::{FsError, Node, VirtualFileSystem};
pub use interpreter::CommandInterpreter;
pub use terminal::{SubmitOutcome, Terminal};
