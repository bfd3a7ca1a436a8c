// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod clear_cmd;
pub mod cp;
pub mod curl;
pub mod date_cmd;
pub mod du_cmd;
pub mod echo;
pub mod find;
pub mod grep;
pub mod head;
pub mod help_cmd;
pub mod history_cmd;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod ps_cmd;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod rmdir;
pub mod tail;
pub mod touch;
pub mod tree_cmd;
pub mod types;
pub mod uptime_cmd;
pub mod wc;
pub mod whoami_cmd;

pub use registry::{default_registry, register_all, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
