// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        default_registry()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::cp::CpCommand;
use super::curl::CurlCommand;
use super::date_cmd::DateCommand;
use super::du_cmd::DuCommand;
use super::echo::EchoCommand;
use super::find::FindCommand;
use super::grep::GrepCommand;
use super::head::HeadCommand;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistoryCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::mv::MvCommand;
use super::ps_cmd::PsCommand;
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::rmdir::RmdirCommand;
use super::tail::TailCommand;
use super::touch::TouchCommand;
use super::tree_cmd::TreeCommand;
use super::uptime_cmd::UptimeCommand;
use super::wc::WcCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register the full command set.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(RmdirCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(MvCommand));
    registry.register(Box::new(CpCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(HeadCommand));
    registry.register(Box::new(TailCommand));
    registry.register(Box::new(GrepCommand));
    registry.register(Box::new(FindCommand));
    registry.register(Box::new(WcCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(DuCommand));
    registry.register(Box::new(CurlCommand));
    registry.register(Box::new(DateCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(PsCommand));
    registry.register(Box::new(UptimeCommand));
    registry.register(Box::new(HistoryCommand));
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(ClearCommand));
}

/// Create a registry holding every command.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_all(&mut registry);
    registry
}
