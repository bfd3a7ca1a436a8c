use crate::commands::{Command, CommandContext, CommandResult};

const PROCESS_TABLE: &str = "  PID TTY          TIME CMD
    1 pts/0    00:00:00 web-cli
    2 pts/0    00:00:00 terminal
   42 pts/0    00:00:00 bash";

pub struct PsCommand;

impl Command for PsCommand {
    fn name(&self) -> &'static str {
        "ps"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::text(PROCESS_TABLE)
    }
}
