use crate::commands::{Command, CommandContext, CommandResult};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        // Empties the caller's transcript instead of appending to it.
        CommandResult::clear()
    }
}
