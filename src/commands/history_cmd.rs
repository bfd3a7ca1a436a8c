use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.history.is_empty() {
            return CommandResult::text("No commands in history");
        }
        let lines: Vec<String> = ctx
            .history
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("  {}  {}", i + 1, cmd))
            .collect();
        CommandResult::text(lines.join("\n"))
    }
}
