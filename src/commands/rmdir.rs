use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(arg) = ctx.args.first() else {
            return CommandResult::text("rmdir: missing operand");
        };

        let target = ctx.fs.resolve_path(arg);
        match ctx.fs.remove_directory(&target) {
            Ok(()) => CommandResult::empty(),
            Err(e) => CommandResult::text(format!("rmdir: failed to remove '{}': {}", arg, e)),
        }
    }
}
