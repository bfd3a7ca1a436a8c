use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(arg) = ctx.args.first() else {
            return CommandResult::text("rm: missing operand");
        };

        let target = ctx.fs.resolve_path(arg);
        match ctx.fs.remove_file(&target) {
            Ok(()) => CommandResult::empty(),
            Err(e) => CommandResult::text(format!("rm: cannot remove '{}': {}", arg, e)),
        }
    }
}
