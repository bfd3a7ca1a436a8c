use crate::commands::{Command, CommandContext, CommandResult};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(arg) = ctx.args.first() else {
            return CommandResult::text("mkdir: missing operand");
        };

        let target = ctx.fs.resolve_path(arg);
        match ctx.fs.make_directory(&target) {
            Ok(()) => CommandResult::empty(),
            Err(e) => CommandResult::text(format!(
                "mkdir: cannot create directory '{}': {}",
                arg, e
            )),
        }
    }
}
