use crate::commands::{Command, CommandContext, CommandResult};

pub struct DuCommand;

impl Command for DuCommand {
    fn name(&self) -> &'static str {
        "du"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let path = match ctx.args.first() {
            Some(arg) => ctx.fs.resolve_path(arg),
            None => ctx.fs.current_path().to_string(),
        };
        let display = ctx.args.first().cloned().unwrap_or_else(|| path.clone());

        let Some(target) = ctx.fs.navigate(&path) else {
            return CommandResult::text(format!(
                "du: cannot access '{}': No such file or directory",
                display
            ));
        };

        // Content bytes rounded up to whole kilobytes, never less than 1.
        let kb = target.size().div_ceil(1024).max(1);
        CommandResult::text(format!("{}\t{}", kb, path))
    }
}
