use crate::commands::{Command, CommandContext, CommandResult};

pub struct WcCommand;

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(arg) = ctx.args.first() else {
            return CommandResult::text("wc: missing file operand");
        };

        let target = ctx.fs.resolve_path(arg);
        match ctx.fs.read_file(&target) {
            Ok(content) => {
                // Lines are newline-split segments, so an empty file still
                // counts one.
                let lines = content.split('\n').count();
                let words = content.split_whitespace().count();
                let chars = content.len();
                CommandResult::text(format!("  {}  {}  {} {}", lines, words, chars, arg))
            }
            Err(e) => CommandResult::text(format!("wc: {}: {}", arg, e)),
        }
    }
}
