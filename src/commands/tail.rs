use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

const LINE_COUNT: usize = 10;

pub struct TailCommand;

impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(arg) = ctx.args.first() else {
            return CommandResult::text("tail: missing file operand");
        };

        let target = ctx.fs.resolve_path(arg);
        match ctx.fs.read_file(&target) {
            Ok(content) => {
                let lines: Vec<&str> = content.split('\n').collect();
                let start = lines.len().saturating_sub(LINE_COUNT);
                CommandResult::text(lines[start..].join("\n"))
            }
            Err(FsError::IsDirectory) => CommandResult::text(format!(
                "tail: error reading '{}': Is a directory",
                arg
            )),
            Err(_) => CommandResult::text(format!(
                "tail: cannot open '{}' for reading: No such file or directory",
                arg
            )),
        }
    }
}
