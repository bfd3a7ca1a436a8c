use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

const LINE_COUNT: usize = 10;

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(arg) = ctx.args.first() else {
            return CommandResult::text("head: missing file operand");
        };

        let target = ctx.fs.resolve_path(arg);
        match ctx.fs.read_file(&target) {
            Ok(content) => {
                let lines: Vec<&str> = content.split('\n').take(LINE_COUNT).collect();
                CommandResult::text(lines.join("\n"))
            }
            Err(FsError::IsDirectory) => CommandResult::text(format!(
                "head: error reading '{}': Is a directory",
                arg
            )),
            Err(_) => CommandResult::text(format!(
                "head: cannot open '{}' for reading: No such file or directory",
                arg
            )),
        }
    }
}
