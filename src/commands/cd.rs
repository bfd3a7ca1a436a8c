use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{Node, DEFAULT_HOME};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(arg) = ctx.args.first() else {
            ctx.fs.set_current_path(DEFAULT_HOME.to_string());
            return CommandResult::empty();
        };

        let target = ctx.fs.resolve_path(arg);
        match ctx.fs.navigate(&target).map(Node::is_directory) {
            None => CommandResult::text(format!("cd: no such file or directory: {}", arg)),
            Some(false) => CommandResult::text(format!("cd: not a directory: {}", arg)),
            Some(true) => {
                ctx.fs.set_current_path(target);
                CommandResult::empty()
            }
        }
    }
}
