use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::VirtualFileSystem;

pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.len() < 2 {
            return CommandResult::text("cp: missing file operand");
        }

        let src = ctx.fs.resolve_path(&ctx.args[0]);
        let dst = ctx.fs.resolve_path(&ctx.args[1]);

        // Deep structural clone: the copy shares nothing with the source, so
        // later edits to one never show through the other.
        let mut copy = match ctx.fs.navigate(&src) {
            Some(node) => node.clone(),
            None => {
                return CommandResult::text(format!(
                    "cp: cannot stat '{}': No such file or directory",
                    ctx.args[0]
                ));
            }
        };

        copy.rename(VirtualFileSystem::base_name(&dst));
        let dst_parent = VirtualFileSystem::parent_path(&dst);
        if ctx.fs.attach(&dst_parent, copy).is_err() {
            return CommandResult::text(format!(
                "cp: cannot create '{}': No such file or directory",
                ctx.args[1]
            ));
        }

        CommandResult::empty()
    }
}
