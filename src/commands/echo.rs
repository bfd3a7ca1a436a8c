use crate::commands::{Command, CommandContext, CommandResult};

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        // Single-target output redirection: a `>` anywhere before the last
        // token writes everything left of it into the named file. A trailing
        // `>` is not redirection and echoes literally.
        let redirect = ctx
            .args
            .iter()
            .position(|a| a == ">")
            .filter(|&i| i + 1 < ctx.args.len());

        let Some(i) = redirect else {
            return CommandResult::text(ctx.args.join(" "));
        };

        let content = ctx.args[..i].join(" ");
        let file_name = &ctx.args[i + 1];
        let target = ctx.fs.resolve_path(file_name);
        match ctx.fs.write_file(&target, &content) {
            Ok(()) => CommandResult::empty(),
            Err(_) => CommandResult::text(format!(
                "echo: cannot create '{}': No such file or directory",
                file_name
            )),
        }
    }
}
