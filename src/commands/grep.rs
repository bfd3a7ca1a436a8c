use crate::commands::{Command, CommandContext, CommandResult};

pub struct GrepCommand;

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.len() < 2 {
            return CommandResult::text("grep: missing pattern or file");
        }

        let pattern = &ctx.args[0];
        let file_name = &ctx.args[1];
        let target = ctx.fs.resolve_path(file_name);
        match ctx.fs.read_file(&target) {
            Ok(content) => {
                // Literal substring match, not a pattern language.
                let matches: Vec<&str> = content
                    .split('\n')
                    .filter(|line| line.contains(pattern.as_str()))
                    .collect();
                CommandResult::text(matches.join("\n"))
            }
            Err(e) => CommandResult::text(format!("grep: {}: {}", file_name, e)),
        }
    }
}
