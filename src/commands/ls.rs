use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let path = match ctx.args.first() {
            Some(arg) => ctx.fs.resolve_path(arg),
            None => ctx.fs.current_path().to_string(),
        };
        let display = ctx.args.first().cloned().unwrap_or_else(|| path.clone());

        let children = match ctx.fs.read_dir(&path) {
            Ok(children) => children,
            Err(FsError::NotFound) => {
                return CommandResult::text(format!(
                    "ls: cannot access '{}': No such file or directory",
                    display
                ));
            }
            Err(_) => {
                return CommandResult::text(format!("ls: {}: Not a directory", display));
            }
        };

        let mut names: Vec<&String> = children.keys().collect();
        names.sort();
        let entries: Vec<String> = names
            .into_iter()
            .map(|name| {
                if children[name].is_directory() {
                    format!("{}/", name)
                } else {
                    name.clone()
                }
            })
            .collect();

        CommandResult::text(entries.join("  "))
    }
}
