use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(arg) = ctx.args.first() else {
            return CommandResult::text("cat: missing file operand");
        };

        let target = ctx.fs.resolve_path(arg);
        match ctx.fs.read_file(&target) {
            Ok(content) => CommandResult::text(content),
            Err(e) => CommandResult::text(format!("cat: {}: {}", arg, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFileSystem;
    use rand::rngs::mock::StepRng;

    fn run(fs: &mut VirtualFileSystem, args: Vec<&str>) -> CommandResult {
        let mut rng = StepRng::new(0, 1);
        CatCommand.execute(CommandContext {
            args: args.into_iter().map(String::from).collect(),
            fs,
            history: &[],
            rng: &mut rng,
        })
    }

    #[test]
    fn test_cat_prints_content_verbatim() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("/home/user/f.txt", "line1\nline2").unwrap();
        assert_eq!(run(&mut fs, vec!["f.txt"]).output, "line1\nline2");
    }

    #[test]
    fn test_cat_empty_file_has_no_output() {
        let mut fs = VirtualFileSystem::new();
        fs.touch_file("/home/user/empty").unwrap();
        assert_eq!(run(&mut fs, vec!["empty"]).output, "");
    }

    #[test]
    fn test_cat_errors() {
        let mut fs = VirtualFileSystem::new();
        assert_eq!(run(&mut fs, vec![]).output, "cat: missing file operand");
        assert_eq!(
            run(&mut fs, vec!["nope"]).output,
            "cat: nope: No such file or directory"
        );
        assert_eq!(
            run(&mut fs, vec!["/tmp"]).output,
            "cat: /tmp: Is a directory"
        );
    }
}
