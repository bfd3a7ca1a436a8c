use crate::commands::{Command, CommandContext, CommandResult};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(arg) = ctx.args.first() else {
            return CommandResult::text("touch: missing file operand");
        };

        let target = ctx.fs.resolve_path(arg);
        match ctx.fs.touch_file(&target) {
            Ok(()) => CommandResult::empty(),
            Err(e) => CommandResult::text(format!("touch: cannot touch '{}': {}", arg, e)),
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
        TouchCommand.execute(CommandContext {
            args: args.into_iter().map(String::from).collect(),
            fs,
            history: &[],
            rng: &mut rng,
        })
    }

    #[test]
    fn test_touch_creates_empty_file() {
        let mut fs = VirtualFileSystem::new();
        let result = run(&mut fs, vec!["new.txt"]);
        assert_eq!(result.output, "");
        assert_eq!(fs.read_file("/home/user/new.txt"), Ok(""));
    }

    #[test]
    fn test_touch_does_not_truncate() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("/home/user/a.txt", "keep").unwrap();
        run(&mut fs, vec!["a.txt"]);
        run(&mut fs, vec!["a.txt"]);
        assert_eq!(fs.read_file("/home/user/a.txt"), Ok("keep"));
    }

    #[test]
    fn test_touch_errors() {
        let mut fs = VirtualFileSystem::new();
        assert_eq!(run(&mut fs, vec![]).output, "touch: missing file operand");
        assert_eq!(
            run(&mut fs, vec!["/nope/f"]).output,
            "touch: cannot touch '/nope/f': No such file or directory"
        );
        fs.write_file("/home/user/f", "x").unwrap();
        assert_eq!(
            run(&mut fs, vec!["f/g"]).output,
            "touch: cannot touch 'f/g': Not a directory"
        );
    }
}
