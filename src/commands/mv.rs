use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::VirtualFileSystem;

pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.len() < 2 {
            return CommandResult::text("mv: missing file operand");
        }

        let src = ctx.fs.resolve_path(&ctx.args[0]);
        let dst = ctx.fs.resolve_path(&ctx.args[1]);

        // Copy to the destination first, then drop the source. Ordered this
        // way so a failed destination leaves the source in place.
        let source = match ctx.fs.navigate(&src) {
            Some(node) => node.clone(),
            None => {
                return CommandResult::text(format!(
                    "mv: cannot stat '{}': No such file or directory",
                    ctx.args[0]
                ));
            }
        };

        let mut moved = source;
        moved.rename(VirtualFileSystem::base_name(&dst));
        let dst_parent = VirtualFileSystem::parent_path(&dst);
        if ctx.fs.attach(&dst_parent, moved).is_err() {
            return CommandResult::text(format!(
                "mv: cannot move '{}' to '{}': No such file or directory",
                ctx.args[0], ctx.args[1]
            ));
        }

        ctx.fs.detach(&src);
        CommandResult::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFileSystem;
    use rand::rngs::mock::StepRng;

    fn run(fs: &mut VirtualFileSystem, args: Vec<&str>) -> CommandResult {
        let mut rng = StepRng::new(0, 1);
        MvCommand.execute(CommandContext {
            args: args.into_iter().map(String::from).collect(),
            fs,
            history: &[],
            rng: &mut rng,
        })
    }

    #[test]
    fn test_mv_renames_file() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("/home/user/a", "payload").unwrap();
        let result = run(&mut fs, vec!["a", "b"]);
        assert_eq!(result.output, "");
        assert!(fs.navigate("/home/user/a").is_none());
        assert_eq!(fs.read_file("/home/user/b"), Ok("payload"));
    }

    #[test]
    fn test_mv_directory_keeps_children() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("/home/user/d").unwrap();
        fs.write_file("/home/user/d/f", "x").unwrap();
        run(&mut fs, vec!["d", "/tmp/d2"]);
        assert!(fs.navigate("/home/user/d").is_none());
        assert_eq!(fs.read_file("/tmp/d2/f"), Ok("x"));
    }

    #[test]
    fn test_mv_missing_source() {
        let mut fs = VirtualFileSystem::new();
        assert_eq!(
            run(&mut fs, vec!["nope", "b"]).output,
            "mv: cannot stat 'nope': No such file or directory"
        );
    }

    #[test]
    fn test_mv_missing_destination_parent() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("/home/user/a", "x").unwrap();
        assert_eq!(
            run(&mut fs, vec!["a", "/nope/b"]).output,
            "mv: cannot move 'a' to '/nope/b': No such file or directory"
        );
        // Source untouched after the failure.
        assert_eq!(fs.read_file("/home/user/a"), Ok("x"));
    }

    #[test]
    fn test_mv_missing_operand() {
        let mut fs = VirtualFileSystem::new();
        assert_eq!(run(&mut fs, vec!["a"]).output, "mv: missing file operand");
    }
}
