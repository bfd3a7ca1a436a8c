use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{Node, VirtualFileSystem};

pub struct FindCommand;

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let search_arg = ctx
            .args
            .first()
            .cloned()
            .unwrap_or_else(|| ctx.fs.current_path().to_string());

        // Optional `-name <pattern>`; shells don't expand quotes for us, so
        // strip any that surround the pattern.
        let pattern: Option<String> = match (ctx.args.get(1), ctx.args.get(2)) {
            (Some(flag), Some(raw)) if flag == "-name" => {
                Some(raw.trim_matches(|c| c == '"' || c == '\'').to_string())
            }
            _ => None,
        };

        let start_path = ctx.fs.resolve_path(&search_arg);
        let Some(start) = ctx.fs.navigate(&start_path) else {
            return CommandResult::text(format!(
                "find: '{}': No such file or directory",
                search_arg
            ));
        };

        let mut results = Vec::new();
        walk(start, &start_path, pattern.as_deref(), &mut results);
        CommandResult::text(results.join("\n"))
    }
}

/// Depth-first descent collecting the absolute path of every descendant
/// whose base name contains the filter (every descendant when unfiltered).
/// Directories are reported and recursed into; the traversal root itself is
/// not reported.
fn walk(node: &Node, path: &str, pattern: Option<&str>, results: &mut Vec<String>) {
    let Node::Directory { children, .. } = node else {
        return;
    };
    for name in node.sorted_child_names() {
        let child = &children[name];
        let child_path = VirtualFileSystem::join_path(path, name);
        if pattern.map_or(true, |p| name.contains(p)) {
            results.push(child_path.clone());
        }
        walk(child, &child_path, pattern, results);
    }
}
