use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{Node, VirtualFileSystem};

pub struct TreeCommand;

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let path = match ctx.args.first() {
            Some(arg) => ctx.fs.resolve_path(arg),
            None => ctx.fs.current_path().to_string(),
        };
        let display = ctx.args.first().cloned().unwrap_or_else(|| path.clone());

        let node = match ctx.fs.navigate(&path) {
            Some(node) => node,
            None => {
                return CommandResult::text(format!(
                    "tree: {}: No such file or directory",
                    display
                ));
            }
        };
        if !node.is_directory() {
            return CommandResult::text(format!("tree: {}: Not a directory", display));
        }

        let base = VirtualFileSystem::base_name(&path);
        let mut output = if base == "/" {
            "/\n".to_string()
        } else {
            format!("{}/\n", base)
        };
        render(node, "", &mut output);
        CommandResult::text(output.trim_end().to_string())
    }
}

fn render(node: &Node, prefix: &str, output: &mut String) {
    let Node::Directory { children, .. } = node else {
        return;
    };
    let names = node.sorted_child_names();
    for (idx, name) in names.iter().enumerate() {
        let child = &children[*name];
        let last = idx == names.len() - 1;
        let connector = if last { "└── " } else { "├── " };
        let suffix = if child.is_directory() { "/" } else { "" };
        output.push_str(&format!("{}{}{}{}\n", prefix, connector, name, suffix));
        if child.is_directory() {
            let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
            render(child, &child_prefix, output);
        }
    }
}
