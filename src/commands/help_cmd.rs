use crate::commands::{Command, CommandContext, CommandResult};

const HELP: &str = "Available commands:
  ls [path]           - List directory contents
  cd [path]           - Change directory
  mkdir <name>        - Create directory
  rmdir <name>        - Remove empty directory
  touch <file>        - Create file
  rm <file>           - Remove file
  mv <src> <dest>     - Move/rename file or directory
  cp <src> <dest>     - Copy file or directory
  cat <file>          - Display file contents
  echo <text>         - Print text (use > to redirect to file)
  head <file>         - Show first 10 lines of file
  tail <file>         - Show last 10 lines of file
  grep <pattern> <file> - Search for pattern in file
  find [path] [-name pattern] - Find files
  wc <file>           - Count lines, words, characters
  tree [path]         - Display directory tree
  du [path]           - Show disk usage
  curl <url>          - Simulate HTTP request
  pwd                 - Print working directory
  date                - Show current date and time
  whoami              - Show current user
  ps                  - Show running processes
  uptime              - Show system uptime
  history             - Show command history
  clear               - Clear screen
  help                - Show this help message";

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::text(HELP)
    }
}
