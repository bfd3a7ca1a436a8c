use chrono::Local;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct DateCommand;

impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::text(Local::now().format("%a %b %e %H:%M:%S %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFileSystem;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_date_format() {
        let mut fs = VirtualFileSystem::new();
        let mut rng = StepRng::new(0, 1);
        let result = DateCommand.execute(CommandContext {
            args: vec![],
            fs: &mut fs,
            history: &[],
            rng: &mut rng,
        });
        // Weekday abbreviation, month abbreviation, time, year.
        let fields: Vec<&str> = result.output.split_whitespace().collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[3].matches(':').count(), 2);
    }
}
