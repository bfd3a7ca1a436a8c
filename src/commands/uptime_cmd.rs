use crate::commands::{Command, CommandContext, CommandResult};

pub struct UptimeCommand;

impl Command for UptimeCommand {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        // Cosmetic jitter: an uptime below one hour and three load averages.
        let minutes = ctx.rng.next_u32() % 60;
        let loads = [
            ctx.rng.next_u32() % 100,
            ctx.rng.next_u32() % 100,
            ctx.rng.next_u32() % 100,
        ];
        CommandResult::text(format!(
            "up {} min, 1 user, load average: 0.{}, 0.{}, 0.{}",
            minutes, loads[0], loads[1], loads[2]
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFileSystem;
    use rand::rngs::mock::StepRng;

    fn run_with(rng: &mut StepRng) -> CommandResult {
        let mut fs = VirtualFileSystem::new();
        UptimeCommand.execute(CommandContext {
            args: vec![],
            fs: &mut fs,
            history: &[],
            rng,
        })
    }

    #[test]
    fn test_uptime_format_is_stable_under_fixed_rng() {
        let mut rng = StepRng::new(0, 0);
        let result = run_with(&mut rng);
        assert_eq!(result.output, "up 0 min, 1 user, load average: 0.0, 0.0, 0.0");
    }

    #[test]
    fn test_uptime_fields_stay_in_range() {
        let mut rng = StepRng::new(7, 977);
        let result = run_with(&mut rng);
        let rest = result
            .output
            .strip_prefix("up ")
            .and_then(|s| s.split_once(" min, 1 user, load average: "))
            .map(|(minutes, loads)| (minutes.to_string(), loads.to_string()));
        let (minutes, loads) = rest.expect("unexpected uptime shape");
        assert!(minutes.parse::<u32>().unwrap() < 60);
        for load in loads.split(", ") {
            let frac = load.strip_prefix("0.").unwrap();
            assert!(frac.parse::<u32>().unwrap() < 100);
        }
    }
}
