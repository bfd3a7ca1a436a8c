use chrono::Utc;

use crate::commands::{Command, CommandContext, CommandResult};

/// Stateless network-request simulator. Pattern-matches the URL string and
/// returns canned text; no real request is ever made.
pub struct CurlCommand;

impl Command for CurlCommand {
    fn name(&self) -> &'static str {
        "curl"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(url) = ctx.args.first() else {
            return CommandResult::text("curl: no URL specified");
        };

        if url.contains("json") || url.contains("api") {
            return CommandResult::text(format!(
                "{{\n  \"status\": \"success\",\n  \"data\": {{\n    \"message\": \"This is a simulated JSON response\",\n    \"timestamp\": \"{}\",\n    \"url\": \"{}\"\n  }}\n}}",
                Utc::now().to_rfc3339(),
                url
            ));
        }

        if url.contains("html") {
            return CommandResult::text(format!(
                "<!DOCTYPE html>\n<html>\n<head><title>Simulated Response</title></head>\n<body><h1>Hello from {}</h1></body>\n</html>",
                url
            ));
        }

        CommandResult::text(format!(
            "Simulated response from {}\nStatus: 200 OK\nContent-Type: text/plain\nContent-Length: 42\n\nThis is a dummy response for testing curl.",
            url
        ))
    }
}
