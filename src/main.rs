use clap::Parser;
use std::io::{BufRead, Write};

use webterm::Terminal;

#[derive(Parser)]
#[command(name = "webterm")]
#[command(about = "An in-memory virtual filesystem with a POSIX-like command shell")]
#[command(version)]
struct Cli {
    /// Execute a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Output the result as JSON (lines, clearScreen)
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let mut term = Terminal::new();

    if let Some(line) = cli.command {
        let outcome = term.submit(&line);
        if cli.json {
            match serde_json::to_string(&outcome) {
                Ok(s) => println!("{}", s),
                Err(e) => eprintln!("webterm: {}", e),
            }
        } else {
            for line in &outcome.lines {
                println!("{}", line);
            }
        }
        return;
    }

    repl(&mut term);
}

fn repl(term: &mut Terminal) {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("{}$ ", term.prompt_path());
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let outcome = term.submit(&line);
        if outcome.clear_screen {
            // ANSI: clear screen, cursor to top-left.
            print!("\x1B[2J\x1B[H");
            continue;
        }
        for line in &outcome.lines {
            println!("{}", line);
        }
    }
}
