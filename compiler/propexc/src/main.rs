//! Propex CLI
//!
//! Explode and crunch C# properties from the command line.

use propexc::{color_enabled, init_tracing, render_error, run, CliError, Command};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    init_tracing();
    let command = &args[1];

    match command.as_str() {
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("propex {}", env!("CARGO_PKG_VERSION"));
        }
        name => {
            let outcome = Command::from_args(name, &args[2..]).and_then(|command| run(&command));
            match outcome {
                Ok(outcome) => {
                    print!("{}", outcome.stdout);
                    if let Some(note) = outcome.note {
                        eprintln!("{note}");
                    }
                }
                Err(error) => fail(&error),
            }
        }
    }
}

fn fail(error: &CliError) -> ! {
    eprint!("{}", render_error(error, color_enabled()));
    if matches!(error, CliError::Usage(_)) {
        eprintln!();
        eprintln!("Run `propex help` for the list of commands.");
    }
    std::process::exit(1);
}

fn print_usage() {
    println!("Propex (C# property explode/crunch)");
    println!();
    println!("Usage: propex <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <file.cs>                  List properties with their paths and candidates");
    println!("  classify <file.cs> <Property>    Show which rewrite a property offers");
    println!("  explode <file.cs> <Property>     Give an auto-property an explicit backing field");
    println!("  crunch <file.cs> <Property>      Collapse a property onto its backing field");
    println!("  help                             Show this help message");
    println!("  version                          Show version information");
    println!();
    println!("Options:");
    println!("  --write, -w    Rewrite the file in place (explode, crunch)");
    println!();
    println!("Properties are named `Name` or `Type.Name`.");
    println!();
    println!("Environment:");
    println!("  PROPEX_LOG       Log filter, e.g. `propex_refactor=debug` (falls back to RUST_LOG)");
    println!("  PROPEX_LOG_TREE  Print logs as an indented span tree");
    println!("  NO_COLOR         Disable colored diagnostics");
}
