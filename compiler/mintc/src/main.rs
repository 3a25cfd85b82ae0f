//! Mint CLI
//!
//! Tree-walking interpreter for the Mint language.

use std::process::ExitCode;

use mintc::commands::{lex_file, parse_file, run_file};
use mintc::EXIT_USAGE;

fn main() -> ExitCode {
    mintc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        return ExitCode::from(run_file(None));
    };
    let path = args.get(2).map(String::as_str);

    let code = match command.as_str() {
        "run" => run_file(path),
        "lex" | "parse" => {
            let Some(path) = path else {
                eprintln!("Usage: mint {command} <file.mint>");
                return ExitCode::from(EXIT_USAGE);
            };
            if command == "lex" {
                lex_file(Some(path))
            } else {
                parse_file(Some(path))
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("Mint {}", env!("CARGO_PKG_VERSION"));
            0
        }
        "-" => run_file(None),
        other if other.starts_with('-') => {
            eprintln!("Unknown option: {other}");
            eprintln!();
            print_usage();
            EXIT_USAGE
        }
        // Anything else is a program path.
        file => run_file(Some(file)),
    };
    ExitCode::from(code)
}

fn print_usage() {
    println!("Mint interpreter");
    println!();
    println!("Usage: mint <command> [file]");
    println!();
    println!("Commands:");
    println!("  run <file.mint>      Parse and execute a program (`-` or no file: stdin)");
    println!("  <file.mint>          Shorthand for `run <file.mint>`");
    println!("  lex <file.mint>      Tokenize and display tokens");
    println!("  parse <file.mint>    Parse and display the program tree");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Input statements always read the terminal, even when the program");
    println!("comes from stdin.");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable debug logging to stderr (e.g. RUST_LOG=mint_eval=debug)");
}
