use clap::{Arg, ArgAction, Command};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use tinybasic::formatting::{self, Identity, Terminal};
use tinybasic::parsing::{self, Cursor};
use tinybasic::problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("tinybasic")
        .version(VERSION)
        .propagate_version(true)
        .about("Parser for a small line-numbered BASIC.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Syntax-check the given program")
                .arg(
                    Arg::new("interactive")
                        .long("interactive")
                        .action(ArgAction::SetTrue)
                        .help("Stop at the first problem rather than skipping the offending line and carrying on."),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .value_parser(["native", "json", "none"])
                        .default_value("none")
                        .action(ArgAction::Set)
                        .help("Which kind of output to emit for the parsed program."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the program you want to check, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Code format the given program")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the program you want to format, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Parse the given program one line at a time, echoing each line as it is read")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the program you want to list, or - for standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let code = match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));
            let interactive = submatches.get_flag("interactive");
            let output = submatches
                .get_one::<String>("output")
                .map(String::as_str)
                .unwrap_or("none");

            debug!(?filename, interactive, output);
            check(filename, interactive, output)
        }
        Some(("format", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));
            let raw = submatches.get_flag("raw-control-chars");

            debug!(?filename, raw);
            format(filename, raw)
        }
        Some(("list", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));

            debug!(?filename);
            list(filename)
        }
        Some(_) => {
            println!("No valid subcommand was used");
            1
        }
        None => {
            println!("usage: tinybasic [COMMAND] ...");
            println!("Try '--help' for more information.");
            0
        }
    };

    std::process::exit(code);
}

fn check(filename: &Path, interactive: bool, output: &str) -> i32 {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, &Identity));
            return 1;
        }
    };

    match parsing::parse(&content, interactive) {
        Ok(program) => {
            match output {
                "native" => print!("{}", program),
                "json" => match serde_json::to_string_pretty(&program) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("error: {}", error);
                        return 1;
                    }
                },
                _ => {}
            }
            0
        }
        Err(problems) => {
            let colour = std::io::stderr().is_terminal();
            for diagnostic in &problems {
                if colour {
                    eprintln!("{}\n", problem::full_diagnostic(diagnostic, &Terminal));
                } else {
                    eprintln!("{}\n", problem::full_diagnostic(diagnostic, &Identity));
                }
            }
            eprintln!(
                "{} problem{} found in {}",
                problems.len(),
                if problems.len() == 1 { "" } else { "s" },
                filename.display()
            );
            1
        }
    }
}

fn format(filename: &Path, raw: bool) -> i32 {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, &Identity));
            return 1;
        }
    };

    match parsing::parse(&content, false) {
        Ok(program) => {
            let result = if raw || std::io::stdout().is_terminal() {
                formatting::render(&Terminal, &program)
            } else {
                formatting::render(&Identity, &program)
            };
            print!("{}", result);
            0
        }
        Err(problems) => {
            for diagnostic in &problems {
                eprintln!(
                    "{}",
                    problem::concise_diagnostic(diagnostic, filename, &Identity)
                );
            }
            1
        }
    }
}

/// Feed the program through one line at a time, echoing each line once it
/// has been read, and stop at the first problem.
fn list(filename: &Path) -> i32 {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, &Identity));
            return 1;
        }
    };

    let mut cursor = Cursor::new(&content).interactive(true);

    loop {
        match parsing::parse_line(cursor) {
            Ok((Some(line), next)) => {
                println!("tb > {}", line);
                if next.is_done() {
                    return 0;
                }
                cursor = next;
            }
            Ok((None, _)) => return 0,
            Err(diagnostic) => {
                println!("{}", problem::full_diagnostic(&diagnostic, &Identity));
                return 1;
            }
        }
    }
}
