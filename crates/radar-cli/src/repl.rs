//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! The REPL keeps one entity store for the whole session, so card moves made
//! here stay visible to later commands until the session ends.

use crate::cli::Command;
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use clap::error::ErrorKind;
use clap::Parser;
use radar_domain::DashboardStore;
use radar_store::MemoryStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::debug;

/// Run the interactive REPL.
pub fn run_repl(store: &mut MemoryStore, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Radar REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = format!("radar [rev {}]> ", store.revision());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Até logo!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Usage(text)) => {
                        println!("{}", text);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        match execute_repl_command(cmd, store, config, formatter) {
                            Ok(output) => println!("{}", output),
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Usage(String),
    Command(Command),
}

/// A REPL line parsed with the same grammar as the command line.
#[derive(Debug, Parser)]
#[command(name = "radar", no_binary_name = true)]
struct ReplLine {
    #[command(subcommand)]
    command: Command,
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let words = split_words(line)?;

    let Some(first) = words.first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match first.as_str() {
        "exit" | "quit" | "q" => return Ok(ReplCommand::Exit),
        "help" | "?" if words.len() == 1 => return Ok(ReplCommand::Help),
        _ => {}
    }

    match ReplLine::try_parse_from(&words) {
        Ok(parsed) => match parsed.command {
            Command::Repl => Err(CliError::InvalidInput("Already in REPL mode".to_string())),
            Command::Config(_) => Err(CliError::InvalidInput(
                "Configuration can only be changed outside the REPL".to_string(),
            )),
            command => Ok(ReplCommand::Command(command)),
        },
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(ReplCommand::Usage(e.to_string()))
        }
        Err(e) => Err(CliError::InvalidInput(e.to_string().trim_end().to_string())),
    }
}

/// Execute a REPL command against the session store.
fn execute_repl_command(
    cmd: Command,
    store: &mut MemoryStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    debug!(?cmd, "repl command");
    match cmd {
        Command::Roster(args) => {
            commands::roster::render_roster(&args, store, config.settings.page_size, formatter)
        }
        Command::Pipeline(args) => commands::pipeline::render_pipeline(&args, store, formatter),
        Command::Move(args) => {
            commands::move_card::render_move(&args, store, formatter).map(|(_, message)| message)
        }
        Command::Narratives(args) => {
            commands::narratives::render_narratives(&args, store, formatter)
        }
        Command::Activity(args) => {
            commands::activity::render_activity(&args, store, chrono::Utc::now(), formatter)
        }
        Command::Sentiment(args) => commands::sentiment::render_sentiment(&args, store, formatter),
        Command::Campaigns(args) => commands::campaigns::render_campaigns(&args, store, formatter),
        Command::Config(_) | Command::Repl => Err(CliError::InvalidInput(
            "Command not available in the REPL".to_string(),
        )),
    }
}

/// Split a line into words, honouring double quotes.
fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(CliError::InvalidInput("Unterminated quote".to_string()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  roster [--search s] [--status st] [--party p]");
    println!("         [--sort field] [--desc] [--view table|grid] [--page n]");
    println!("                                 - List the politician roster");
    println!("  pipeline [--stage stage] [--politician id]");
    println!("                                 - Show the pipeline board or one stage");
    println!("  move <card> <stage>            - Move a card to another stage");
    println!("  narratives [--status s] [--sentiment s] [--limit n]");
    println!("                                 - Rank emerging narratives");
    println!("  activity [--limit n]           - Show the recent activity feed");
    println!("  sentiment <politician>         - Mention sentiment breakdown");
    println!("  campaigns [--politician id]    - List campaigns");
    println!("  <command> --help               - Show options for a command");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_split_words_with_quotes() {
        let words = split_words(r#"roster --search "ana silva" --desc"#).unwrap();
        assert_eq!(words, vec!["roster", "--search", "ana silva", "--desc"]);
        assert!(split_words(r#"roster --search "ana"#).is_err());
        assert!(split_words("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_exit_and_help() {
        assert!(matches!(parse_repl_command("quit"), Ok(ReplCommand::Exit)));
        assert!(matches!(parse_repl_command("?"), Ok(ReplCommand::Help)));
        assert!(matches!(parse_repl_command("roster --help"), Ok(ReplCommand::Usage(_))));
    }

    #[test]
    fn test_parse_commands() {
        match parse_repl_command("move card-1 negotiation") {
            Ok(ReplCommand::Command(Command::Move(args))) => {
                assert_eq!(args.card_id, "card-1");
                assert_eq!(args.stage, "negotiation");
            }
            other => panic!("Expected move command, got {:?}", other),
        }
        assert!(parse_repl_command("teleport card-1").is_err());
        assert!(parse_repl_command("repl").is_err());
        assert!(parse_repl_command("config show").is_err());
    }

    #[test]
    fn test_moves_persist_across_commands() {
        let mut store = MemoryStore::demo().unwrap();
        let config = Config::default();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        for line in ["move card-1 active_client", "move card-2 lost"] {
            let ReplCommand::Command(cmd) = parse_repl_command(line).unwrap() else {
                panic!("Expected command");
            };
            execute_repl_command(cmd, &mut store, &config, &formatter).unwrap();
        }

        let ReplCommand::Command(cmd) = parse_repl_command("pipeline --stage active_client").unwrap() else {
            panic!("Expected command");
        };
        let output = execute_repl_command(cmd, &mut store, &config, &formatter).unwrap();
        assert_eq!(output, "card-8\ncard-9\ncard-1");
        assert_eq!(store.revision(), 2);
    }
}
