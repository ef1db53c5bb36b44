use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::cli::output::{self, OutputPreferences};
use crate::cli::table;
use crate::config::ConfigManager;
use crate::core::{ModelManager, TransactBook};
use crate::errors::TransactError;
use crate::logic::{CommandResult, LogicManager, TabWindow};
use crate::storage::{JsonStorage, Storage};

const PROMPT: &str = "transact> ";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Setup(#[from] TransactError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

struct ShellContext {
    mode: CliMode,
    logic: LogicManager,
    quiet: bool,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("TRANSACT_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let config_manager = ConfigManager::new()?;
    let config = config_manager.load().unwrap_or_else(|err| {
        warn!(%err, "config file unreadable, using defaults");
        output::warning(format!("Config file could not be read ({err}); using defaults."));
        Default::default()
    });
    output::set_preferences(OutputPreferences {
        quiet_mode: config.quiet,
        plain: mode == CliMode::Script,
    });

    let storage = JsonStorage::new(config.resolve_data_file(config_manager.base_dir()));
    let book = load_book(&storage);
    let mut context = ShellContext {
        mode,
        logic: LogicManager::new(ModelManager::new(book), Box::new(storage)),
        quiet: config.quiet,
    };

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn load_book(storage: &JsonStorage) -> TransactBook {
    match storage.load() {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!(path = %storage.path().display(), "starting with an empty book");
            TransactBook::new()
        }
        Err(err) => {
            warn!(%err, path = %storage.path().display(), "data file could not be loaded");
            output::warning(format!(
                "Data file could not be loaded ({err}); starting with an empty book."
            ));
            TransactBook::new()
        }
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let helper = CommandHelper::new(context.logic.registry().names().collect());
    editor.set_helper(Some(helper));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
    output::info("Welcome to Transact. Type `help` to see available commands.");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if handle_line(context, trimmed) == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if handle_line(context, trimmed) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn confirm_exit() -> Result<bool, CliError> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Exit shell?")
        .default(false)
        .interact()?)
}

fn handle_line(context: &mut ShellContext, line: &str) -> LoopControl {
    match context.logic.execute(line) {
        Ok(result) => {
            render_result(context, &result);
            if result.exit {
                LoopControl::Exit
            } else {
                LoopControl::Continue
            }
        }
        Err(err) => {
            output::error(&err);
            LoopControl::Continue
        }
    }
}

fn render_result(context: &ShellContext, result: &CommandResult) {
    output::success(&result.feedback);

    if result.show_help {
        for entry in context.logic.registry().list() {
            output::section(entry.name);
            output::info(entry.description);
            output::info(entry.usage);
        }
    }

    if context.quiet && context.mode == CliMode::Interactive {
        return;
    }
    match result.view {
        Some(TabWindow::AddressBook) => {
            output::section("Address Book");
            output::info(table::persons_table(context.logic.model()).render());
        }
        Some(TabWindow::Transactions) => {
            output::section("Transactions");
            output::info(table::transactions_table(context.logic.model()).render());
        }
        None => {}
    }
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        Self { commands }
    }

    fn candidates(&self, needle: &str) -> Vec<Pair> {
        let needle = needle.to_ascii_lowercase();
        self.commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        // only the command word completes
        if prefix[start..].contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        Ok((start, self.candidates(&prefix[start..])))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_candidates_match_prefix() {
        let helper = CommandHelper::new(vec!["edittransaction", "exit", "add", "addtransaction"]);
        let names: Vec<_> = helper
            .candidates("ADD")
            .into_iter()
            .map(|pair| pair.replacement)
            .collect();
        assert_eq!(names, vec!["add", "addtransaction"]);
        assert!(helper.candidates("zz").is_empty());
    }
}
