use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;
use tracing::{info, warn};

use crate::cli::{commands, output, registry::CommandRegistry, render::TerminalRenderer};
use crate::config::{Config, ConfigManager};
use crate::errors::{LedgerError, ValidationError};
use crate::ledger::Session;

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Core(LedgerError::Io(err))
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

/// State shared by every command: the ledger session plus preferences.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub session: Session,
    pub config: Config,
    pub(crate) config_manager: ConfigManager,
    pub(crate) registry: CommandRegistry,
    pub(crate) theme: ColorfulTheme,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::set_color_enabled(config.ui_color_enabled);

        let mut session = Session::new()
            .with_formatter(config.money_formatter())
            .with_period(config.default_period);
        session.subscribe(Box::new(TerminalRenderer::default()));

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        info!(?mode, period = %session.period(), "shell ready");
        Ok(Self {
            mode,
            running: true,
            session,
            config,
            config_manager,
            registry,
            theme: ColorfulTheme::default(),
        })
    }

    pub fn prompt(&self) -> String {
        format!("savings [{}]> ", self.session.period())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &lowered), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    /// Asks for confirmation in interactive mode; scripts always proceed.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        self.confirm("Exit shell? The ledger is not saved.")
            .map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::info("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Validation(err) => {
                warn!(%err, "input rejected");
                output::error(format!(
                    "Introduce una categoría y cantidad válida (>0): {err}"
                ));
                Ok(())
            }
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }

    /// Persists the current preferences and pushes them into the session.
    pub(crate) fn apply_config(&mut self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        output::set_color_enabled(self.config.ui_color_enabled);
        self.session.set_formatter(self.config.money_formatter());
        Ok(())
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn script_context() -> (ShellContext, TempDir) {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let context = ShellContext::with_config_manager(CliMode::Script, manager).unwrap();
        (context, temp)
    }

    #[test]
    fn processes_a_small_session() {
        let (mut context, _temp) = script_context();
        for line in ["income 1000", "add food 200", "add \"  food\" 50", "add transport 100"] {
            assert_eq!(context.process_line(line).unwrap(), LoopControl::Continue);
        }
        let summary = context.session.summary();
        assert_eq!(summary.total_expense, 350.0);
        assert_eq!(summary.savings, 650.0);
    }

    #[test]
    fn invalid_amount_is_reported_not_stored() {
        let (mut context, _temp) = script_context();
        let err = context.process_line("add food -3").unwrap_err();
        assert!(matches!(err, CommandError::Validation(_)));
        assert!(context.session.ledger().is_empty());
    }

    #[test]
    fn unknown_command_continues() {
        let (mut context, _temp) = script_context();
        assert_eq!(context.process_line("sumary").unwrap(), LoopControl::Continue);
    }

    #[test]
    fn exit_stops_the_loop() {
        let (mut context, _temp) = script_context();
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn config_changes_are_saved() {
        let (mut context, temp) = script_context();
        context.process_line("config set currency usd").unwrap();
        let reloaded = ConfigManager::with_base_dir(temp.path().to_path_buf())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(reloaded.currency, "USD");
        assert_eq!(context.session.money().currency.as_str(), "USD");
    }
}
