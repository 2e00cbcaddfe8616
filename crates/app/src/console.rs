//! Line-oriented front end: reads commands, drives the engine, prints results.

use std::io::{BufRead, Write};

use engine::{Engine, Session};

use crate::{
    commands::{self, Command, ParseError},
    error::{AppError, Result},
    render,
};

const PROMPT: &str = "> ";
const BANNER: &str = "Personal finance ledger";

pub(crate) struct Console<'a> {
    engine: &'a Engine,
    session: Option<Session>,
    running: bool,
}

impl<'a> Console<'a> {
    pub(crate) fn new(engine: &'a Engine) -> Self {
        Self {
            engine,
            session: None,
            running: true,
        }
    }

    /// Runs until `exit` or end of input, then saves every account.
    pub(crate) fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{BANNER}")?;
        writeln!(output, "{}", render::HELP)?;

        let mut lines = input.lines();
        while self.running {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let reply = self.handle_line(&line?);
            if !reply.is_empty() {
                writeln!(output, "{}", reply.trim_end())?;
            }
        }

        let saved = self.engine.save_all(self.session.as_ref())?;
        tracing::info!(saved, "session closed");
        Ok(())
    }

    /// Executes one line and returns the text to show.
    pub(crate) fn handle_line(&mut self, line: &str) -> String {
        let command = match commands::parse(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return String::new(),
            Err(ParseError::Unknown(action)) => {
                tracing::debug!(%action, "unknown command");
                return "Unknown command. Type 'help' for usage.".to_string();
            }
            Err(err) => return error_reply(&err),
        };
        match self.execute(command) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::debug!("command failed: {err}");
                error_reply(&err)
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<String> {
        let engine = self.engine;
        match command {
            Command::Register { username, password } => {
                engine.register(&username, &password)?;
                Ok("Registered successfully!".to_string())
            }
            Command::Login { username, password } => {
                // The current session stays active until the new login succeeds.
                if let Some(previous) = &self.session {
                    engine.save(previous)?;
                }
                let session = engine.login(&username, &password)?;
                let reply = format!("Logged in as {}", session.username());
                self.session = Some(session);
                Ok(reply)
            }
            Command::Add {
                kind,
                category,
                amount,
            } => {
                let session = self.session_mut()?;
                let notes = engine.record(session, kind, &category, amount)?;
                Ok(format!(
                    "{}Added {} successfully!",
                    render::notifications(&notes),
                    kind.as_str()
                ))
            }
            Command::SetBudget {
                category,
                amount,
                edit,
            } => {
                let session = self.session_mut()?;
                engine.set_budget(session, &category, amount)?;
                Ok(if edit { "Budget updated!" } else { "Budget set!" }.to_string())
            }
            Command::Stats { categories } => {
                let summary = self.session_ref()?.wallet().summary(&categories);
                Ok(render::summary(&summary))
            }
            Command::Transfer { to, amount } => {
                let session = self.session_mut()?;
                let notes = engine.transfer(session, &to, amount)?;
                Ok(format!("{}Transfer sent!", render::notifications(&notes)))
            }
            Command::Export { path } => {
                storage::export_wallet(&path, self.session_ref()?.wallet())?;
                Ok(format!("Exported to {}", path.display()))
            }
            Command::Import { path } => {
                let session = self.session_mut()?;
                let wallet = storage::import_wallet(&path)?;
                engine.import(session, wallet)?;
                Ok("Imported successfully!".to_string())
            }
            Command::ListCategories => {
                let wallet = self.session_ref()?.wallet();
                let categories = wallet.categories();
                if categories.is_empty() {
                    return Ok("No categories yet.".to_string());
                }
                let names: Vec<&str> = categories.into_iter().collect();
                Ok(format!("Categories: {}", names.join(", ")))
            }
            Command::Logout => {
                if let Some(session) = self.session.take() {
                    engine.logout(session)?;
                }
                Ok("Logged out.".to_string())
            }
            Command::Help => Ok(render::HELP.to_string()),
            Command::Exit => {
                self.running = false;
                Ok("Goodbye!".to_string())
            }
        }
    }

    fn session_ref(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(AppError::NotLoggedIn)
    }

    fn session_mut(&mut self) -> Result<&mut Session> {
        self.session.as_mut().ok_or(AppError::NotLoggedIn)
    }
}

fn error_reply(err: &dyn std::fmt::Display) -> String {
    format!("Error: {err}. Type 'help' for usage.")
}
