//! Interactive team management menu
//!
//! Reads choices line by line and drives a [`Directory`]. Generic over the
//! input and output streams so sessions can be scripted in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use tracing::{debug, info, instrument};

use crate::application::directory::Directory;
use crate::application::error_ext::IoResultExt;
use crate::application::messages;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::TreeError;

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTeamLead,
    AddEmployee,
    PrintStructure,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddTeamLead),
            "2" => Ok(MenuChoice::AddEmployee),
            "3" => Ok(MenuChoice::PrintStructure),
            "4" => Ok(MenuChoice::Exit),
            other => Err(other.to_string()),
        }
    }
}

const MENU: &str = "\
Team Management Menu
1. Add Team Lead (root)
2. Add Employee
3. Print Team Structure
4. Exit";

pub struct Shell<R, W> {
    directory: Directory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(directory: Directory, input: R, output: W) -> Self {
        Self {
            directory,
            input,
            output,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn into_directory(self) -> Directory {
        self.directory
    }

    /// Run the menu loop until the user exits or input ends.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> ApplicationResult<()> {
        loop {
            writeln!(self.output).with_context("write menu")?;
            writeln!(self.output, "{}", MENU.bold()).with_context("write menu")?;

            let Some(choice) = self.ask("Choose an option (1-4):")? else {
                debug!("input closed");
                break;
            };

            match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::AddTeamLead) => self.add_team_lead()?,
                Ok(MenuChoice::AddEmployee) => self.add_employee()?,
                Ok(MenuChoice::PrintStructure) => self.print_structure()?,
                Ok(MenuChoice::Exit) => break,
                Err(other) => {
                    debug!("unknown menu choice: {:?}", other);
                    self.failure("Invalid option. Try again.")?;
                }
            }
        }
        writeln!(self.output, "Good bye!").with_context("write farewell")?;
        info!("session ended with {} employees", self.directory.tree().len());
        Ok(())
    }

    fn add_team_lead(&mut self) -> ApplicationResult<()> {
        if self.directory.has_team_lead() {
            return self.warning("Team lead already exists.");
        }
        let Some(name) = self.ask("Enter team lead's name:")? else {
            return Ok(());
        };
        match self.directory.add_team_lead(&name) {
            Ok(name) => self.success(&messages::team_lead_added(&name)),
            Err(e) => self.report(e),
        }
    }

    fn add_employee(&mut self) -> ApplicationResult<()> {
        let Some(manager) = self.ask("Enter the manager's name:")? else {
            return Ok(());
        };
        let Some(employee) = self.ask("Enter the new employee's name:")? else {
            return Ok(());
        };
        let Some(side) = self.ask("Should this employee be on the LEFT or RIGHT of the manager?")?
        else {
            return Ok(());
        };

        match self
            .directory
            .add_employee(&manager, &employee, &side.to_lowercase())
        {
            Ok(side) => self.success(&messages::employee_added(&employee, &manager, side)),
            Err(e) => self.report(e),
        }
    }

    fn print_structure(&mut self) -> ApplicationResult<()> {
        writeln!(self.output).with_context("write structure")?;
        writeln!(self.output, "{}", "Current Team Structure:".cyan().bold())
            .with_context("write structure")?;
        writeln!(self.output, "{}", self.directory.structure()).with_context("write structure")
    }

    /// Show a rejected action. Only tree and input errors are recoverable here.
    fn report(&mut self, err: ApplicationError) -> ApplicationResult<()> {
        match err {
            ApplicationError::Tree(e) => {
                let message = messages::rejection(&e);
                match e {
                    TreeError::SlotOccupied { .. } | TreeError::AlreadyExists { .. } => {
                        self.warning(&message)
                    }
                    _ => self.failure(&message),
                }
            }
            ApplicationError::EmptyName(role) => {
                self.failure(&format!("{} name must not be empty", capitalize(role)))
            }
            other => Err(other),
        }
    }

    /// Prompt and read one trimmed line. `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> ApplicationResult<Option<String>> {
        write!(self.output, "{} ", prompt.cyan()).with_context("write prompt")?;
        self.output.flush().with_context("flush prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).with_context("read input")?;
        if read == 0 {
            writeln!(self.output).with_context("write prompt")?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn success(&mut self, msg: &str) -> ApplicationResult<()> {
        writeln!(self.output, "{} {}", "✓".green(), msg).with_context("write message")
    }

    fn warning(&mut self, msg: &str) -> ApplicationResult<()> {
        writeln!(self.output, "{} {}", "!".yellow(), msg).with_context("write message")
    }

    fn failure(&mut self, msg: &str) -> ApplicationResult<()> {
        writeln!(self.output, "{} {}", "✗".red(), msg).with_context("write message")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
