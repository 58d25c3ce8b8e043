//! Interactive team menu
//!
//! The session owns its [`TeamTree`] and talks to any `BufRead`/`Write` pair,
//! so the whole menu can be driven from a script in tests.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt, MenuChoice};
use crate::cli::output;
use crate::config::{DisplayStyle, Settings};
use crate::domain::{DomainError, Layout, TeamTree, TermTreeConvert};

type Flow = ControlFlow<()>;

pub struct Session<R, W> {
    input: R,
    output: W,
    tree: TeamTree,
    layout: Layout,
    style: DisplayStyle,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: &Settings) -> Self {
        Self {
            input,
            output,
            tree: TeamTree::new(),
            layout: settings.layout(),
            style: settings.display.style,
        }
    }

    /// Start from an existing hierarchy, e.g. one with the lead preset.
    pub fn with_tree(mut self, tree: TeamTree) -> Self {
        self.tree = tree;
        self
    }

    pub fn tree(&self) -> &TeamTree {
        &self.tree
    }

    pub fn into_parts(self) -> (TeamTree, W) {
        (self.tree, self.output)
    }

    /// Runs the menu until Exit is chosen or input ends.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> ApplicationResult<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.ask("Choose an option (1-4):")? else {
                debug!("input closed at menu");
                return Ok(());
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!("menu choice: {:?}", choice);
                    self.dispatch(choice)?
                }
                Err(e) => {
                    output::failure(&mut self.output, &e).with_context("write output")?;
                    Flow::Continue(())
                }
            };

            if flow.is_break() {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ApplicationResult<Flow> {
        match choice {
            MenuChoice::AddLead => self.add_lead(),
            MenuChoice::AddEmployee => self.add_employee(),
            MenuChoice::PrintStructure => self.print_structure().map(|_| Flow::Continue(())),
            MenuChoice::Exit => {
                output::info(&mut self.output, "Good Bye!").with_context("write output")?;
                Ok(Flow::Break(()))
            }
        }
    }

    fn show_menu(&mut self) -> ApplicationResult<()> {
        output::header(&mut self.output, "Team Management Menu").with_context("write output")?;
        for choice in MenuChoice::ALL {
            output::info(&mut self.output, &choice).with_context("write output")?;
        }
        Ok(())
    }

    fn add_lead(&mut self) -> ApplicationResult<Flow> {
        // no prompt once a lead exists
        if let Some(root) = self.tree.root() {
            let err = DomainError::RootAlreadySet(root.name().to_string());
            self.report(&err)?;
            return Ok(Flow::Continue(()));
        }

        let Some(name) = self.ask("Enter team lead's name:")? else {
            return Ok(Flow::Break(()));
        };
        match self.tree.set_root(&name) {
            Ok(lead) => {
                info!("team lead set: {}", lead.name());
                let msg = format!("{} added as the team lead.", lead.name());
                output::success(&mut self.output, &msg).with_context("write output")?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue(()))
    }

    fn add_employee(&mut self) -> ApplicationResult<Flow> {
        let Some(manager) = self.ask("Enter the manager's name:")? else {
            return Ok(Flow::Break(()));
        };
        let Some(employee) = self.ask("Enter the new employee's name:")? else {
            return Ok(Flow::Break(()));
        };
        let Some(side) = self.ask("Should this employee be on the LEFT or RIGHT of the manager?")?
        else {
            return Ok(Flow::Break(()));
        };

        match self.tree.insert(&manager, &employee, &side) {
            Ok(status) => {
                info!("{}", status);
                output::success(&mut self.output, &status).with_context("write output")?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue(()))
    }

    fn print_structure(&mut self) -> ApplicationResult<()> {
        output::header(&mut self.output, "Current Team Structure:").with_context("write output")?;
        match self.style {
            DisplayStyle::Indent => {
                for entry in self.tree.print() {
                    let line = self.layout.render(&entry);
                    output::info(&mut self.output, &line).with_context("write output")?;
                }
            }
            DisplayStyle::Tree => {
                let rendered = self.tree.render_termtree();
                write!(self.output, "{}", rendered).with_context("write output")?;
            }
        }
        Ok(())
    }

    /// Hierarchy conflicts are warnings; bad input is a failure.
    fn report(&mut self, err: &DomainError) -> ApplicationResult<()> {
        debug!("rejected: {:?}", err);
        let written = match err {
            DomainError::NoRoot
            | DomainError::SlotOccupied { .. }
            | DomainError::RootAlreadySet(_) => output::warning(&mut self.output, err),
            DomainError::InvalidSide(_)
            | DomainError::ManagerNotFound(_)
            | DomainError::EmptyName => output::failure(&mut self.output, err),
        };
        written.with_context("write output")
    }

    /// Prompt and read one line without its line ending; `None` on end of input.
    fn ask(&mut self, prompt: &str) -> ApplicationResult<Option<String>> {
        output::prompt(&mut self.output, prompt).with_context("write prompt")?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).with_context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
