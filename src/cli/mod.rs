use std::io;

use anyhow::Result;
use clap::Parser;

mod prompt;
mod repl;

pub use prompt::Prompter;
pub use repl::{help_contents, Command, Repl, ReplState};

pub const ABOUT: &str = "Expense Tracker";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PROMPT: &str = "$ ";

/// Expense Tracker - interactive expense ledger
///
/// Takes no arguments: everything happens in the interactive session.
/// Built-in help and version flags are disabled so that any argument is
/// a usage error.
#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(about = "An interactive expense tracker")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();

        let mut repl = Repl::new(stdin.lock(), stdout.lock());
        repl.print_about()?;
        repl.run()?;

        Ok(())
    }
}
