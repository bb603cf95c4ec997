use std::io::{BufRead, Write};
use std::str::FromStr;

use log::{debug, warn};

use crate::application::{AppError, ExpenseService, NewExpense};
use crate::domain::{format_cents, format_date, Category, Expense, ExpenseId, SearchMode, SearchQuery};

use super::prompt::Prompter;
use super::{ABOUT, PROMPT, VERSION};

/// Commands understood by the REPL. Matching is exact; there are no abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Total,
    Search,
    Help,
    Exit,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Add,
        Command::List,
        Command::Total,
        Command::Search,
        Command::Help,
        Command::Exit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::List => "list",
            Command::Total => "total",
            Command::Search => "search",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            Command::Add => "record a new expense",
            Command::List => "show all expenses",
            Command::Total => "show totals per category",
            Command::Search => "find expenses by category, date or date range",
            Command::Help => "show this message",
            Command::Exit => "leave the program",
        }
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| AppError::UnknownCommand(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    Running,
    Exited,
}

/// **Contains every command with a one-line summary.**
///
/// Built from `Command::ALL` so a newly added command can't be left out.
pub fn help_contents() -> String {
    let mut msg = format!("{ABOUT}\n\nCommands:\n");
    for command in Command::ALL {
        msg.push_str(&format!("  {:<8}{}\n", command.as_str(), command.summary()));
    }
    msg
}

/// The read-dispatch-print loop.
pub struct Repl<R, W> {
    service: ExpenseService,
    prompter: Prompter<R, W>,
    state: ReplState,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            service: ExpenseService::new(),
            prompter: Prompter::new(input, output),
            state: ReplState::Running,
        }
    }

    pub fn state(&self) -> ReplState {
        self.state
    }

    pub fn service(&self) -> &ExpenseService {
        &self.service
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    pub fn print_about(&mut self) -> Result<(), AppError> {
        let out = self.prompter.output();
        writeln!(out, "{ABOUT}")?;
        writeln!(out, "Version {VERSION}")?;
        Ok(())
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), AppError> {
        while self.state == ReplState::Running {
            match self.step() {
                Ok(()) => {}
                Err(AppError::EndOfInput) => {
                    debug!("end of input, leaving");
                    self.exit()?;
                }
                Err(err) => {
                    warn!("session aborted: {}", err);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Read and execute one command line.
    pub fn step(&mut self) -> Result<(), AppError> {
        let line = self.prompter.read_line(PROMPT)?;
        let input = line.trim();
        if input.is_empty() {
            return Ok(());
        }

        let outcome = input.parse::<Command>().and_then(|command| {
            debug!("dispatching {:?}", command);
            self.execute(command)
        });

        match outcome {
            Err(err) if err.is_recoverable() => {
                writeln!(self.prompter.output(), "{err}")?;
                Ok(())
            }
            other => other,
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Add => self.add(),
            Command::List => self.list(),
            Command::Total => self.total(),
            Command::Search => self.search(),
            Command::Help => {
                write!(self.prompter.output(), "{}", help_contents())?;
                Ok(())
            }
            Command::Exit => self.exit(),
        }
    }

    fn exit(&mut self) -> Result<(), AppError> {
        writeln!(self.prompter.output(), "Exiting {ABOUT}")?;
        self.state = ReplState::Exited;
        Ok(())
    }

    /// Nothing is stored until all four fields are valid.
    fn add(&mut self) -> Result<(), AppError> {
        let amount_cents = self.prompter.read_number(" amount", true)?;
        let description = self.prompter.read_text(" description> ")?;
        let category: Category = self.prompter.read_choice(" category")?;
        let date = self.prompter.read_date(" expense date")?;

        let id = self.service.record_expense(NewExpense {
            amount_cents,
            description,
            category,
            date,
        })?;

        writeln!(self.prompter.output(), "Added expense #{id}")?;
        Ok(())
    }

    fn list(&mut self) -> Result<(), AppError> {
        let rows = self.service.list_expenses();
        write_expense_table(self.prompter.output(), &rows)
    }

    fn total(&mut self) -> Result<(), AppError> {
        let report = self.service.category_report();
        let out = self.prompter.output();

        for summary in &report.categories {
            writeln!(
                out,
                "{} {}",
                summary.category.display_name(),
                format_cents(summary.total)
            )?;
        }
        writeln!(out, "Total: {}", format_cents(report.total))?;
        Ok(())
    }

    fn search(&mut self) -> Result<(), AppError> {
        self.service.ensure_searchable()?;

        let mode: SearchMode = self.prompter.read_choice(" search type")?;
        let query = match mode {
            SearchMode::Category => SearchQuery::Category(self.prompter.read_choice(" category")?),
            SearchMode::Date => SearchQuery::Date(self.prompter.read_date(" date")?),
            SearchMode::DateRange => {
                let from = self.prompter.read_date(" from")?;
                let to = self.prompter.read_date(" to")?;
                SearchQuery::date_range(from, to)?
            }
        };

        let rows = self.service.search(&query);
        write_expense_table(self.prompter.output(), &rows)
    }
}

const TABLE_WIDTH: usize = 64;

/// Header is always written, even with no rows.
fn write_expense_table<W: Write>(
    out: &mut W,
    rows: &[(ExpenseId, &Expense)],
) -> Result<(), AppError> {
    writeln!(
        out,
        "{:<6} {:<12} {:>12}  {:<14} {}",
        "ENTRY", "DATE", "AMOUNT", "CATEGORY", "DESCRIPTION"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    for (id, expense) in rows {
        let row = format!(
            "{:<6} {:<12} {:>12}  {:<14} {}",
            id,
            format_date(expense.date),
            format_cents(expense.amount_cents),
            expense.category.display_name(),
            expense.description
        );
        writeln!(out, "{}", row.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_session(input: &str) -> (Repl<Cursor<Vec<u8>>, Vec<u8>>, Result<(), AppError>) {
        let mut repl = Repl::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = repl.run();
        (repl, result)
    }

    fn output(repl: Repl<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(repl.into_output()).unwrap()
    }

    #[test]
    fn test_help_contents() {
        let help = help_contents();
        for command in Command::ALL {
            assert!(help.contains(command.as_str()), "missing {:?}", command);
        }
        assert!(help.starts_with(ABOUT));
    }

    #[test]
    fn test_command_parsing_is_exact() {
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Exit);
        assert!(matches!(
            "ADD".parse::<Command>(),
            Err(AppError::UnknownCommand(cmd)) if cmd == "ADD"
        ));
        assert!("a".parse::<Command>().is_err());
        assert!("quit".parse::<Command>().is_err());
    }

    #[test]
    fn test_exit_ends_loop() {
        let (repl, result) = run_session("exit\nlist\n");
        assert!(result.is_ok());
        assert_eq!(repl.state(), ReplState::Exited);

        let out = output(repl);
        assert!(out.ends_with("Exiting Expense Tracker\n"));
        assert!(!out.contains("ENTRY"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (repl, result) = run_session("list\n");
        assert!(result.is_ok());
        assert_eq!(repl.state(), ReplState::Exited);
        assert!(output(repl).contains("Exiting Expense Tracker"));
    }

    #[test]
    fn test_unknown_command_keeps_running() {
        let (repl, _) = run_session("remove 1\n\n   \nexit\n");
        let out = output(repl);
        assert!(out.contains("Unknown command remove 1. Use help for a list of commands"));
        assert_eq!(out.matches("Unknown command").count(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_reported_not_fatal() {
        let input = b"\xff\xfe\nadd\n\xff\n5\nBus\ntravel\n2024-03-10\nexit\n".to_vec();
        let mut repl = Repl::new(Cursor::new(input), Vec::new());

        assert!(repl.run().is_ok());
        assert_eq!(repl.service().ledger().len(), 1);
        assert_eq!(repl.service().ledger().total(), 500);

        let out = output(repl);
        assert_eq!(out.matches("Unknown command").count(), 1);
        assert!(out.contains("Invalid amount: invalid number"));
        assert!(out.contains("Added expense #1"));
    }

    #[test]
    fn test_add_list_total_scenario() {
        let (repl, _) = run_session("add\n42.50\nLunch\nGROCERIES\n2024-03-15\nlist\ntotal\nexit\n");
        let out = output(repl);

        assert!(out.contains("Added expense #1"));
        let rows: Vec<&str> = out.lines().filter(|l| l.contains("Lunch")).collect();
        assert_eq!(rows.len(), 1);
        let fields: Vec<&str> = rows[0].split_whitespace().collect();
        assert_eq!(fields, vec!["1", "2024-03-15", "42.50", "Groceries", "Lunch"]);

        assert!(out.contains("Groceries 42.50\n"));
        assert!(out.contains("Total: 42.50\n"));
    }

    #[test]
    fn test_partial_add_at_eof_stores_nothing() {
        let (repl, result) = run_session("add\n10\nTaxi\nTRAVEL\n");
        assert!(result.is_ok());
        assert!(repl.service().ledger().is_empty());
    }

    #[test]
    fn test_search_on_empty_ledger() {
        let (repl, _) = run_session("search\nexit\n");
        let out = output(repl);

        assert!(out.contains("No expenses\n"));
        assert!(!out.contains("search type>"));
    }

    #[test]
    fn test_search_reversed_range_reports_error() {
        let input = "add\n5\nBus\ntravel\n2024-03-10\n\
                     search\ndate_range\n2024-03-20\n2024-03-01\nexit\n";
        let (repl, _) = run_session(input);
        let out = output(repl);

        assert!(out.contains("Invalid date range"));
        assert!(!out.contains("ENTRY"));
    }
}
