use std::env;
use tracing::debug;

use crate::api::CommandTable;
use crate::model::BoundInvocation;
use crate::parser::base::consume;
use crate::parser::interface::{ConsoleInterface, UserInterface};
use crate::parser::ErrorContext;

/// The command line parser of a program: the program name, its [`CommandTable`], and where to report errors.
///
/// ### Example
/// ```
/// use adder_parser::{CommandLineParser, CommandSpec, CommandTable, OptionSpec};
///
/// let table = CommandTable::new(vec![CommandSpec::new("add")
///     .option(OptionSpec::required("a"))
///     .option(OptionSpec::required("b"))])
/// .unwrap();
/// let parser = CommandLineParser::new("adder", table);
///
/// let bound = parser.parse_tokens(&["add", "--a", "2", "--b", "-2"]).unwrap();
/// assert_eq!(bound.get("a").unwrap() + bound.get("b").unwrap(), 0);
/// ```
pub struct CommandLineParser<'ui> {
    program: String,
    table: CommandTable,
    user_interface: Box<dyn UserInterface + 'ui>,
}

impl<'ui> std::fmt::Debug for CommandLineParser<'ui> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("program", &self.program)
            .field("table", &self.table)
            .finish()
    }
}

impl CommandLineParser<'static> {
    /// Create a command line parser reporting to the console.
    pub fn new(program: impl Into<String>, table: CommandTable) -> Self {
        Self::with_interface(program, table, Box::new(ConsoleInterface::default()))
    }
}

impl<'ui> CommandLineParser<'ui> {
    /// Create a command line parser reporting to `user_interface`.
    pub fn with_interface(
        program: impl Into<String>,
        table: CommandTable,
        user_interface: Box<dyn UserInterface + 'ui>,
    ) -> Self {
        Self {
            program: program.into(),
            table,
            user_interface,
        }
    }

    /// The name of the program.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The commands of the program.
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Where this parser reports to.
    pub fn user_interface(&self) -> &(dyn UserInterface + 'ui) {
        &*self.user_interface
    }

    /// Run the command line parser against the input tokens (excluding the program name).
    ///
    /// If the tokens cannot be bound, the error and its context are reported to the user interface, and this returns `Err(1)`.
    /// Nothing is written to the regular output.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<BoundInvocation, i32> {
        match consume(tokens, &self.table) {
            Ok(bound) => Ok(bound),
            Err((offset, error)) => {
                debug!("Parse failed at token {offset}: {error:?}");
                self.user_interface.print_error(format!(
                    "{program}: error [{kind}]: {error}",
                    program = self.program,
                    kind = error.kind(),
                ));
                self.user_interface
                    .print_error_context(ErrorContext::new(offset, tokens));
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If the tokens cannot be bound, the error is reported and the process exits with error code `1` (via [`std::process::exit`]).
    pub fn parse(&self) -> BoundInvocation {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(bound) => bound,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }
}
