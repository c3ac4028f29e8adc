use crate::api::CommandSpec;
use crate::matcher::{OptionConfig, TokenMatcher};
use crate::parser::ConfigError;

/// The commands known to a program.
///
/// Constructed once at program start and passed to [`parse`](crate::parse) (or [`CommandLineParser`](crate::CommandLineParser)) explicitly.
///
/// ### Example
/// ```
/// use adder_parser::{CommandSpec, CommandTable, OptionSpec};
///
/// let table = CommandTable::new(vec![
///     CommandSpec::new("add").option(OptionSpec::required("a")),
///     CommandSpec::new("add").option(OptionSpec::required("b")),
/// ]);
///
/// assert!(table.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: Vec<CommandSpec>,
}

impl CommandTable {
    /// Build the command table.
    /// This checks for configuration errors (ex: a repeated command, option, or short option).
    pub fn new(commands: Vec<CommandSpec>) -> Result<Self, ConfigError> {
        for (i, command) in commands.iter().enumerate() {
            command.validate()?;
            // Building a matcher checks the option/short option uniqueness.
            TokenMatcher::new(command.options().iter().map(OptionConfig::from))?;

            if commands[i + 1..]
                .iter()
                .any(|other| other.name() == command.name())
            {
                return Err(ConfigError(format!(
                    "Cannot duplicate the command '{}'.",
                    command.name()
                )));
            }
        }

        Ok(Self { commands })
    }

    /// Find the command named `name`.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|command| command.name() == name)
    }

    /// The names of all commands, in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(CommandSpec::name).collect()
    }

    /// The commands, in declaration order.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }
}
