use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::api::CommandTable;
use crate::matcher::*;
use crate::model::{BoundInvocation, Integer};

// The command name is always the first token.
const COMMAND_OFFSET: usize = 1;

/// An invalid [`CommandTable`] configuration.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

impl From<TokenMatcherError> for ConfigError {
    fn from(error: TokenMatcherError) -> Self {
        ConfigError(error.to_string())
    }
}

/// The reason a set of tokens could not be bound to a command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The first token is absent, or names no known command.
    #[error("{}", describe_unknown_command(.command, .known))]
    UnknownCommand {
        /// The first token, if any.
        command: Option<String>,
        /// The names of the known commands.
        known: Vec<String>,
    },

    /// A flag token names no declared option.
    #[error("Unknown flag '{token}'.")]
    UnknownFlag {
        /// The complete flag token.
        token: String,
    },

    /// The value of an option is not a base-10 integer.
    #[error("Option '{option}' cannot take value '{raw_value}'; expected a base-10 integer.")]
    InvalidValue {
        /// The option name.
        option: String,
        /// The value, as it appeared on the Cli.
        raw_value: String,
    },

    /// A required option was not specified.
    #[error("{}", describe_missing_required(.option, .help))]
    MissingRequired {
        /// The option name.
        option: String,
        /// The help message of the option, if any.
        help: Option<String>,
    },

    /// The tokens ended while an option was awaiting its value.
    #[error("Option '{option}' expects a value.")]
    MissingValue {
        /// The option name.
        option: String,
    },

    /// An option was specified more than once.
    #[error("Option '{option}' cannot be specified more than once.")]
    DuplicateOption {
        /// The option name.
        option: String,
    },

    /// A token appeared where an option was expected.
    #[error("Unexpected argument '{token}'; expected an option such as '--NAME'.")]
    UnexpectedArgument {
        /// The unexpected token.
        token: String,
    },
}

fn describe_unknown_command(command: &Option<String>, known: &[String]) -> String {
    let expected = known
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<String>>()
        .join(", ");

    match command {
        Some(command) => format!("Unknown command '{command}'; expected one of {{{expected}}}."),
        None => format!("Missing command; expected one of {{{expected}}}."),
    }
}

fn describe_missing_required(option: &str, help: &Option<String>) -> String {
    match help {
        Some(help) => format!("Missing required option '--{option}' ({help})."),
        None => format!("Missing required option '--{option}'."),
    }
}

/// The classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ParseError::UnknownCommand`].
    UnknownCommand,
    /// See [`ParseError::UnknownFlag`].
    UnknownFlag,
    /// See [`ParseError::InvalidValue`].
    InvalidValue,
    /// See [`ParseError::MissingRequired`].
    MissingRequired,
    /// See [`ParseError::MissingValue`].
    MissingValue,
    /// See [`ParseError::DuplicateOption`].
    DuplicateOption,
    /// See [`ParseError::UnexpectedArgument`].
    UnexpectedArgument,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ParseError {
    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnknownCommand { .. } => ErrorKind::UnknownCommand,
            ParseError::UnknownFlag { .. } => ErrorKind::UnknownFlag,
            ParseError::InvalidValue { .. } => ErrorKind::InvalidValue,
            ParseError::MissingRequired { .. } => ErrorKind::MissingRequired,
            ParseError::MissingValue { .. } => ErrorKind::MissingValue,
            ParseError::DuplicateOption { .. } => ErrorKind::DuplicateOption,
            ParseError::UnexpectedArgument { .. } => ErrorKind::UnexpectedArgument,
        }
    }
}

impl From<MatchError> for ParseError {
    fn from(error: MatchError) -> Self {
        match error {
            MatchError::UnknownFlag(token) => ParseError::UnknownFlag { token },
            MatchError::UnexpectedArgument(token) => ParseError::UnexpectedArgument { token },
            MatchError::DuplicateOption(option) => ParseError::DuplicateOption { option },
            MatchError::MissingValue(option) => ParseError::MissingValue { option },
        }
    }
}

/// Parse the tokens (excluding the program name) against the command table.
///
/// The first token selects the command.
/// Every following token must either introduce an option (`--NAME`, `--NAME=VALUE`, or via its short alias), or be the value of the option introduced by the token immediately before it.
/// Such a value is never re-classified, so negative numbers need no special syntax.
///
/// ### Example
/// ```
/// use adder_parser::{parse, CommandSpec, CommandTable, ErrorKind, OptionSpec};
///
/// let table = CommandTable::new(vec![CommandSpec::new("add")
///     .option(OptionSpec::required("a"))
///     .option(OptionSpec::required("b"))])
/// .unwrap();
///
/// let bound = parse(&["add", "--b", "-2", "--a=2"], &table).unwrap();
/// assert_eq!(bound.get("b"), Some(-2));
///
/// let error = parse(&["add", "--a=5"], &table).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::MissingRequired);
/// ```
pub fn parse(tokens: &[&str], table: &CommandTable) -> Result<BoundInvocation, ParseError> {
    consume(tokens, table).map_err(|(_, error)| error)
}

/// Parse the tokens, reporting the index of the offending token on error.
///
/// Parsing happens in three phases:
/// 1. Token matching aligns the tokens to options, stopping at the first error.
/// 2. Token capturing converts each matched value to an integer, in token order.
/// 3. The required options are checked, in declaration order.
pub(crate) fn consume(
    tokens: &[&str],
    table: &CommandTable,
) -> Result<BoundInvocation, (usize, ParseError)> {
    let (command, option_tokens) = match tokens.split_first() {
        Some((name, remaining)) => match table.get(name) {
            Some(command) => (command, remaining),
            None => {
                return Err((
                    0,
                    ParseError::UnknownCommand {
                        command: Some(name.to_string()),
                        known: known_commands(table),
                    },
                ));
            }
        },
        None => {
            return Err((
                0,
                ParseError::UnknownCommand {
                    command: None,
                    known: known_commands(table),
                },
            ));
        }
    };
    debug!("Selected command '{}'.", command.name());

    let mut token_matcher = TokenMatcher::new(command.options().iter().map(OptionConfig::from))
        .expect("internal error - the command table must already be validated");

    // 1. Feed the raw token strings to the matcher.
    for (index, token) in option_tokens.iter().enumerate() {
        token_matcher
            .feed(token)
            .map_err(|error| (index + COMMAND_OFFSET, ParseError::from(error)))?;
    }

    let matches = token_matcher
        .close()
        .map_err(|(offset, error)| (offset + COMMAND_OFFSET, ParseError::from(error)))?;

    // 2. Convert each of the raw value strings into an integer.
    let mut values: HashMap<String, Integer> = HashMap::default();

    for MatchToken {
        name,
        offset,
        value,
    } in matches.values
    {
        match capture_integer(&value) {
            Some(integer) => {
                debug!("Captured '{name}' = {integer}.");
                if values.insert(name, integer).is_some() {
                    unreachable!("internal error - an option cannot be matched twice");
                }
            }
            None => {
                return Err((
                    offset + COMMAND_OFFSET,
                    ParseError::InvalidValue {
                        option: name,
                        raw_value: value,
                    },
                ));
            }
        }
    }

    // 3. Every required option must have been captured.
    for option in command.options() {
        if option.is_required() && !values.contains_key(option.name()) {
            return Err((
                tokens.len(),
                ParseError::MissingRequired {
                    option: option.name().to_string(),
                    help: option.help_message().map(str::to_string),
                },
            ));
        }
    }

    Ok(BoundInvocation::new(command.name(), values))
}

fn known_commands(table: &CommandTable) -> Vec<String> {
    table.names().into_iter().map(str::to_string).collect()
}

/// Convert a base-10 signed integer: an optional leading `-`, then at least one ASCII digit.
pub(crate) fn capture_integer(value: &str) -> Option<Integer> {
    let digits = value.strip_prefix('-').unwrap_or(value);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Out of range values are rejected here.
    Integer::from_str(value).ok()
}
