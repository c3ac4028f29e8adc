use crate::constant::*;
use crate::matcher::OptionConfig;
use crate::parser::ConfigError;

/// An integer-valued option of a [`CommandSpec`], specified on the Cli via `--NAME VALUE` or `--NAME=VALUE`.
///
/// ### Example
/// ```
/// use adder_parser::OptionSpec;
///
/// let option = OptionSpec::required("a")
///     .short('x')
///     .help("First integer");
///
/// assert_eq!(option.name(), "a");
/// assert_eq!(option.short_name(), Some('x'));
/// assert!(option.is_required());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    name: String,
    short: Option<char>,
    required: bool,
    help: Option<String>,
}

impl OptionSpec {
    /// An option which must receive precisely one value.
    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// An option which may receive at most one value.
    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            short: None,
            required,
            help: None,
        }
    }

    /// Declare the short alias of this option, specified on the Cli via `-C VALUE`, `-C=VALUE` or `-CVALUE`.
    /// If repeated, only the final alias will apply.
    pub fn short(mut self, short: char) -> Self {
        self.short.replace(short);
        self
    }

    /// Document this option.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// The long name of this option.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short alias of this option, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// Whether this option must be specified.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The help message of this option, if any.
    pub fn help_message(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(crate) fn validate(&self, command: &str) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError(format!(
                "Command '{command}' cannot declare an option with an empty name."
            )));
        }

        if self.name.starts_with(SHORT_PREFIX) || self.name.contains(VALUE_DELIMITER) {
            return Err(ConfigError(format!(
                "Command '{command}' cannot declare the option '{n}'; names may not start with '{SHORT_PREFIX}' or contain '{VALUE_DELIMITER}'.",
                n = self.name,
            )));
        }

        if let Some(short) = self.short {
            if short == VALUE_DELIMITER || short == '-' || short.is_whitespace() {
                return Err(ConfigError(format!(
                    "Command '{command}' cannot declare the short option '{short}' for '{n}'.",
                    n = self.name,
                )));
            }
        }

        Ok(())
    }
}

impl From<&OptionSpec> for OptionConfig {
    fn from(value: &OptionSpec) -> Self {
        OptionConfig::new(value.name.clone(), value.short)
    }
}

/// A named sub-command, declaring an ordered set of integer options.
///
/// ### Example
/// ```
/// use adder_parser::{CommandSpec, OptionSpec};
///
/// let add = CommandSpec::new("add")
///     .option(OptionSpec::required("a").help("First integer"))
///     .option(OptionSpec::required("b").help("Second integer"));
///
/// assert_eq!(add.name(), "add");
/// assert_eq!(add.options().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    name: String,
    options: Vec<OptionSpec>,
}

impl CommandSpec {
    /// Create a command without any options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::default(),
        }
    }

    /// Add an option to this command.
    ///
    /// The order of options does not affect the parsing semantics, but it is the order in which missing options are reported.
    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// The name of this command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The options of this command, in declaration order.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() || self.name.starts_with(SHORT_PREFIX) {
            return Err(ConfigError(format!(
                "Cannot declare the command '{n}'; names may not be empty or start with '{SHORT_PREFIX}'.",
                n = self.name,
            )));
        }

        for option in &self.options {
            option.validate(&self.name)?;
        }

        Ok(())
    }
}
