use adder_parser::{CommandSpec, CommandTable, ConfigError, OptionSpec};

/// The program name, as shown in diagnostics.
pub const PROGRAM: &str = "adder";
/// The `add` command.
pub const ADD: &str = "add";
/// The first operand of `add`.
pub const OPTION_A: &str = "a";
/// The second operand of `add`.
pub const OPTION_B: &str = "b";

/// The commands of `adder`.
///
/// Built once at startup and passed to the parser.
pub fn command_table() -> Result<CommandTable, ConfigError> {
    CommandTable::new(vec![CommandSpec::new(ADD)
        .option(OptionSpec::required(OPTION_A).help("First integer"))
        .option(OptionSpec::required(OPTION_B).help("Second integer"))])
}
