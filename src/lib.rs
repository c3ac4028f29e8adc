//! `adder` adds two integers from the command line.
//!
//! ```console
//! $ adder add --a=5 --b=10
//! 15
//!
//! $ adder add --a 2 --b -2
//! 0
//!
//! $ adder add --a=5
//! adder: error [MissingRequired]: Missing required option '--b' (Second integer).
//! add --a=5
//!           ^
//! ```
//!
//! The option values are 64-bit signed integers.
//! A value always belongs to the flag right before it, so negative values need no quoting or `=` syntax.
//! Parsing is done by [`adder_parser`] against the explicit [`command_table`]; the bound options are then handed to [`execute`].
//!
//! Set `ADDER_LOG` (ex: `ADDER_LOG=debug`) to log the parse and execution to stderr.
mod command;
mod executor;

pub use command::{command_table, ADD, OPTION_A, OPTION_B, PROGRAM};
pub use executor::{execute, ExecError};

use adder_parser::{BoundInvocation, CommandLineParser, UserInterface};

/// Execute the bound invocation, reporting any execution error to the parser's user interface.
///
/// Returns the exit code as `Err` on failure.
pub fn dispatch(parser: &CommandLineParser, bound: &BoundInvocation) -> Result<(), i32> {
    execute(bound, parser.user_interface()).map_err(|error| {
        parser
            .user_interface()
            .print_error(format!("{program}: error: {error}", program = parser.program()));
        1
    })
}

/// Parse and execute the input tokens (excluding the program name).
///
/// The sum is written to the regular output of `user_interface`; diagnostics go to its error output.
/// Returns the exit code as `Err` on failure.
///
/// ### Example
/// ```
/// use adder::run_tokens;
/// use adder_parser::ConsoleInterface;
///
/// run_tokens(&["add", "--a", "2", "--b", "-2"], &ConsoleInterface::default()).unwrap();
/// assert_eq!(run_tokens(&["multiply", "--a=1", "--b=1"], &ConsoleInterface::default()), Err(1));
/// ```
pub fn run_tokens(tokens: &[&str], user_interface: &dyn UserInterface) -> Result<(), i32> {
    let table = command_table().map_err(|error| {
        user_interface.print_error(format!("{PROGRAM}: {error}"));
        1
    })?;
    let parser = CommandLineParser::with_interface(PROGRAM, table, Box::new(user_interface));
    let bound = parser.parse_tokens(tokens)?;
    dispatch(&parser, &bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adder_parser::InMemoryInterface;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[rstest]
    #[case(vec!["add", "--a=5", "--b=10"], "15")]
    #[case(vec!["add", "--a", "5", "--b", "10"], "15")]
    #[case(vec!["add", "--b", "10", "--a", "5"], "15")]
    #[case(vec!["add", "--a", "2", "--b", "-2"], "0")]
    #[case(vec!["add", "--a=-2", "--b=-2"], "-4")]
    #[case(vec!["add", "--a", "-9223372036854775808", "--b", "9223372036854775807"], "-1")]
    fn run_tokens_ok(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let interface = InMemoryInterface::default();

        // Execute
        run_tokens(tokens.as_slice(), &interface).unwrap();

        // Verify
        assert_eq!(interface.consume_message(), expected);
    }

    #[test]
    fn run_tokens_random() {
        let interface = InMemoryInterface::default();

        for _ in 0..100 {
            let a: i64 = thread_rng().gen_range(i64::MIN / 2..i64::MAX / 2);
            let b: i64 = thread_rng().gen_range(i64::MIN / 2..i64::MAX / 2);
            let a_token = format!("--a={a}");
            let b_token = format!("--b={b}");

            run_tokens(&["add", &a_token, &b_token], &interface).unwrap();
            assert_eq!(interface.consume_message(), (a + b).to_string());
        }
    }

    #[rstest]
    #[case(vec!["add", "--a=5"], "adder: error [MissingRequired]: Missing required option '--b' (Second integer).")]
    #[case(vec!["add", "--a=foo", "--b=1"], "adder: error [InvalidValue]: Option 'a' cannot take value 'foo'; expected a base-10 integer.")]
    #[case(vec!["multiply", "--a=1", "--b=1"], "adder: error [UnknownCommand]: Unknown command 'multiply'; expected one of {'add'}.")]
    #[case(vec!["add", "--a", "1", "--b", "2", "-2"], "adder: error [UnknownFlag]: Unknown flag '-2'.")]
    #[case(vec!["add", "--a", "9223372036854775807", "--b", "1"], "adder: error: The sum of 9223372036854775807 and 1 overflows a 64-bit signed integer.")]
    fn run_tokens_error(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let interface = InMemoryInterface::default();

        // Execute
        let exit_code = run_tokens(tokens.as_slice(), &interface).unwrap_err();

        // Verify
        assert_eq!(exit_code, 1);
        let (message, error, _) = interface.consume();
        assert_eq!(message, None);
        assert_eq!(error, Some(expected.to_string()));
    }

    #[test]
    fn run_tokens_idempotent() {
        let tokens = ["add", "--a", "2", "--b", "-2"];
        let first = InMemoryInterface::default();
        let second = InMemoryInterface::default();

        run_tokens(&tokens, &first).unwrap();
        run_tokens(&tokens, &second).unwrap();

        assert_eq!(first.consume(), second.consume());
    }
}
