use adder_parser::{BoundInvocation, Integer, UserInterface};
use thiserror::Error;
use tracing::debug;

use crate::command::{ADD, OPTION_A, OPTION_B};

/// The reason a bound invocation could not be executed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    /// The command has no handler.
    #[error("No handler for the command '{0}'.")]
    UnknownCommand(String),

    /// An operand was not bound, as when a table declares it optional.
    #[error("The command '{command}' is missing the operand '--{operand}'.")]
    MissingOperand {
        /// The command being executed.
        command: String,
        /// The unbound option.
        operand: String,
    },

    /// The sum does not fit the integer type.
    #[error("The sum of {a} and {b} overflows a 64-bit signed integer.")]
    Overflow {
        /// The first operand.
        a: Integer,
        /// The second operand.
        b: Integer,
    },
}

/// Execute the bound invocation, writing its result to the regular output of `user_interface`.
pub fn execute(
    bound: &BoundInvocation,
    user_interface: &dyn UserInterface,
) -> Result<(), ExecError> {
    match bound.command() {
        ADD => add(bound, user_interface),
        command => Err(ExecError::UnknownCommand(command.to_string())),
    }
}

fn add(bound: &BoundInvocation, user_interface: &dyn UserInterface) -> Result<(), ExecError> {
    let a = operand(bound, OPTION_A)?;
    let b = operand(bound, OPTION_B)?;
    let sum = a.checked_add(b).ok_or(ExecError::Overflow { a, b })?;
    debug!("Executed {a} + {b} = {sum}.");
    user_interface.print(sum.to_string());
    Ok(())
}

fn operand(bound: &BoundInvocation, name: &str) -> Result<Integer, ExecError> {
    bound.get(name).ok_or_else(|| ExecError::MissingOperand {
        command: bound.command().to_string(),
        operand: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use adder_parser::{parse, CommandSpec, CommandTable, InMemoryInterface, OptionSpec};
    use rstest::rstest;

    fn bind(tokens: &[&str]) -> BoundInvocation {
        parse(tokens, &crate::command_table().unwrap()).unwrap()
    }

    #[rstest]
    #[case(0, 0, "0")]
    #[case(2, -2, "0")]
    #[case(5, 10, "15")]
    #[case(-5, -10, "-15")]
    #[case(i64::MAX, 0, "9223372036854775807")]
    #[case(i64::MIN, 0, "-9223372036854775808")]
    #[case(i64::MAX, i64::MIN, "-1")]
    fn execute_add(#[case] a: Integer, #[case] b: Integer, #[case] expected: &str) {
        // Setup
        let a_token = format!("--a={a}");
        let b_token = format!("--b={b}");
        let bound = bind(&[ADD, &a_token, &b_token]);
        let interface = InMemoryInterface::default();

        // Execute
        execute(&bound, &interface).unwrap();

        // Verify
        assert_eq!(interface.consume_message(), expected);
    }

    #[rstest]
    #[case(i64::MAX, 1)]
    #[case(i64::MIN, -1)]
    #[case(i64::MAX, i64::MAX)]
    fn execute_add_overflow(#[case] a: Integer, #[case] b: Integer) {
        // Setup
        let a_token = format!("--a={a}");
        let b_token = format!("--b={b}");
        let bound = bind(&[ADD, &a_token, &b_token]);
        let interface = InMemoryInterface::default();

        // Execute
        let error = execute(&bound, &interface).unwrap_err();

        // Verify
        assert_matches!(error, ExecError::Overflow { a: x, b: y } if x == a && y == b);
        assert_eq!(interface.consume(), (None, None, None));
    }

    #[test]
    fn execute_unknown_command() {
        let table = CommandTable::new(vec![
            CommandSpec::new("multiply").option(OptionSpec::required(OPTION_A))
        ])
        .unwrap();
        let bound = parse(&["multiply", "--a=1"], &table).unwrap();
        let interface = InMemoryInterface::default();

        assert_eq!(
            execute(&bound, &interface),
            Err(ExecError::UnknownCommand("multiply".to_string()))
        );
    }

    #[rstest]
    #[case(vec![ADD, "--b=1"], OPTION_A)]
    #[case(vec![ADD, "--a=1"], OPTION_B)]
    #[case(vec![ADD], OPTION_A)]
    fn execute_add_missing_operand(#[case] tokens: Vec<&str>, #[case] operand: &str) {
        // Setup
        let table = CommandTable::new(vec![CommandSpec::new(ADD)
            .option(OptionSpec::optional(OPTION_A))
            .option(OptionSpec::optional(OPTION_B))])
        .unwrap();
        let bound = parse(tokens.as_slice(), &table).unwrap();
        let interface = InMemoryInterface::default();

        // Execute
        let error = execute(&bound, &interface).unwrap_err();

        // Verify
        assert_matches!(
            &error,
            ExecError::MissingOperand { command, operand: o } if command == ADD && o == operand
        );
        assert_eq!(
            error.to_string(),
            format!("The command 'add' is missing the operand '--{operand}'.")
        );
        assert_eq!(interface.consume(), (None, None, None));
    }
}
