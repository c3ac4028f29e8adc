use std::collections::HashMap;

/// The integer type of every option value: 64-bit signed.
pub type Integer = i64;

/// The result of successfully parsing tokens against a [`CommandTable`](crate::CommandTable).
///
/// Every required option of the selected command has a value.
/// Optional options which were not specified are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundInvocation {
    command: String,
    values: HashMap<String, Integer>,
}

impl BoundInvocation {
    pub(crate) fn new(command: impl Into<String>, values: HashMap<String, Integer>) -> Self {
        Self {
            command: command.into(),
            values,
        }
    }

    /// The name of the selected command.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The bound value of the option `name`, if any.
    ///
    /// ### Example
    /// ```
    /// use adder_parser::{parse, CommandSpec, CommandTable, OptionSpec};
    ///
    /// let table = CommandTable::new(vec![CommandSpec::new("add")
    ///     .option(OptionSpec::required("a"))
    ///     .option(OptionSpec::optional("c"))])
    /// .unwrap();
    ///
    /// let bound = parse(&["add", "--a=-7"], &table).unwrap();
    /// assert_eq!(bound.command(), "add");
    /// assert_eq!(bound.get("a"), Some(-7));
    /// assert_eq!(bound.get("c"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<Integer> {
        self.values.get(name).copied()
    }

    /// The number of bound options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no option is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
