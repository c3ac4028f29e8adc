//! Parser module for `adder`.
//!
//! Tokens are classified by an explicit state machine: once a flag that expects a value is
//! recognized, the very next token is captured as its value, *before* any attempt to classify
//! it as a flag.
//! This is what makes `add --b -2` bind `-2` to `b` instead of rejecting `-2` as a short flag.
//!
//! ```
//! use adder_parser::{parse, CommandSpec, CommandTable, OptionSpec};
//!
//! let table = CommandTable::new(vec![CommandSpec::new("add")
//!     .option(OptionSpec::required("a"))
//!     .option(OptionSpec::required("b"))])
//! .unwrap();
//!
//! let bound = parse(&["add", "--a", "2", "--b", "-2"], &table).unwrap();
//! assert_eq!(bound.get("a"), Some(2));
//! assert_eq!(bound.get("b"), Some(-2));
//! ```
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{
    parse, CommandLineParser, ConsoleInterface, ErrorContext, ErrorKind, ParseError, UserInterface,
};

#[cfg(feature = "unit_test")]
pub use parser::util::InMemoryInterface;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
