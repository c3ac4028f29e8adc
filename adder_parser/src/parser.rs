mod base;
mod interface;
mod middleware;
mod printer;

pub use self::base::{parse, ConfigError, ErrorKind, ParseError};
pub use self::interface::*;
pub use self::middleware::CommandLineParser;
pub use self::printer::ErrorContext;
