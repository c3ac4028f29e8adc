mod spec;
mod table;

pub use self::spec::*;
pub use self::table::*;
pub use crate::parser::ConfigError;
