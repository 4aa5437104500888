pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use parser::{DEFAULT_MAX_DEPTH, ParsedProgram, Parser, parse, parse_with_max_depth};
