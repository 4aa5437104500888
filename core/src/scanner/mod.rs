mod error;
#[allow(clippy::module_inception)]
mod scanner;
mod token;

pub use error::{LexError, LexErrorKind};
pub use scanner::{Scanned, Scanner, scan};
pub use token::{Literal, Span, Token, TokenKind};
