//! Configuration options for the Lox engine.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for the engine.
///
/// # Example
///
/// ```
/// use lox_core::api::EngineOptions;
///
/// let options = EngineOptions {
///     max_parse_depth: 64,
///     ..EngineOptions::default()
/// };
/// assert!(!options.echo_expressions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum nesting of statements and expressions accepted by the parser.
    ///
    /// Evaluation recurses along the same tree, so this also bounds the
    /// evaluator's stack use.
    ///
    /// Default: 256
    pub max_parse_depth: usize,

    /// Return the value of a trailing expression statement from
    /// [`Engine::run`](super::Engine::run), for the prompt to echo.
    ///
    /// Default: false
    pub echo_expressions: bool,
}

impl EngineOptions {
    /// Options for an interactive session.
    pub fn interactive() -> Self {
        Self {
            echo_expressions: true,
            ..Self::default()
        }
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_parse_depth: DEFAULT_MAX_DEPTH,
            echo_expressions: false,
        }
    }
}
