//! The Lox execution engine.

use std::io::Write;

use tracing::debug;

use super::{Diagnostic, EngineOptions, Error};
use crate::{
    environment::Environment,
    evaluator::Interpreter,
    parser::{self, ParsedProgram},
    scanner,
    values::Value,
};

/// One interpreter session.
///
/// The engine owns the global environment, so definitions made by one call
/// to [`Engine::run`] are visible to the next. A script runner uses one
/// engine for the whole file; the prompt uses one per session.
///
/// # Example
///
/// ```
/// use lox_core::api::{Engine, EngineOptions};
///
/// let mut engine = Engine::new(EngineOptions::default());
/// let mut out = Vec::new();
///
/// engine.run("var greeting = \"hello\";", &mut out).unwrap();
/// engine.run("print greeting + \" world\";", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "hello world\n");
///
/// let err = engine.run("print -greeting;", &mut std::io::sink()).unwrap_err();
/// assert_eq!(err.exit_code(), 70);
/// ```
pub struct Engine {
    options: EngineOptions,
    globals: Environment<'static>,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            globals: Environment::new(),
        }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Access the global environment.
    pub fn globals(&self) -> &Environment<'static> {
        &self.globals
    }

    /// Scan and parse `source` without running it.
    ///
    /// Lexical errors stop before parsing. Otherwise every syntax error in the
    /// source is reported.
    pub fn compile(&self, source: &str) -> Result<ParsedProgram, Error> {
        let scanned = scanner::scan(source);
        if scanned.has_errors() {
            debug!(errors = scanned.errors.len(), "lexical errors, skipping parse");
            return Err(Error::Compilation {
                diagnostics: scanned.errors.iter().map(Diagnostic::from).collect(),
                source: source.to_string(),
            });
        }

        let program = parser::parse_with_max_depth(&scanned.tokens, self.options.max_parse_depth);
        if program.has_errors() {
            return Err(Error::Compilation {
                diagnostics: program.errors.iter().map(Diagnostic::from).collect(),
                source: source.to_string(),
            });
        }
        Ok(program)
    }

    /// Scan, parse and execute `source` against the global environment,
    /// writing `print` output to `out`.
    ///
    /// With [`EngineOptions::echo_expressions`] set, returns the value of a
    /// trailing expression statement.
    pub fn run(&mut self, source: &str, out: &mut dyn Write) -> Result<Option<Value>, Error> {
        let program = self.compile(source)?;
        self.execute(&program, source, out)
    }

    /// Execute an already parsed program. `source` is only used for
    /// diagnostics.
    pub fn execute(
        &mut self,
        program: &ParsedProgram,
        source: &str,
        out: &mut dyn Write,
    ) -> Result<Option<Value>, Error> {
        let last = Interpreter::new(out)
            .interpret(&program.statements, &mut self.globals)
            .map_err(|err| Error::Runtime {
                diagnostic: Diagnostic::from(&err),
                source: source.to_string(),
            })?;
        Ok(last.filter(|_| self.options.echo_expressions))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
