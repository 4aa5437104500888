//! Public API for running Lox programs.
//!
//! [`Engine`] drives the whole pipeline (scan, parse, interpret) against a
//! persistent global environment. Every failure comes back as an [`Error`]
//! holding [`Diagnostic`]s and the source text, and knows the exit status a
//! script runner should report.
//!
//! # Example
//!
//! ```
//! use lox_core::api::{Engine, EngineOptions, Error};
//!
//! let mut engine = Engine::new(EngineOptions::default());
//! let mut out = Vec::new();
//!
//! match engine.run("print (1 + 2;", &mut out) {
//!     Err(err @ Error::Compilation { .. }) => {
//!         assert_eq!(err.exit_code(), 65);
//!         assert_eq!(
//!             err.diagnostics()[0].to_string(),
//!             "[Line 1][13] Error at ';': expect ')' after expression"
//!         );
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::Engine;
pub use error::{Diagnostic, EXIT_COMPILATION, EXIT_RUNTIME, Error, Severity};
pub use options::EngineOptions;
