//! Lox - a small dynamically-typed scripting language
//!
//! # Overview
//!
//! This crate bundles the tree-walking interpreter from `lox-core` with an
//! ariadne-based diagnostic renderer. Programs are made of `var`
//! declarations, `print`, `if`/`else`, `while`, `for` and blocks, over
//! `nil`, booleans, numbers and strings.
//!
//! # Quick Start
//!
//! ```
//! use lox::{Engine, EngineOptions};
//!
//! let mut engine = Engine::new(EngineOptions::default());
//! let mut out = Vec::new();
//!
//! engine
//!     .run("for (var i = 0; i < 3; i = i + 1) print i * 1.5;", &mut out)
//!     .unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "0\n1.500000\n3\n");
//! ```
//!
//! # Errors
//!
//! Every failure is an [`Error`] carrying [`Diagnostic`]s. Their `Display`
//! is the one-line form `[Line 1][9] Error at ';': expect expression`;
//! [`render_error`] shows them with the source line instead.

mod error_renderer;

// Re-export public API from lox_core
pub use lox_core::api::{
    Diagnostic, EXIT_COMPILATION, EXIT_RUNTIME, Engine, EngineOptions, Error, Severity,
};

// Re-export the pipeline stages for callers that drive them by hand
pub use lox_core::{ast, environment, evaluator, parser, printer, scanner};
pub use lox_core::values::{self, Value};

// Re-export error rendering
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
