//! Core of the Lox interpreter: scanner, parser, printers and the tree-walking
//! evaluator.
//!
//! The pipeline runs strictly left to right:
//!
//! ```text
//! source ──scan──► tokens ──parse──► statements ──interpret──► side effects
//! ```
//!
//! Most users want [`api::Engine`], which drives the whole pipeline against a
//! persistent global environment and turns every failure into a
//! [`api::Diagnostic`].

pub mod api;
pub mod ast;
pub mod environment;
pub mod evaluator;
pub mod parser;
pub mod printer;
pub mod scanner;
pub mod values;
