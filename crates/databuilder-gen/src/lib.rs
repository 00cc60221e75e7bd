//! Builder generation for Kotlin data classes.
//!
//! Declarations come from a host through [`databuilder_host::DeclarationSource`]; each one is parsed,
//! its fields classified into [`generator::ast::Kind`]s, and a `{Name}Builder` module synthesized and
//! rendered as Kotlin.

pub mod generator;
pub(crate) mod reserved;
