//! Host-side contract for the builder generator.
//!
//! A host (an annotation processor, a compiler plugin, or a JSON dump produced by one) describes each
//! annotated declaration through [`DeclarationSource`] and answers type lookups through [`TypeResolver`].
//! The generator only ever reads through these traits.
//!
//! [`HostDump`] is the serde-backed reference host: a JSON document listing declarations together with
//! the fully qualified names of every type the host can resolve.

mod declaration;
mod dump;
mod markers;

pub use declaration::{Declaration, DeclarationSource, Parameter, QualifiedName, TypeParameter, TypeResolver};
pub use dump::{DumpError, HostDump};
pub use markers::{ALIAS_DEFAULT_VALUE, AliasMarker, CreatorMarker, MarkerSet};
