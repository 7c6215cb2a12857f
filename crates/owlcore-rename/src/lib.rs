//! Deterministic entity renaming.
//!
//! Renderers and exporters that want short, stable, human-readable names
//! depend on [`IriConversionStrategy`]. The strategy shipped here is
//! [`TinyIriCanonicalizer`]:
//!
//! | kind                | fragment |
//! |---------------------|----------|
//! | class               | `C1`, `C2`, ...   |
//! | object property     | `op1`, `op2`, ... |
//! | data property       | `dp1`, ...        |
//! | annotation property | `ap1`, ...        |
//! | named individual    | `i1`, ...         |
//! | datatype, built-ins | unchanged         |
//!
//! Numbering is per kind, 1-based, in first-seen order, under a configurable
//! namespace ([`DEFAULT_BASE`] unless told otherwise).
//!
//! A canonicalizer is single-writer. Wrap it in [`SharedCanonicalizer`] to
//! convert from several threads, or use one instance per thread.

pub mod config;
pub mod fragment;
pub mod renamer;
pub mod shared;
pub mod tiny;

pub use config::{CanonicalizerConfig, DEFAULT_BASE};
pub use fragment::{kind_prefix, next_fragment, KindCounters};
pub use renamer::{rename_axioms, AxiomRenamer};
pub use shared::SharedCanonicalizer;
pub use tiny::{CanonicalMapping, MappingEntry, TinyIriCanonicalizer};

use owlcore_model::{Entity, Iri};

/// Maps entities to the IRIs they should be written out under.
pub trait IriConversionStrategy {
    fn converted_iri(&mut self, entity: &Entity) -> Iri;
}
