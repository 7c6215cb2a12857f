//! Kind-prefixed sequence fragments.
//!
//! The naming function is pure apart from the [`KindCounters`] it is handed:
//! whoever owns the counters owns the numbering.

use owlcore_model::EntityKind;
use serde::{Deserialize, Serialize};

/// Fragment prefix for each entity kind.
///
/// `dt` is reserved for datatypes; canonicalizers identity-map datatypes, so
/// it is never emitted by them.
pub fn kind_prefix(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Class => "C",
        EntityKind::ObjectProperty => "op",
        EntityKind::DataProperty => "dp",
        EntityKind::AnnotationProperty => "ap",
        EntityKind::NamedIndividual => "i",
        EntityKind::Datatype => "dt",
    }
}

/// One monotonically increasing counter per entity kind.
///
/// Counters hold the last number handed out (0 = none yet), so the first
/// fragment of each kind is numbered 1. A `u64` cannot be exhausted by any
/// realistic number of entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounters {
    class: u64,
    object_property: u64,
    data_property: u64,
    annotation_property: u64,
    named_individual: u64,
    datatype: u64,
}

impl KindCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last number handed out for `kind`.
    pub fn current(&self, kind: EntityKind) -> u64 {
        match kind {
            EntityKind::Class => self.class,
            EntityKind::ObjectProperty => self.object_property,
            EntityKind::DataProperty => self.data_property,
            EntityKind::AnnotationProperty => self.annotation_property,
            EntityKind::NamedIndividual => self.named_individual,
            EntityKind::Datatype => self.datatype,
        }
    }

    fn slot(&mut self, kind: EntityKind) -> &mut u64 {
        match kind {
            EntityKind::Class => &mut self.class,
            EntityKind::ObjectProperty => &mut self.object_property,
            EntityKind::DataProperty => &mut self.data_property,
            EntityKind::AnnotationProperty => &mut self.annotation_property,
            EntityKind::NamedIndividual => &mut self.named_individual,
            EntityKind::Datatype => &mut self.datatype,
        }
    }

    /// Advance the counter for `kind` and return the new value.
    pub fn bump(&mut self, kind: EntityKind) -> u64 {
        let slot = self.slot(kind);
        *slot += 1;
        *slot
    }
}

/// Allocate the next fragment for `kind`: prefix followed by the counter.
pub fn next_fragment(kind: EntityKind, counters: &mut KindCounters) -> String {
    let n = counters.bump(kind);
    format!("{}{n}", kind_prefix(kind))
}
