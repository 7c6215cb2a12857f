//! Tiny-IRI canonicalizer.
//!
//! Maps each entity to `base + prefix + n`, where the prefix depends on the
//! entity kind and `n` counts entities of that kind in first-seen order:
//!
//! ```text
//! base = "http://x#"
//!   Class(http://a.org/Person)      -> http://x#C1
//!   NamedIndividual(http://a.org/bob) -> http://x#i1
//!   Class(http://a.org/Person)      -> http://x#C1   (memoized)
//!   Class(http://a.org/Animal)      -> http://x#C2
//! ```
//!
//! Datatypes and built-in vocabulary keep their own IRI and are never
//! recorded. The mapping is injective for one instance and grows for the
//! instance's whole lifetime.

use crate::config::CanonicalizerConfig;
use crate::fragment::{next_fragment, KindCounters};
use crate::IriConversionStrategy;
use ahash::AHashMap;
use owlcore_model::{Entity, EntityKind, Iri};
use serde::{Deserialize, Serialize};

/// One recorded assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub entity: Entity,
    pub iri: Iri,
}

/// Serializable view of a canonicalizer's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalMapping {
    pub base: String,
    pub entries: Vec<MappingEntry>,
}

#[derive(Debug, Clone)]
pub struct TinyIriCanonicalizer {
    base: String,
    /// entity -> index into `entries`
    assigned: AHashMap<Entity, usize>,
    entries: Vec<MappingEntry>,
    counters: KindCounters,
}

impl Default for TinyIriCanonicalizer {
    fn default() -> Self {
        Self::from_config(&CanonicalizerConfig::default())
    }
}

impl TinyIriCanonicalizer {
    /// A canonicalizer using [`crate::DEFAULT_BASE`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            assigned: AHashMap::new(),
            entries: Vec::new(),
            counters: KindCounters::new(),
        }
    }

    pub fn from_config(config: &CanonicalizerConfig) -> Self {
        Self::with_base(config.base.clone())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The canonical IRI for `entity`, allocating one on first sight.
    pub fn convert(&mut self, entity: &Entity) -> Iri {
        if entity.kind() == EntityKind::Datatype || entity.is_built_in() {
            return entity.iri().clone();
        }

        if let Some(&index) = self.assigned.get(entity) {
            let iri = &self.entries[index].iri;
            tracing::trace!(entity = %entity, iri = %iri, "canonical iri memo hit");
            return iri.clone();
        }

        let fragment = next_fragment(entity.kind(), &mut self.counters);
        let iri = Iri::from_parts(&self.base, &fragment);
        tracing::debug!(entity = %entity, iri = %iri, "assigned canonical iri");

        self.assigned.insert(entity.clone(), self.entries.len());
        self.entries.push(MappingEntry {
            entity: entity.clone(),
            iri: iri.clone(),
        });
        iri
    }

    /// The IRI already assigned to `entity`, without allocating.
    pub fn get(&self, entity: &Entity) -> Option<&Iri> {
        self.assigned
            .get(entity)
            .map(|&index| &self.entries[index].iri)
    }

    /// Every assignment, in allocation order.
    pub fn mapping(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn counters(&self) -> &KindCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> CanonicalMapping {
        CanonicalMapping {
            base: self.base.clone(),
            entries: self.entries.clone(),
        }
    }
}

impl IriConversionStrategy for TinyIriCanonicalizer {
    fn converted_iri(&mut self, entity: &Entity) -> Iri {
        self.convert(entity)
    }
}
