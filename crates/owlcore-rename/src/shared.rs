//! A canonicalizer usable from several threads.
//!
//! [`TinyIriCanonicalizer::convert`] checks the memo table and then allocates;
//! the two steps must not interleave with another caller's or the mapping
//! stops being idempotent and injective. [`SharedCanonicalizer`] holds the
//! whole conversion under one lock.

use crate::config::CanonicalizerConfig;
use crate::tiny::{CanonicalMapping, TinyIriCanonicalizer};
use crate::IriConversionStrategy;
use owlcore_model::{Entity, Iri};
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct SharedCanonicalizer {
    inner: Mutex<TinyIriCanonicalizer>,
}

impl SharedCanonicalizer {
    pub fn new(canonicalizer: TinyIriCanonicalizer) -> Self {
        Self {
            inner: Mutex::new(canonicalizer),
        }
    }

    pub fn from_config(config: &CanonicalizerConfig) -> Self {
        Self::new(TinyIriCanonicalizer::from_config(config))
    }

    pub fn convert(&self, entity: &Entity) -> Iri {
        self.inner.lock().convert(entity)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn snapshot(&self) -> CanonicalMapping {
        self.inner.lock().snapshot()
    }

    pub fn into_inner(self) -> TinyIriCanonicalizer {
        self.inner.into_inner()
    }
}

impl IriConversionStrategy for SharedCanonicalizer {
    fn converted_iri(&mut self, entity: &Entity) -> Iri {
        self.inner.get_mut().convert(entity)
    }
}

impl IriConversionStrategy for &SharedCanonicalizer {
    fn converted_iri(&mut self, entity: &Entity) -> Iri {
        self.convert(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use owlcore_model::EntityKind;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn concurrent_conversion_stays_injective_and_idempotent() {
        let shared = Arc::new(SharedCanonicalizer::new(TinyIriCanonicalizer::with_base(
            "http://x#",
        )));
        let entities: Vec<Entity> = (0..50)
            .map(|i| Entity::new(EntityKind::Class, Iri::new(format!("http://a#C{i}"))))
            .collect();
        let entities = Arc::new(entities);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                let entities = Arc::clone(&entities);
                thread::spawn(move || {
                    entities
                        .iter()
                        .map(|e| (e.clone(), shared.convert(e)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<Vec<(Entity, Iri)>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        // every thread saw the same name for each entity
        for run in &results[1..] {
            assert_eq!(run, &results[0]);
        }
        let distinct: HashSet<_> = results[0].iter().map(|(_, iri)| iri.clone()).collect();
        assert_eq!(distinct.len(), 50);
        assert_eq!(shared.len(), 50);
    }

    #[test]
    fn matches_single_threaded_canonicalizer() {
        let entities = [
            Entity::new(EntityKind::Class, Iri::new("http://a#A")),
            Entity::new(EntityKind::NamedIndividual, Iri::new("http://a#a")),
            Entity::new(EntityKind::Class, Iri::new("http://a#B")),
        ];
        let shared = SharedCanonicalizer::new(TinyIriCanonicalizer::with_base("http://x#"));
        let mut plain = TinyIriCanonicalizer::with_base("http://x#");
        for e in &entities {
            assert_eq!(shared.convert(e), plain.convert(e));
        }
        assert_eq!(shared.snapshot(), plain.snapshot());
        assert_eq!(shared.into_inner().len(), 3);
    }
}
