//! Named ontology entities.
//!
//! Each entity kind has its own newtype over [`Iri`] so operand positions are
//! typed (a class assertion cannot take an object property by accident).
//! [`Entity`] is the closed union over all of them.

use crate::iri::Iri;
use crate::vocab;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
    Datatype,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Class,
        EntityKind::ObjectProperty,
        EntityKind::DataProperty,
        EntityKind::AnnotationProperty,
        EntityKind::NamedIndividual,
        EntityKind::Datatype,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Class => "Class",
            EntityKind::ObjectProperty => "ObjectProperty",
            EntityKind::DataProperty => "DataProperty",
            EntityKind::AnnotationProperty => "AnnotationProperty",
            EntityKind::NamedIndividual => "NamedIndividual",
            EntityKind::Datatype => "Datatype",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! named_entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Iri);

        impl $name {
            pub fn new(iri: Iri) -> Self {
                Self(iri)
            }

            pub fn iri(&self) -> &Iri {
                &self.0
            }

            pub fn is_built_in(&self) -> bool {
                vocab::is_built_in(EntityKind::$name, &self.0)
            }
        }

        impl From<$name> for Entity {
            fn from(value: $name) -> Self {
                Entity::$name(value)
            }
        }
    };
}

named_entity!(Class);
named_entity!(ObjectProperty);
named_entity!(DataProperty);
named_entity!(AnnotationProperty);
named_entity!(
    /// A named individual. Anonymous individuals are not entities; see
    /// [`crate::Individual`].
    NamedIndividual
);
named_entity!(Datatype);

/// Any named entity: its kind plus its IRI.
///
/// Equality, hashing and ordering are by `(kind, iri)`, so the same IRI used
/// as a class and as an individual yields two distinct entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "iri", rename_all = "snake_case")]
pub enum Entity {
    Class(Class),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    AnnotationProperty(AnnotationProperty),
    NamedIndividual(NamedIndividual),
    Datatype(Datatype),
}

impl Entity {
    pub fn new(kind: EntityKind, iri: Iri) -> Self {
        match kind {
            EntityKind::Class => Entity::Class(Class(iri)),
            EntityKind::ObjectProperty => Entity::ObjectProperty(ObjectProperty(iri)),
            EntityKind::DataProperty => Entity::DataProperty(DataProperty(iri)),
            EntityKind::AnnotationProperty => Entity::AnnotationProperty(AnnotationProperty(iri)),
            EntityKind::NamedIndividual => Entity::NamedIndividual(NamedIndividual(iri)),
            EntityKind::Datatype => Entity::Datatype(Datatype(iri)),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Class(_) => EntityKind::Class,
            Entity::ObjectProperty(_) => EntityKind::ObjectProperty,
            Entity::DataProperty(_) => EntityKind::DataProperty,
            Entity::AnnotationProperty(_) => EntityKind::AnnotationProperty,
            Entity::NamedIndividual(_) => EntityKind::NamedIndividual,
            Entity::Datatype(_) => EntityKind::Datatype,
        }
    }

    pub fn iri(&self) -> &Iri {
        match self {
            Entity::Class(e) => e.iri(),
            Entity::ObjectProperty(e) => e.iri(),
            Entity::DataProperty(e) => e.iri(),
            Entity::AnnotationProperty(e) => e.iri(),
            Entity::NamedIndividual(e) => e.iri(),
            Entity::Datatype(e) => e.iri(),
        }
    }

    pub fn is_built_in(&self) -> bool {
        vocab::is_built_in(self.kind(), self.iri())
    }

    /// The same kind of entity, named by a different IRI.
    pub fn with_iri(&self, iri: Iri) -> Entity {
        Entity::new(self.kind(), iri)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.iri())
    }
}
