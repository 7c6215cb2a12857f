//! Individuals and class expressions.

use crate::entity::{Class, Entity, NamedIndividual, ObjectProperty};
use crate::vocab;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A blank-node individual, identified only by a node id local to its document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnonymousIndividual(String);

impl AnonymousIndividual {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self(node_id.into())
    }

    pub fn node_id(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "tag", content = "value", rename_all = "snake_case")]
pub enum Individual {
    Named(NamedIndividual),
    Anonymous(AnonymousIndividual),
}

impl Individual {
    pub fn as_named(&self) -> Option<&NamedIndividual> {
        match self {
            Individual::Named(named) => Some(named),
            Individual::Anonymous(_) => None,
        }
    }
}

impl From<NamedIndividual> for Individual {
    fn from(value: NamedIndividual) -> Self {
        Individual::Named(value)
    }
}

impl From<AnonymousIndividual> for Individual {
    fn from(value: AnonymousIndividual) -> Self {
        Individual::Anonymous(value)
    }
}

/// A structural description of a class.
///
/// N-ary operands are kept in ordered sets, so operand order and repetition
/// never affect equality, and the derived ordering is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum ClassExpression {
    Class {
        class: Class,
    },
    ObjectIntersectionOf {
        operands: BTreeSet<ClassExpression>,
    },
    ObjectUnionOf {
        operands: BTreeSet<ClassExpression>,
    },
    ObjectComplementOf {
        operand: Box<ClassExpression>,
    },
    /// Enumeration of individuals; `{a}` is the singleton class of `a`.
    ObjectOneOf {
        individuals: BTreeSet<Individual>,
    },
    ObjectSomeValuesFrom {
        property: ObjectProperty,
        filler: Box<ClassExpression>,
    },
    ObjectAllValuesFrom {
        property: ObjectProperty,
        filler: Box<ClassExpression>,
    },
}

impl ClassExpression {
    pub fn is_named(&self) -> bool {
        matches!(self, ClassExpression::Class { .. })
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            ClassExpression::Class { class } => Some(class),
            _ => None,
        }
    }

    pub fn is_owl_thing(&self) -> bool {
        self.as_class()
            .is_some_and(|c| c.iri().as_str() == vocab::OWL_THING)
    }

    pub fn is_owl_nothing(&self) -> bool {
        self.as_class()
            .is_some_and(|c| c.iri().as_str() == vocab::OWL_NOTHING)
    }

    /// Add every entity mentioned anywhere in this expression to `out`.
    pub fn collect_entities(&self, out: &mut BTreeSet<Entity>) {
        match self {
            ClassExpression::Class { class } => {
                out.insert(class.clone().into());
            }
            ClassExpression::ObjectIntersectionOf { operands }
            | ClassExpression::ObjectUnionOf { operands } => {
                for operand in operands {
                    operand.collect_entities(out);
                }
            }
            ClassExpression::ObjectComplementOf { operand } => operand.collect_entities(out),
            ClassExpression::ObjectOneOf { individuals } => {
                for individual in individuals {
                    if let Individual::Named(named) = individual {
                        out.insert(named.clone().into());
                    }
                }
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler }
            | ClassExpression::ObjectAllValuesFrom { property, filler } => {
                out.insert(property.clone().into());
                filler.collect_entities(out);
            }
        }
    }
}

impl From<Class> for ClassExpression {
    fn from(class: Class) -> Self {
        ClassExpression::Class { class }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iri::Iri;

    fn class(name: &str) -> ClassExpression {
        Class::new(Iri::new(format!("http://x#{name}"))).into()
    }

    #[test]
    fn intersection_ignores_operand_order() {
        let ab = ClassExpression::ObjectIntersectionOf {
            operands: [class("A"), class("B")].into_iter().collect(),
        };
        let ba = ClassExpression::ObjectIntersectionOf {
            operands: [class("B"), class("A"), class("B")].into_iter().collect(),
        };
        assert_eq!(ab, ba);
    }

    #[test]
    fn collects_nested_entities() {
        let p = ObjectProperty::new(Iri::new("http://x#p"));
        let a = NamedIndividual::new(Iri::new("http://x#a"));
        let expr = ClassExpression::ObjectSomeValuesFrom {
            property: p.clone(),
            filler: Box::new(ClassExpression::ObjectUnionOf {
                operands: [
                    class("A"),
                    ClassExpression::ObjectOneOf {
                        individuals: [Individual::Named(a.clone())].into_iter().collect(),
                    },
                ]
                .into_iter()
                .collect(),
            }),
        };

        let mut out = BTreeSet::new();
        expr.collect_entities(&mut out);
        assert_eq!(out.len(), 3);
        assert!(out.contains(&Entity::from(p)));
        assert!(out.contains(&Entity::from(a)));
    }

    #[test]
    fn recognizes_thing_and_nothing() {
        let thing: ClassExpression = Class::new(Iri::new(vocab::OWL_THING)).into();
        let nothing: ClassExpression = Class::new(Iri::new(vocab::OWL_NOTHING)).into();
        assert!(thing.is_owl_thing());
        assert!(!thing.is_owl_nothing());
        assert!(nothing.is_owl_nothing());
        assert!(!class("A").is_owl_thing());
    }
}
