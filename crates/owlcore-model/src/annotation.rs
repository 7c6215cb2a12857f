//! Annotations and annotation sets.

use crate::class_expression::AnonymousIndividual;
use crate::entity::{AnnotationProperty, Datatype};
use crate::iri::Iri;
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Literal {
    Simple { lexical: String },
    Language { lexical: String, lang: String },
    Typed { lexical: String, datatype: Datatype },
}

impl Literal {
    pub fn lexical(&self) -> &str {
        match self {
            Literal::Simple { lexical }
            | Literal::Language { lexical, .. }
            | Literal::Typed { lexical, .. } => lexical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "tag", content = "value", rename_all = "snake_case")]
pub enum AnnotationValue {
    Iri(Iri),
    Literal(Literal),
    Anonymous(AnonymousIndividual),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    pub property: AnnotationProperty,
    pub value: AnnotationValue,
}

/// An immutable set of annotations.
///
/// Insertion order is irrelevant and duplicates collapse; merging two sets is
/// set union.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationSet(BTreeSet<Annotation>);

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, annotation: &Annotation) -> bool {
        self.0.contains(annotation)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Annotation> {
        self.0.iter()
    }

    /// A new set holding every annotation of `self` and of `additional`.
    pub fn union<I>(&self, additional: I) -> AnnotationSet
    where
        I: IntoIterator<Item = Annotation>,
    {
        let mut merged = self.0.clone();
        merged.extend(additional);
        AnnotationSet(merged)
    }
}

impl FromIterator<Annotation> for AnnotationSet {
    fn from_iter<T: IntoIterator<Item = Annotation>>(iter: T) -> Self {
        AnnotationSet(iter.into_iter().collect())
    }
}

impl IntoIterator for AnnotationSet {
    type Item = Annotation;
    type IntoIter = btree_set::IntoIter<Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnnotationSet {
    type Item = &'a Annotation;
    type IntoIter = btree_set::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: &str) -> Annotation {
        Annotation {
            property: AnnotationProperty::new(Iri::new(crate::vocab::RDFS_LABEL)),
            value: AnnotationValue::Literal(Literal::Simple {
                lexical: text.to_string(),
            }),
        }
    }

    #[test]
    fn order_does_not_matter() {
        let a: AnnotationSet = [label("x"), label("y")].into_iter().collect();
        let b: AnnotationSet = [label("y"), label("x")].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn union_collapses_duplicates() {
        let a: AnnotationSet = [label("x"), label("y")].into_iter().collect();
        let merged = a.union([label("y"), label("z")]);
        assert_eq!(merged.len(), 3);
        assert!(merged.contains(&label("z")));
        // receiver untouched
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn literal_lexical_form() {
        let lit = Literal::Language {
            lexical: "chat".to_string(),
            lang: "fr".to_string(),
        };
        assert_eq!(lit.lexical(), "chat");
    }
}
