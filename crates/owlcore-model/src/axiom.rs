//! Annotated axioms.
//!
//! Every axiom kind is a plain immutable struct that embeds its
//! [`AnnotationSet`]; [`Axiom`] is the closed union over the kinds.
//!
//! The value contract each kind satisfies:
//!
//! - **Equality** is structural: same kind, same operands, same annotations.
//!   It is derived, so it is an equivalence relation consistent with `Hash`.
//! - **Same-kind ordering** (`compare_same_kind`) is a fixed lexicographic
//!   sequence of operand comparisons. `Ord` extends it with the annotation
//!   set as a final tie-break so that `Ord` agrees with `Eq`.
//! - **Cross-kind ordering** is decided by [`AxiomKind`] alone.
//! - **Derived variants** (annotations stripped, merged, normalized) are
//!   always rebuilt through a [`DataFactory`]; nothing here mutates a value.

use crate::annotation::{Annotation, AnnotationSet};
use crate::class_expression::{ClassExpression, Individual};
use crate::entity::{Entity, ObjectProperty};
use crate::factory::DataFactory;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// The fixed enumeration of axiom kinds, in canonical cross-kind order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxiomKind {
    Declaration,
    SubClassOf,
    EquivalentClasses,
    ClassAssertion,
    ObjectPropertyAssertion,
}

impl AxiomKind {
    pub const ALL: [AxiomKind; 5] = [
        AxiomKind::Declaration,
        AxiomKind::SubClassOf,
        AxiomKind::EquivalentClasses,
        AxiomKind::ClassAssertion,
        AxiomKind::ObjectPropertyAssertion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AxiomKind::Declaration => "Declaration",
            AxiomKind::SubClassOf => "SubClassOf",
            AxiomKind::EquivalentClasses => "EquivalentClasses",
            AxiomKind::ClassAssertion => "ClassAssertion",
            AxiomKind::ObjectPropertyAssertion => "ObjectPropertyAssertion",
        }
    }

    /// Declarations carry no logical content; every other kind does.
    pub fn is_logical(self) -> bool {
        !matches!(self, AxiomKind::Declaration)
    }
}

impl fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared scaffolding for every kind: annotation access and an `Ord` that
/// is `compare_same_kind` followed by the annotation set.
macro_rules! annotated_axiom {
    ($name:ident, $kind:ident) => {
        impl $name {
            pub const KIND: AxiomKind = AxiomKind::$kind;

            pub fn annotations(&self) -> &AnnotationSet {
                &self.annotations
            }

            pub fn is_annotated(&self) -> bool {
                !self.annotations.is_empty()
            }

            /// Equal operands, annotations ignored.
            pub fn equals_ignore_annotations(&self, other: &Self) -> bool {
                self.compare_same_kind(other) == Ordering::Equal
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.compare_same_kind(other)
                    .then_with(|| self.annotations.cmp(&other.annotations))
            }
        }

        impl From<$name> for Axiom {
            fn from(value: $name) -> Self {
                Axiom::$kind(value)
            }
        }
    };
}

// ============================================================================
// Declaration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    entity: Entity,
    #[serde(default, skip_serializing_if = "AnnotationSet::is_empty")]
    annotations: AnnotationSet,
}

impl Declaration {
    pub(crate) fn new(entity: Entity, annotations: AnnotationSet) -> Self {
        Self {
            entity,
            annotations,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn compare_same_kind(&self, other: &Self) -> Ordering {
        self.entity.cmp(&other.entity)
    }
}

annotated_axiom!(Declaration, Declaration);

// ============================================================================
// SubClassOf
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubClassOf {
    sub_class: ClassExpression,
    super_class: ClassExpression,
    #[serde(default, skip_serializing_if = "AnnotationSet::is_empty")]
    annotations: AnnotationSet,
}

impl SubClassOf {
    pub(crate) fn new(
        sub_class: ClassExpression,
        super_class: ClassExpression,
        annotations: AnnotationSet,
    ) -> Self {
        Self {
            sub_class,
            super_class,
            annotations,
        }
    }

    pub fn sub_class(&self) -> &ClassExpression {
        &self.sub_class
    }

    pub fn super_class(&self) -> &ClassExpression {
        &self.super_class
    }

    /// Sub class first, then super class.
    pub fn compare_same_kind(&self, other: &Self) -> Ordering {
        self.sub_class
            .cmp(&other.sub_class)
            .then_with(|| self.super_class.cmp(&other.super_class))
    }
}

annotated_axiom!(SubClassOf, SubClassOf);

// ============================================================================
// EquivalentClasses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquivalentClasses {
    class_expressions: BTreeSet<ClassExpression>,
    #[serde(default, skip_serializing_if = "AnnotationSet::is_empty")]
    annotations: AnnotationSet,
}

impl EquivalentClasses {
    pub(crate) fn new(
        class_expressions: BTreeSet<ClassExpression>,
        annotations: AnnotationSet,
    ) -> Self {
        Self {
            class_expressions,
            annotations,
        }
    }

    pub fn class_expressions(&self) -> &BTreeSet<ClassExpression> {
        &self.class_expressions
    }

    pub fn compare_same_kind(&self, other: &Self) -> Ordering {
        self.class_expressions.cmp(&other.class_expressions)
    }

    /// `SubClassOf(x, y)` for every ordered pair of distinct operands.
    pub fn as_pairwise_sub_class_of(&self, factory: &DataFactory) -> Vec<SubClassOf> {
        let mut out = Vec::new();
        for sub in &self.class_expressions {
            for sup in &self.class_expressions {
                if sub != sup {
                    out.push(factory.sub_class_of(
                        sub.clone(),
                        sup.clone(),
                        self.annotations.clone(),
                    ));
                }
            }
        }
        out
    }
}

annotated_axiom!(EquivalentClasses, EquivalentClasses);

// ============================================================================
// ClassAssertion
// ============================================================================

/// "`individual` is a member of `class_expression`".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassAssertion {
    individual: Individual,
    class_expression: ClassExpression,
    #[serde(default, skip_serializing_if = "AnnotationSet::is_empty")]
    annotations: AnnotationSet,
}

impl ClassAssertion {
    pub(crate) fn new(
        individual: Individual,
        class_expression: ClassExpression,
        annotations: AnnotationSet,
    ) -> Self {
        Self {
            individual,
            class_expression,
            annotations,
        }
    }

    pub fn individual(&self) -> &Individual {
        &self.individual
    }

    pub fn class_expression(&self) -> &ClassExpression {
        &self.class_expression
    }

    /// Individual first, then class expression.
    ///
    /// Only meaningful between two class assertions; the signature makes a
    /// cross-kind call unrepresentable.
    pub fn compare_same_kind(&self, other: &Self) -> Ordering {
        self.individual
            .cmp(&other.individual)
            .then_with(|| self.class_expression.cmp(&other.class_expression))
    }

    pub fn without_annotations(&self, factory: &DataFactory) -> ClassAssertion {
        if !self.is_annotated() {
            return self.clone();
        }
        factory.class_assertion(
            self.individual.clone(),
            self.class_expression.clone(),
            AnnotationSet::new(),
        )
    }

    pub fn with_annotations<I>(&self, factory: &DataFactory, additional: I) -> ClassAssertion
    where
        I: IntoIterator<Item = Annotation>,
    {
        factory.class_assertion(
            self.individual.clone(),
            self.class_expression.clone(),
            self.annotations.union(additional),
        )
    }

    /// `a : C` rewritten as `{a} ⊑ C`.
    pub fn as_sub_class_of(&self, factory: &DataFactory) -> SubClassOf {
        factory.sub_class_of(
            factory.object_one_of([self.individual.clone()]),
            self.class_expression.clone(),
            self.annotations.clone(),
        )
    }
}

annotated_axiom!(ClassAssertion, ClassAssertion);

// ============================================================================
// ObjectPropertyAssertion
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectPropertyAssertion {
    subject: Individual,
    property: ObjectProperty,
    object: Individual,
    #[serde(default, skip_serializing_if = "AnnotationSet::is_empty")]
    annotations: AnnotationSet,
}

impl ObjectPropertyAssertion {
    pub(crate) fn new(
        subject: Individual,
        property: ObjectProperty,
        object: Individual,
        annotations: AnnotationSet,
    ) -> Self {
        Self {
            subject,
            property,
            object,
            annotations,
        }
    }

    pub fn subject(&self) -> &Individual {
        &self.subject
    }

    pub fn property(&self) -> &ObjectProperty {
        &self.property
    }

    pub fn object(&self) -> &Individual {
        &self.object
    }

    /// Subject, property, object.
    pub fn compare_same_kind(&self, other: &Self) -> Ordering {
        self.subject
            .cmp(&other.subject)
            .then_with(|| self.property.cmp(&other.property))
            .then_with(|| self.object.cmp(&other.object))
    }

    /// `a R b` rewritten as `{a} ⊑ ∃R.{b}`.
    pub fn as_sub_class_of(&self, factory: &DataFactory) -> SubClassOf {
        factory.sub_class_of(
            factory.object_one_of([self.subject.clone()]),
            factory.object_some_values_from(
                self.property.clone(),
                factory.object_one_of([self.object.clone()]),
            ),
            self.annotations.clone(),
        )
    }
}

annotated_axiom!(ObjectPropertyAssertion, ObjectPropertyAssertion);

// ============================================================================
// The closed union
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Axiom {
    Declaration(Declaration),
    SubClassOf(SubClassOf),
    EquivalentClasses(EquivalentClasses),
    ClassAssertion(ClassAssertion),
    ObjectPropertyAssertion(ObjectPropertyAssertion),
}

impl Axiom {
    pub fn kind(&self) -> AxiomKind {
        match self {
            Axiom::Declaration(_) => AxiomKind::Declaration,
            Axiom::SubClassOf(_) => AxiomKind::SubClassOf,
            Axiom::EquivalentClasses(_) => AxiomKind::EquivalentClasses,
            Axiom::ClassAssertion(_) => AxiomKind::ClassAssertion,
            Axiom::ObjectPropertyAssertion(_) => AxiomKind::ObjectPropertyAssertion,
        }
    }

    pub fn annotations(&self) -> &AnnotationSet {
        match self {
            Axiom::Declaration(ax) => ax.annotations(),
            Axiom::SubClassOf(ax) => ax.annotations(),
            Axiom::EquivalentClasses(ax) => ax.annotations(),
            Axiom::ClassAssertion(ax) => ax.annotations(),
            Axiom::ObjectPropertyAssertion(ax) => ax.annotations(),
        }
    }

    pub fn is_annotated(&self) -> bool {
        !self.annotations().is_empty()
    }

    pub fn is_logical(&self) -> bool {
        self.kind().is_logical()
    }

    /// Same kind and operands; annotations ignored.
    pub fn equals_ignore_annotations(&self, other: &Axiom) -> bool {
        match (self, other) {
            (Axiom::Declaration(a), Axiom::Declaration(b)) => a.equals_ignore_annotations(b),
            (Axiom::SubClassOf(a), Axiom::SubClassOf(b)) => a.equals_ignore_annotations(b),
            (Axiom::EquivalentClasses(a), Axiom::EquivalentClasses(b)) => {
                a.equals_ignore_annotations(b)
            }
            (Axiom::ClassAssertion(a), Axiom::ClassAssertion(b)) => a.equals_ignore_annotations(b),
            (Axiom::ObjectPropertyAssertion(a), Axiom::ObjectPropertyAssertion(b)) => {
                a.equals_ignore_annotations(b)
            }
            _ => false,
        }
    }

    /// The receiver itself when unannotated, otherwise a factory-built copy
    /// with an empty annotation set.
    pub fn without_annotations(&self, factory: &DataFactory) -> Axiom {
        if !self.is_annotated() {
            return self.clone();
        }
        self.rebuild(factory, AnnotationSet::new())
    }

    /// A factory-built copy whose annotations are the union of the
    /// receiver's and `additional`.
    pub fn with_annotations<I>(&self, factory: &DataFactory, additional: I) -> Axiom
    where
        I: IntoIterator<Item = Annotation>,
    {
        self.rebuild(factory, self.annotations().union(additional))
    }

    /// Equivalent statements using only `SubClassOf`.
    ///
    /// `None` for kinds with no such rewrite (declarations).
    pub fn normalize(&self, factory: &DataFactory) -> Option<Vec<Axiom>> {
        match self {
            Axiom::Declaration(_) => None,
            Axiom::SubClassOf(_) => Some(vec![self.clone()]),
            Axiom::EquivalentClasses(ax) => Some(
                ax.as_pairwise_sub_class_of(factory)
                    .into_iter()
                    .map(Axiom::from)
                    .collect(),
            ),
            Axiom::ClassAssertion(ax) => Some(vec![ax.as_sub_class_of(factory).into()]),
            Axiom::ObjectPropertyAssertion(ax) => Some(vec![ax.as_sub_class_of(factory).into()]),
        }
    }

    fn rebuild(&self, factory: &DataFactory, annotations: AnnotationSet) -> Axiom {
        match self {
            Axiom::Declaration(ax) => factory.declaration(ax.entity.clone(), annotations).into(),
            Axiom::SubClassOf(ax) => factory
                .sub_class_of(ax.sub_class.clone(), ax.super_class.clone(), annotations)
                .into(),
            Axiom::EquivalentClasses(ax) => factory
                .equivalent_classes(ax.class_expressions.iter().cloned(), annotations)
                .into(),
            Axiom::ClassAssertion(ax) => factory
                .class_assertion(ax.individual.clone(), ax.class_expression.clone(), annotations)
                .into(),
            Axiom::ObjectPropertyAssertion(ax) => factory
                .object_property_assertion(
                    ax.subject.clone(),
                    ax.property.clone(),
                    ax.object.clone(),
                    annotations,
                )
                .into(),
        }
    }
}

impl PartialOrd for Axiom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Axiom {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Axiom::Declaration(a), Axiom::Declaration(b)) => a.cmp(b),
            (Axiom::SubClassOf(a), Axiom::SubClassOf(b)) => a.cmp(b),
            (Axiom::EquivalentClasses(a), Axiom::EquivalentClasses(b)) => a.cmp(b),
            (Axiom::ClassAssertion(a), Axiom::ClassAssertion(b)) => a.cmp(b),
            (Axiom::ObjectPropertyAssertion(a), Axiom::ObjectPropertyAssertion(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{AnnotationValue, Literal};
    use crate::vocab;

    fn comment(df: &DataFactory, text: &str) -> Annotation {
        df.annotation(
            df.annotation_property(vocab::RDFS_COMMENT),
            AnnotationValue::Literal(Literal::Simple {
                lexical: text.to_string(),
            }),
        )
    }

    fn member(df: &DataFactory, ind: &str, class: &str) -> ClassAssertion {
        df.class_assertion(
            df.named_individual(&format!("http://x#{ind}")),
            df.class(&format!("http://x#{class}")),
            AnnotationSet::new(),
        )
    }

    #[test]
    fn independently_built_assertions_are_equal() {
        let df1 = DataFactory::new();
        let df2 = DataFactory::new();
        let a = member(&df1, "a", "C");
        let b = member(&df2, "a", "C");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.compare_same_kind(&b), Ordering::Equal);
    }

    #[test]
    fn same_kind_order_is_individual_then_class() {
        let df = DataFactory::new();
        let a_z = member(&df, "a", "Z");
        let b_a = member(&df, "b", "A");
        let a_a = member(&df, "a", "A");
        assert_eq!(a_z.compare_same_kind(&b_a), Ordering::Less);
        assert_eq!(a_a.compare_same_kind(&a_z), Ordering::Less);
    }

    #[test]
    fn annotations_break_ties_but_not_operand_equality() {
        let df = DataFactory::new();
        let plain = member(&df, "a", "C");
        let noted = plain.with_annotations(&df, [comment(&df, "n")]);
        assert_ne!(plain, noted);
        assert_ne!(plain.cmp(&noted), Ordering::Equal);
        assert!(plain.equals_ignore_annotations(&noted));
    }

    #[test]
    fn without_annotations_returns_unannotated_receiver_unchanged() {
        let df = DataFactory::new();
        let plain = member(&df, "a", "C");
        assert_eq!(plain.without_annotations(&df), plain);

        let noted = plain.with_annotations(&df, [comment(&df, "x"), comment(&df, "y")]);
        let stripped = noted.without_annotations(&df);
        assert!(!stripped.is_annotated());
        assert!(stripped.equals_ignore_annotations(&noted));
        assert_eq!(stripped, plain);
    }

    #[test]
    fn with_annotations_is_a_set_union() {
        let df = DataFactory::new();
        let noted = member(&df, "a", "C").with_annotations(&df, [comment(&df, "x")]);
        let merged = noted.with_annotations(&df, [comment(&df, "x"), comment(&df, "y")]);
        assert_eq!(merged.annotations().len(), 2);
        assert_eq!(noted.annotations().len(), 1);
    }

    #[test]
    fn class_assertion_normalizes_to_singleton_subclass() {
        let df = DataFactory::new();
        let ax = member(&df, "a", "C");
        let sub = ax.as_sub_class_of(&df);
        assert_eq!(
            sub.sub_class(),
            &df.object_one_of([df.named_individual("http://x#a")])
        );
        assert_eq!(sub.super_class(), ax.class_expression());
    }

    #[test]
    fn equivalent_classes_normalize_pairwise() {
        let df = DataFactory::new();
        let eq: Axiom = df
            .equivalent_classes(
                [
                    ClassExpression::from(df.class("http://x#A")),
                    ClassExpression::from(df.class("http://x#B")),
                ],
                AnnotationSet::new(),
            )
            .into();
        let normalized = eq.normalize(&df).unwrap();
        assert_eq!(normalized.len(), 2);
        assert!(normalized.iter().all(|ax| ax.kind() == AxiomKind::SubClassOf));
    }

    #[test]
    fn declarations_do_not_normalize() {
        let df = DataFactory::new();
        let decl: Axiom = df
            .declaration(df.class("http://x#A").into(), AnnotationSet::new())
            .into();
        assert!(decl.normalize(&df).is_none());
        assert!(!decl.is_logical());
    }

    #[test]
    fn cross_kind_order_follows_kind_enumeration() {
        let df = DataFactory::new();
        let decl: Axiom = df
            .declaration(df.class("http://x#Z").into(), AnnotationSet::new())
            .into();
        let assertion: Axiom = member(&df, "a", "A").into();
        assert!(decl < assertion);
        assert!(AxiomKind::Declaration < AxiomKind::ClassAssertion);
    }

    #[test]
    fn axiom_round_trips_through_json() {
        let df = DataFactory::new();
        let ax: Axiom = member(&df, "a", "C")
            .with_annotations(&df, [comment(&df, "x")])
            .into();
        let json = serde_json::to_string(&ax).unwrap();
        let back: Axiom = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ax);
    }
}
