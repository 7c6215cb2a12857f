//! Construction factory.
//!
//! All entities, class expressions and axioms are built here. IRIs are
//! interned, so every value built through one factory shares IRI storage
//! with every equal value built through it. Equality never depends on
//! sharing: values from different factories still compare structurally.

use crate::annotation::{Annotation, AnnotationSet, AnnotationValue};
use crate::axiom::{
    ClassAssertion, Declaration, EquivalentClasses, ObjectPropertyAssertion, SubClassOf,
};
use crate::class_expression::{AnonymousIndividual, ClassExpression, Individual};
use crate::entity::{
    AnnotationProperty, Class, DataProperty, Datatype, Entity, EntityKind, NamedIndividual,
    ObjectProperty,
};
use crate::iri::Iri;
use crate::vocab;
use dashmap::DashMap;
use std::sync::Arc;

/// IRI interner: maps IRI text to one shared [`Iri`].
#[derive(Debug, Default)]
struct IriInterner {
    iris: DashMap<Arc<str>, Iri>,
}

impl IriInterner {
    fn intern(&self, s: &str) -> Iri {
        if let Some(iri) = self.iris.get(s) {
            return iri.clone();
        }

        let iri = Iri::from_arc(Arc::from(s));
        let entry = self.iris.entry(Arc::clone(iri.arc())).or_insert_with(|| {
            tracing::trace!(iri = %iri, "interned iri");
            iri.clone()
        });
        entry.value().clone()
    }

    fn len(&self) -> usize {
        self.iris.len()
    }
}

#[derive(Debug, Default)]
pub struct DataFactory {
    interner: IriInterner,
}

impl DataFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct IRIs interned so far.
    pub fn interned_iris(&self) -> usize {
        self.interner.len()
    }

    // ------------------------------------------------------------------------
    // IRIs and entities
    // ------------------------------------------------------------------------

    pub fn iri(&self, iri: &str) -> Iri {
        self.interner.intern(iri)
    }

    pub fn iri_from_parts(&self, namespace: &str, fragment: &str) -> Iri {
        self.interner.intern(&format!("{namespace}{fragment}"))
    }

    pub fn entity(&self, kind: EntityKind, iri: &str) -> Entity {
        Entity::new(kind, self.iri(iri))
    }

    pub fn class(&self, iri: &str) -> Class {
        Class::new(self.iri(iri))
    }

    pub fn owl_thing(&self) -> Class {
        self.class(vocab::OWL_THING)
    }

    pub fn owl_nothing(&self) -> Class {
        self.class(vocab::OWL_NOTHING)
    }

    pub fn object_property(&self, iri: &str) -> ObjectProperty {
        ObjectProperty::new(self.iri(iri))
    }

    pub fn data_property(&self, iri: &str) -> DataProperty {
        DataProperty::new(self.iri(iri))
    }

    pub fn annotation_property(&self, iri: &str) -> AnnotationProperty {
        AnnotationProperty::new(self.iri(iri))
    }

    pub fn named_individual(&self, iri: &str) -> NamedIndividual {
        NamedIndividual::new(self.iri(iri))
    }

    pub fn datatype(&self, iri: &str) -> Datatype {
        Datatype::new(self.iri(iri))
    }

    pub fn anonymous_individual(&self, node_id: &str) -> AnonymousIndividual {
        AnonymousIndividual::new(node_id)
    }

    // ------------------------------------------------------------------------
    // Class expressions
    // ------------------------------------------------------------------------

    /// `{a, b, ...}`; a single individual gives the singleton class.
    pub fn object_one_of<I, T>(&self, individuals: I) -> ClassExpression
    where
        I: IntoIterator<Item = T>,
        T: Into<Individual>,
    {
        ClassExpression::ObjectOneOf {
            individuals: individuals.into_iter().map(Into::into).collect(),
        }
    }

    pub fn object_intersection_of<I>(&self, operands: I) -> ClassExpression
    where
        I: IntoIterator<Item = ClassExpression>,
    {
        ClassExpression::ObjectIntersectionOf {
            operands: operands.into_iter().collect(),
        }
    }

    pub fn object_union_of<I>(&self, operands: I) -> ClassExpression
    where
        I: IntoIterator<Item = ClassExpression>,
    {
        ClassExpression::ObjectUnionOf {
            operands: operands.into_iter().collect(),
        }
    }

    pub fn object_complement_of(&self, operand: impl Into<ClassExpression>) -> ClassExpression {
        ClassExpression::ObjectComplementOf {
            operand: Box::new(operand.into()),
        }
    }

    pub fn object_some_values_from(
        &self,
        property: ObjectProperty,
        filler: impl Into<ClassExpression>,
    ) -> ClassExpression {
        ClassExpression::ObjectSomeValuesFrom {
            property,
            filler: Box::new(filler.into()),
        }
    }

    pub fn object_all_values_from(
        &self,
        property: ObjectProperty,
        filler: impl Into<ClassExpression>,
    ) -> ClassExpression {
        ClassExpression::ObjectAllValuesFrom {
            property,
            filler: Box::new(filler.into()),
        }
    }

    // ------------------------------------------------------------------------
    // Annotations
    // ------------------------------------------------------------------------

    pub fn annotation(&self, property: AnnotationProperty, value: AnnotationValue) -> Annotation {
        Annotation { property, value }
    }

    pub fn annotations<I>(&self, annotations: I) -> AnnotationSet
    where
        I: IntoIterator<Item = Annotation>,
    {
        annotations.into_iter().collect()
    }

    // ------------------------------------------------------------------------
    // Axioms
    // ------------------------------------------------------------------------

    pub fn declaration(&self, entity: Entity, annotations: AnnotationSet) -> Declaration {
        Declaration::new(entity, annotations)
    }

    pub fn sub_class_of(
        &self,
        sub_class: impl Into<ClassExpression>,
        super_class: impl Into<ClassExpression>,
        annotations: AnnotationSet,
    ) -> SubClassOf {
        SubClassOf::new(sub_class.into(), super_class.into(), annotations)
    }

    pub fn equivalent_classes<I>(
        &self,
        class_expressions: I,
        annotations: AnnotationSet,
    ) -> EquivalentClasses
    where
        I: IntoIterator<Item = ClassExpression>,
    {
        EquivalentClasses::new(class_expressions.into_iter().collect(), annotations)
    }

    pub fn class_assertion(
        &self,
        individual: impl Into<Individual>,
        class_expression: impl Into<ClassExpression>,
        annotations: AnnotationSet,
    ) -> ClassAssertion {
        ClassAssertion::new(individual.into(), class_expression.into(), annotations)
    }

    pub fn object_property_assertion(
        &self,
        subject: impl Into<Individual>,
        property: ObjectProperty,
        object: impl Into<Individual>,
        annotations: AnnotationSet,
    ) -> ObjectPropertyAssertion {
        ObjectPropertyAssertion::new(subject.into(), property, object.into(), annotations)
    }
}
