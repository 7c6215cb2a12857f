//! Rewrite axioms with every entity replaced by its converted IRI.
//!
//! Entities are converted in operand order (and, inside sets, in the sets'
//! canonical order), so renaming the same axiom sequence with a fresh
//! canonicalizer always produces the same output.

use crate::IriConversionStrategy;
use owlcore_model::{
    Annotation, AnnotationSet, Axiom, AxiomVisitor, Class, ClassAssertion, ClassExpression,
    DataFactory, Declaration, Entity, EquivalentClasses, Individual, NamedIndividual,
    ObjectProperty, ObjectPropertyAssertion, SubClassOf,
};

pub struct AxiomRenamer<'a, S: ?Sized> {
    factory: &'a DataFactory,
    strategy: &'a mut S,
}

impl<'a, S> AxiomRenamer<'a, S>
where
    S: IriConversionStrategy + ?Sized,
{
    pub fn new(factory: &'a DataFactory, strategy: &'a mut S) -> Self {
        Self { factory, strategy }
    }

    pub fn rename(&mut self, axiom: &Axiom) -> Axiom {
        axiom.accept(self)
    }

    fn entity(&mut self, entity: &Entity) -> Entity {
        let iri = self.strategy.converted_iri(entity);
        entity.with_iri(self.factory.iri(iri.as_str()))
    }

    fn class(&mut self, class: &Class) -> Class {
        let iri = self.strategy.converted_iri(&class.clone().into());
        self.factory.class(iri.as_str())
    }

    fn object_property(&mut self, property: &ObjectProperty) -> ObjectProperty {
        let iri = self.strategy.converted_iri(&property.clone().into());
        self.factory.object_property(iri.as_str())
    }

    fn named_individual(&mut self, individual: &NamedIndividual) -> NamedIndividual {
        let iri = self.strategy.converted_iri(&individual.clone().into());
        self.factory.named_individual(iri.as_str())
    }

    fn individual(&mut self, individual: &Individual) -> Individual {
        match individual {
            Individual::Named(named) => Individual::Named(self.named_individual(named)),
            Individual::Anonymous(_) => individual.clone(),
        }
    }

    fn class_expression(&mut self, ce: &ClassExpression) -> ClassExpression {
        match ce {
            ClassExpression::Class { class } => self.class(class).into(),
            ClassExpression::ObjectIntersectionOf { operands } => {
                let operands: Vec<_> = operands
                    .iter()
                    .map(|op| self.class_expression(op))
                    .collect();
                self.factory.object_intersection_of(operands)
            }
            ClassExpression::ObjectUnionOf { operands } => {
                let operands: Vec<_> = operands
                    .iter()
                    .map(|op| self.class_expression(op))
                    .collect();
                self.factory.object_union_of(operands)
            }
            ClassExpression::ObjectComplementOf { operand } => {
                let operand = self.class_expression(operand);
                self.factory.object_complement_of(operand)
            }
            ClassExpression::ObjectOneOf { individuals } => {
                let individuals: Vec<_> =
                    individuals.iter().map(|i| self.individual(i)).collect();
                self.factory.object_one_of(individuals)
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                let property = self.object_property(property);
                let filler = self.class_expression(filler);
                self.factory.object_some_values_from(property, filler)
            }
            ClassExpression::ObjectAllValuesFrom { property, filler } => {
                let property = self.object_property(property);
                let filler = self.class_expression(filler);
                self.factory.object_all_values_from(property, filler)
            }
        }
    }

    /// Annotation properties are renamed; annotation values are left alone.
    fn annotations(&mut self, annotations: &AnnotationSet) -> AnnotationSet {
        annotations
            .iter()
            .map(|annotation| {
                let property = self
                    .strategy
                    .converted_iri(&annotation.property.clone().into());
                Annotation {
                    property: self.factory.annotation_property(property.as_str()),
                    value: annotation.value.clone(),
                }
            })
            .collect()
    }
}

impl<'a, S> AxiomVisitor for AxiomRenamer<'a, S>
where
    S: IriConversionStrategy + ?Sized,
{
    type Output = Axiom;

    fn visit_declaration(&mut self, axiom: &Declaration) -> Axiom {
        let entity = self.entity(axiom.entity());
        let annotations = self.annotations(axiom.annotations());
        self.factory.declaration(entity, annotations).into()
    }

    fn visit_sub_class_of(&mut self, axiom: &SubClassOf) -> Axiom {
        let sub = self.class_expression(axiom.sub_class());
        let sup = self.class_expression(axiom.super_class());
        let annotations = self.annotations(axiom.annotations());
        self.factory.sub_class_of(sub, sup, annotations).into()
    }

    fn visit_equivalent_classes(&mut self, axiom: &EquivalentClasses) -> Axiom {
        let operands: Vec<_> = axiom
            .class_expressions()
            .iter()
            .map(|ce| self.class_expression(ce))
            .collect();
        let annotations = self.annotations(axiom.annotations());
        self.factory.equivalent_classes(operands, annotations).into()
    }

    fn visit_class_assertion(&mut self, axiom: &ClassAssertion) -> Axiom {
        let individual = self.individual(axiom.individual());
        let ce = self.class_expression(axiom.class_expression());
        let annotations = self.annotations(axiom.annotations());
        self.factory.class_assertion(individual, ce, annotations).into()
    }

    fn visit_object_property_assertion(&mut self, axiom: &ObjectPropertyAssertion) -> Axiom {
        let subject = self.individual(axiom.subject());
        let property = self.object_property(axiom.property());
        let object = self.individual(axiom.object());
        let annotations = self.annotations(axiom.annotations());
        self.factory
            .object_property_assertion(subject, property, object, annotations)
            .into()
    }
}

/// Rename every axiom, in order, through one strategy.
pub fn rename_axioms<'x, I, S>(factory: &DataFactory, strategy: &mut S, axioms: I) -> Vec<Axiom>
where
    I: IntoIterator<Item = &'x Axiom>,
    S: IriConversionStrategy + ?Sized,
{
    let mut renamer = AxiomRenamer::new(factory, strategy);
    axioms.into_iter().map(|ax| renamer.rename(ax)).collect()
}
