//! Closed-set dispatch over axiom kinds.
//!
//! External code defines per-kind behaviour by implementing [`AxiomVisitor`]
//! and handing it to [`Axiom::accept`], which is a single exhaustive match:
//! adding a kind to [`Axiom`] is a compile error in every visitor until it is
//! handled. Side-effect-only visitors use `Output = ()`.

use crate::axiom::{
    Axiom, ClassAssertion, Declaration, EquivalentClasses, ObjectPropertyAssertion, SubClassOf,
};
use crate::class_expression::Individual;
use crate::entity::Entity;
use std::collections::BTreeSet;

pub trait AxiomVisitor {
    type Output;

    fn visit_declaration(&mut self, axiom: &Declaration) -> Self::Output;
    fn visit_sub_class_of(&mut self, axiom: &SubClassOf) -> Self::Output;
    fn visit_equivalent_classes(&mut self, axiom: &EquivalentClasses) -> Self::Output;
    fn visit_class_assertion(&mut self, axiom: &ClassAssertion) -> Self::Output;
    fn visit_object_property_assertion(
        &mut self,
        axiom: &ObjectPropertyAssertion,
    ) -> Self::Output;
}

impl Axiom {
    pub fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: AxiomVisitor + ?Sized,
    {
        match self {
            Axiom::Declaration(ax) => visitor.visit_declaration(ax),
            Axiom::SubClassOf(ax) => visitor.visit_sub_class_of(ax),
            Axiom::EquivalentClasses(ax) => visitor.visit_equivalent_classes(ax),
            Axiom::ClassAssertion(ax) => visitor.visit_class_assertion(ax),
            Axiom::ObjectPropertyAssertion(ax) => visitor.visit_object_property_assertion(ax),
        }
    }

    /// Every entity the axiom mentions, including those inside class
    /// expressions and annotation properties.
    pub fn signature(&self) -> BTreeSet<Entity> {
        let mut collector = SignatureCollector::default();
        self.accept(&mut collector);
        for annotation in self.annotations() {
            collector
                .entities
                .insert(annotation.property.clone().into());
        }
        collector.entities
    }
}

#[derive(Debug, Default)]
struct SignatureCollector {
    entities: BTreeSet<Entity>,
}

impl SignatureCollector {
    fn individual(&mut self, individual: &Individual) {
        if let Individual::Named(named) = individual {
            self.entities.insert(named.clone().into());
        }
    }
}

impl AxiomVisitor for SignatureCollector {
    type Output = ();

    fn visit_declaration(&mut self, axiom: &Declaration) {
        self.entities.insert(axiom.entity().clone());
    }

    fn visit_sub_class_of(&mut self, axiom: &SubClassOf) {
        axiom.sub_class().collect_entities(&mut self.entities);
        axiom.super_class().collect_entities(&mut self.entities);
    }

    fn visit_equivalent_classes(&mut self, axiom: &EquivalentClasses) {
        for ce in axiom.class_expressions() {
            ce.collect_entities(&mut self.entities);
        }
    }

    fn visit_class_assertion(&mut self, axiom: &ClassAssertion) {
        self.individual(axiom.individual());
        axiom.class_expression().collect_entities(&mut self.entities);
    }

    fn visit_object_property_assertion(&mut self, axiom: &ObjectPropertyAssertion) {
        self.individual(axiom.subject());
        self.entities.insert(axiom.property().clone().into());
        self.individual(axiom.object());
    }
}
