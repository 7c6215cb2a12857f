//! Owlcore ontology model.
//!
//! Immutable values describing an ontology:
//!
//! - [`Iri`]: `namespace + fragment` external identifiers
//! - [`Entity`] and its per-kind newtypes ([`Class`], [`NamedIndividual`], ...)
//! - [`ClassExpression`] / [`Individual`]
//! - [`Annotation`] / [`AnnotationSet`]
//! - [`Axiom`]: the closed union of annotated axiom kinds
//!
//! Values are built through a [`DataFactory`]. Axioms compare structurally,
//! order canonically (kind first, then a fixed per-kind operand order), and
//! expose closed-set dispatch through [`AxiomVisitor`].
//!
//! Renaming entities to short canonical IRIs lives in `owlcore-rename`.

pub mod annotation;
pub mod axiom;
pub mod builder;
pub mod class_expression;
pub mod entity;
pub mod factory;
pub mod iri;
pub mod visitor;
pub mod vocab;

pub use annotation::{Annotation, AnnotationSet, AnnotationValue, Literal};
pub use axiom::{
    Axiom, AxiomKind, ClassAssertion, Declaration, EquivalentClasses, ObjectPropertyAssertion,
    SubClassOf,
};
pub use builder::{AxiomBuildError, ClassAssertionBuilder};
pub use class_expression::{AnonymousIndividual, ClassExpression, Individual};
pub use entity::{
    AnnotationProperty, Class, DataProperty, Datatype, Entity, EntityKind, NamedIndividual,
    ObjectProperty,
};
pub use factory::DataFactory;
pub use iri::Iri;
pub use visitor::AxiomVisitor;
