//! Step-by-step construction of a class assertion.
//!
//! The factory constructors take every operand up front, so a missing operand
//! cannot happen there. Callers assembling an assertion piecemeal (e.g. while
//! walking parsed input) use [`ClassAssertionBuilder`], which refuses to
//! produce a value until both operands are present.

use crate::annotation::{Annotation, AnnotationSet};
use crate::axiom::{AxiomKind, ClassAssertion};
use crate::class_expression::{ClassExpression, Individual};
use crate::factory::DataFactory;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AxiomBuildError {
    #[error("{kind} axiom is missing its {operand} operand")]
    MissingOperand {
        kind: AxiomKind,
        operand: &'static str,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ClassAssertionBuilder {
    individual: Option<Individual>,
    class_expression: Option<ClassExpression>,
    annotations: Vec<Annotation>,
}

impl ClassAssertionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn individual(mut self, individual: impl Into<Individual>) -> Self {
        self.individual = Some(individual.into());
        self
    }

    pub fn class_expression(mut self, class_expression: impl Into<ClassExpression>) -> Self {
        self.class_expression = Some(class_expression.into());
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn build(self, factory: &DataFactory) -> Result<ClassAssertion, AxiomBuildError> {
        let individual = self.individual.ok_or(AxiomBuildError::MissingOperand {
            kind: AxiomKind::ClassAssertion,
            operand: "individual",
        })?;
        let class_expression = self
            .class_expression
            .ok_or(AxiomBuildError::MissingOperand {
                kind: AxiomKind::ClassAssertion,
                operand: "class expression",
            })?;
        let annotations: AnnotationSet = self.annotations.into_iter().collect();
        Ok(factory.class_assertion(individual, class_expression, annotations))
    }
}
