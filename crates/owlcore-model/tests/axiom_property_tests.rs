//! Property tests for the axiom value contract.

use owlcore_model::{
    vocab, Annotation, AnnotationSet, AnnotationValue, Axiom, ClassExpression, DataFactory,
    Individual, Literal,
};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

// ============================================================================
// Strategies
// ============================================================================

fn local_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,8}").unwrap()
}

fn annotation_text() -> impl Strategy<Value = String> {
    "[a-z ]{0,12}".prop_map(|s| s)
}

fn annotation_texts() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(annotation_text(), 0..5)
}

/// (individual, class, annotation texts)
fn assertion_parts() -> impl Strategy<Value = (String, String, Vec<String>)> {
    (local_name(), local_name(), annotation_texts())
}

fn comment(df: &DataFactory, text: &str) -> Annotation {
    df.annotation(
        df.annotation_property(vocab::RDFS_COMMENT),
        AnnotationValue::Literal(Literal::Simple {
            lexical: text.to_string(),
        }),
    )
}

fn build(df: &DataFactory, (ind, class, notes): &(String, String, Vec<String>)) -> Axiom {
    df.class_assertion(
        df.named_individual(&format!("http://x.org/onto#{ind}")),
        df.class(&format!("http://x.org/onto#{class}")),
        df.annotations(notes.iter().map(|n| comment(df, n))),
    )
    .into()
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Equality and ordering
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn independently_built_axioms_are_equal(parts in assertion_parts()) {
        let a = build(&DataFactory::new(), &parts);
        let b = build(&DataFactory::new(), &parts);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.cmp(&b), Ordering::Equal);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn ordering_agrees_with_equality(x in assertion_parts(), y in assertion_parts()) {
        let df = DataFactory::new();
        let a = build(&df, &x);
        let b = build(&df, &y);
        prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn ordering_is_transitive(
        x in assertion_parts(),
        y in assertion_parts(),
        z in assertion_parts()
    ) {
        let df = DataFactory::new();
        let mut sorted = vec![build(&df, &x), build(&df, &y), build(&df, &z)];
        sorted.sort();
        prop_assert!(sorted[0] <= sorted[1]);
        prop_assert!(sorted[1] <= sorted[2]);
        prop_assert!(sorted[0] <= sorted[2]);
    }

    // ========================================================================
    // Annotation variants
    // ========================================================================

    #[test]
    fn without_annotations_is_empty_and_operand_equal(parts in assertion_parts()) {
        let df = DataFactory::new();
        let ax = build(&df, &parts);
        let stripped = ax.without_annotations(&df);
        prop_assert!(stripped.annotations().is_empty());
        prop_assert!(stripped.equals_ignore_annotations(&ax));
    }

    #[test]
    fn with_annotations_is_a_bounded_union(parts in assertion_parts(), extra in annotation_texts()) {
        let df = DataFactory::new();
        let ax = build(&df, &parts);
        let additional: Vec<Annotation> = extra.iter().map(|t| comment(&df, t)).collect();
        let merged = ax.with_annotations(&df, additional.clone());

        prop_assert!(merged.annotations().len() <= ax.annotations().len() + additional.len());
        for a in ax.annotations().iter().chain(additional.iter()) {
            prop_assert!(merged.annotations().contains(a));
        }
        let expected: AnnotationSet = ax.annotations().iter().cloned().chain(additional).collect();
        prop_assert_eq!(merged.annotations(), &expected);
        prop_assert!(merged.equals_ignore_annotations(&ax));
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    #[test]
    fn class_assertion_normalizes_to_singleton_subclass(parts in assertion_parts()) {
        let df = DataFactory::new();
        let ax = build(&df, &parts);
        let Axiom::ClassAssertion(assertion) = &ax else {
            unreachable!("built a class assertion");
        };

        let normalized = ax.normalize(&df).expect("class assertions normalize");
        prop_assert_eq!(normalized.len(), 1);
        let Axiom::SubClassOf(sub) = &normalized[0] else {
            panic!("expected SubClassOf, got {:?}", normalized[0]);
        };

        let expected_individuals: BTreeSet<Individual> =
            [assertion.individual().clone()].into_iter().collect();
        prop_assert_eq!(
            sub.sub_class(),
            &ClassExpression::ObjectOneOf { individuals: expected_individuals }
        );
        prop_assert_eq!(sub.super_class(), assertion.class_expression());
    }
}
