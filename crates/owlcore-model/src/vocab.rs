//! Reserved OWL/RDF(S)/XSD vocabulary.
//!
//! Entities named by these IRIs are *built in*: they belong to the ontology
//! language itself and are never renamed.

use crate::entity::EntityKind;
use crate::iri::Iri;

pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

// Classes
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
pub const OWL_NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";

// Properties
pub const OWL_TOP_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topObjectProperty";
pub const OWL_BOTTOM_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomObjectProperty";
pub const OWL_TOP_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topDataProperty";
pub const OWL_BOTTOM_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomDataProperty";

// Annotation properties
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
pub const RDFS_SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
pub const RDFS_IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
pub const OWL_DEPRECATED: &str = "http://www.w3.org/2002/07/owl#deprecated";
pub const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
pub const OWL_PRIOR_VERSION: &str = "http://www.w3.org/2002/07/owl#priorVersion";
pub const OWL_BACKWARD_COMPATIBLE_WITH: &str =
    "http://www.w3.org/2002/07/owl#backwardCompatibleWith";
pub const OWL_INCOMPATIBLE_WITH: &str = "http://www.w3.org/2002/07/owl#incompatibleWith";

// Datatypes outside the XSD namespace
pub const RDFS_LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";
pub const RDF_PLAIN_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral";
pub const RDF_XML_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#XMLLiteral";
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
pub const OWL_REAL: &str = "http://www.w3.org/2002/07/owl#real";
pub const OWL_RATIONAL: &str = "http://www.w3.org/2002/07/owl#rational";

pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

const BUILT_IN_CLASSES: [&str; 2] = [OWL_THING, OWL_NOTHING];

const BUILT_IN_OBJECT_PROPERTIES: [&str; 2] = [OWL_TOP_OBJECT_PROPERTY, OWL_BOTTOM_OBJECT_PROPERTY];

const BUILT_IN_DATA_PROPERTIES: [&str; 2] = [OWL_TOP_DATA_PROPERTY, OWL_BOTTOM_DATA_PROPERTY];

const BUILT_IN_ANNOTATION_PROPERTIES: [&str; 9] = [
    RDFS_LABEL,
    RDFS_COMMENT,
    RDFS_SEE_ALSO,
    RDFS_IS_DEFINED_BY,
    OWL_DEPRECATED,
    OWL_VERSION_INFO,
    OWL_PRIOR_VERSION,
    OWL_BACKWARD_COMPATIBLE_WITH,
    OWL_INCOMPATIBLE_WITH,
];

const BUILT_IN_DATATYPES: [&str; 6] = [
    RDFS_LITERAL,
    RDF_PLAIN_LITERAL,
    RDF_XML_LITERAL,
    RDF_LANG_STRING,
    OWL_REAL,
    OWL_RATIONAL,
];

/// Whether `iri`, used as an entity of `kind`, is part of the reserved vocabulary.
///
/// Every datatype in the XSD namespace counts as built in.
pub fn is_built_in(kind: EntityKind, iri: &Iri) -> bool {
    let iri = iri.as_str();
    match kind {
        EntityKind::Class => BUILT_IN_CLASSES.contains(&iri),
        EntityKind::ObjectProperty => BUILT_IN_OBJECT_PROPERTIES.contains(&iri),
        EntityKind::DataProperty => BUILT_IN_DATA_PROPERTIES.contains(&iri),
        EntityKind::AnnotationProperty => BUILT_IN_ANNOTATION_PROPERTIES.contains(&iri),
        EntityKind::Datatype => iri.starts_with(XSD_NS) || BUILT_IN_DATATYPES.contains(&iri),
        EntityKind::NamedIndividual => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thing_is_built_in_only_as_class() {
        let thing = Iri::new(OWL_THING);
        assert!(is_built_in(EntityKind::Class, &thing));
        assert!(!is_built_in(EntityKind::NamedIndividual, &thing));
        assert!(!is_built_in(EntityKind::ObjectProperty, &thing));
    }

    #[test]
    fn any_xsd_datatype_is_built_in() {
        assert!(is_built_in(EntityKind::Datatype, &Iri::new(XSD_INTEGER)));
        assert!(is_built_in(
            EntityKind::Datatype,
            &Iri::new("http://www.w3.org/2001/XMLSchema#nonNegativeInteger")
        ));
        assert!(!is_built_in(EntityKind::Datatype, &Iri::new("http://x#myType")));
    }

    #[test]
    fn label_is_a_built_in_annotation_property() {
        assert!(is_built_in(EntityKind::AnnotationProperty, &Iri::new(RDFS_LABEL)));
        assert!(!is_built_in(EntityKind::AnnotationProperty, &Iri::new("http://x#note")));
    }
}
