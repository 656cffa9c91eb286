//! Standard IRI constants for the vocabularies the model builder reads.

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// SKOS namespace.
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
/// SKOS-XL namespace.
pub const SKOSXL: &str = "http://www.w3.org/2008/05/skos-xl#";
/// VANN namespace.
pub const VANN: &str = "http://purl.org/vocab/vann/";
/// Dublin Core terms namespace.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";
/// Schema.org namespace.
pub const SCHEMA: &str = "http://schema.org/";
/// FOAF namespace.
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
/// Artifact generator namespace (constant term types).
pub const ARTIFACT_GENERATOR: &str = "https://inrupt.com/vocab/tool/artifact_generator#";

// RDF
/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:Property`.
pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
/// `rdf:langString`.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

// RDFS
/// `rdfs:Class`.
pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
/// `rdfs:Datatype`.
pub const RDFS_DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";
/// `rdfs:Literal`.
pub const RDFS_LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:comment`.
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:subClassOf`.
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `rdfs:subPropertyOf`.
pub const RDFS_SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";

// OWL
/// `owl:Ontology`.
pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
/// `owl:Class`.
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:ObjectProperty`.
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
/// `owl:DatatypeProperty`.
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
/// `owl:AnnotationProperty`.
pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
/// `owl:NamedIndividual`.
pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";

// XSD
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:duration`.
pub const XSD_DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";

// SKOS / SKOS-XL
/// `skos:Concept`.
pub const SKOS_CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
/// `skos:definition`.
pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
/// `skosxl:Label`.
pub const SKOSXL_LABEL: &str = "http://www.w3.org/2008/05/skos-xl#Label";
/// `skosxl:literalForm`.
pub const SKOSXL_LITERAL_FORM: &str = "http://www.w3.org/2008/05/skos-xl#literalForm";

// VANN / DCTERMS / schema.org
/// `vann:preferredNamespaceUri`.
pub const VANN_PREFERRED_NAMESPACE_URI: &str = "http://purl.org/vocab/vann/preferredNamespaceUri";
/// `vann:preferredNamespacePrefix`.
pub const VANN_PREFERRED_NAMESPACE_PREFIX: &str =
    "http://purl.org/vocab/vann/preferredNamespacePrefix";
/// `dcterms:description`.
pub const DCTERMS_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
/// `schema:PaymentStatusType`.
pub const SCHEMA_PAYMENT_STATUS_TYPE: &str = "http://schema.org/PaymentStatusType";

// Artifact generator
/// Default type marking a term as a constant IRI.
pub const ARTIFACT_GENERATOR_CONSTANT_IRI: &str =
    "https://inrupt.com/vocab/tool/artifact_generator#ConstantIri";
/// Default type marking a term as a constant string.
pub const ARTIFACT_GENERATOR_CONSTANT_STRING: &str =
    "https://inrupt.com/vocab/tool/artifact_generator#ConstantString";
