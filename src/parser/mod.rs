//! Input side of the pipeline: member names and XML documentation files.

pub mod identifier;
pub mod xml_doc;

pub use identifier::parse_identifier;
pub use xml_doc::XmlDocParser;
