//! Folding member records into per-type documentation.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::model::{MemberDoc, MemberKind, MemberRecord, MethodDoc, TypeDoc};

/// Accumulates records in input order. [`DocSetBuilder::build`] hands out the
/// finished, read-only [`DocSet`].
#[derive(Debug, Default)]
pub struct DocSetBuilder {
    types: Vec<TypeDoc>,
    index: HashMap<String, usize>,
    namespaces: BTreeMap<String, Vec<String>>,
}

impl DocSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one record. Records of an unknown kind leave the builder
    /// untouched.
    pub fn add(&mut self, record: MemberRecord) -> &mut Self {
        let MemberRecord {
            identifier,
            summary,
            remarks,
            example,
            parameters,
            returns,
        } = record;

        let owner = identifier.owner.as_str();
        let namespace = identifier.namespace.as_str();
        let name = identifier.member.unwrap_or_default();

        match identifier.kind {
            MemberKind::Type => {
                let type_doc = self.type_entry(owner, namespace);
                type_doc.summary = summary;
                type_doc.remarks = remarks;
                type_doc.example = example;
            }
            MemberKind::Method => self.type_entry(owner, namespace).methods.push(MethodDoc {
                name,
                signature: identifier.signature.unwrap_or_default(),
                summary,
                parameters,
                returns,
                remarks,
            }),
            MemberKind::Field => self
                .type_entry(owner, namespace)
                .fields
                .push(MemberDoc { name, summary }),
            MemberKind::Property => self
                .type_entry(owner, namespace)
                .properties
                .push(MemberDoc { name, summary }),
            MemberKind::Other(code) => {
                debug!("ignoring {}:{} with unsupported kind", code, owner)
            }
        }
        self
    }

    pub fn build(self) -> DocSet {
        DocSet {
            types: self.types,
            index: self.index,
            namespaces: self.namespaces,
        }
    }

    fn type_entry(&mut self, owner: &str, namespace: &str) -> &mut TypeDoc {
        let position = match self.index.get(owner) {
            Some(&position) => position,
            None => {
                let position = self.types.len();
                self.types.push(TypeDoc::new(owner, namespace));
                self.index.insert(owner.to_string(), position);
                if !namespace.is_empty() {
                    let members = self.namespaces.entry(namespace.to_string()).or_default();
                    if !members.iter().any(|name| name == owner) {
                        members.push(owner.to_string());
                    }
                }
                position
            }
        };
        &mut self.types[position]
    }
}

/// All documented types of one input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocSet {
    types: Vec<TypeDoc>,
    index: HashMap<String, usize>,
    namespaces: BTreeMap<String, Vec<String>>,
}

impl DocSet {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = MemberRecord>,
    {
        let mut builder = DocSetBuilder::new();
        for record in records {
            builder.add(record);
        }
        builder.build()
    }

    /// Types in the order they were first referenced.
    pub fn types(&self) -> &[TypeDoc] {
        &self.types
    }

    /// Types ordered by full name, as listed in navigation.
    pub fn sorted_types(&self) -> Vec<&TypeDoc> {
        let mut types: Vec<&TypeDoc> = self.types.iter().collect();
        types.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        types
    }

    pub fn get(&self, owner: &str) -> Option<&TypeDoc> {
        self.index.get(owner).map(|&position| &self.types[position])
    }

    /// Namespace to owner names, each list in first-seen order. Types in the
    /// global namespace are not listed.
    pub fn namespaces(&self) -> &BTreeMap<String, Vec<String>> {
        &self.namespaces
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn stats(&self) -> DocStats {
        DocStats::from(self)
    }
}

/// Totals shown on the overview page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocStats {
    pub total_types: usize,
    pub total_methods: usize,
    pub total_fields: usize,
    pub total_properties: usize,
}

impl From<&DocSet> for DocStats {
    fn from(docs: &DocSet) -> Self {
        docs.types().iter().fold(
            DocStats {
                total_types: docs.len(),
                ..Default::default()
            },
            |mut stats, type_doc| {
                stats.total_methods += type_doc.methods.len();
                stats.total_fields += type_doc.fields.len();
                stats.total_properties += type_doc.properties.len();
                stats
            },
        )
    }
}
