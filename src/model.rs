//! Normalized documentation model.
//!
//! A [`MemberRecord`] is one `member` element of the input, already reduced to
//! plain text fields. Records are folded into [`TypeDoc`] values by
//! [`crate::aggregate::DocSet`].

use std::fmt;

/// The kind code in front of the colon of a member name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// `T:` a class, struct, interface, enum or delegate.
    Type,
    /// `M:` a method or constructor.
    Method,
    /// `F:` a field or enum constant.
    Field,
    /// `P:` a property or indexer.
    Property,
    /// Any other code (`E:`, `N:`, `!:`, ...). Kept so callers can log it,
    /// never classified.
    Other(String),
}

impl MemberKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "T" => MemberKind::Type,
            "M" => MemberKind::Method,
            "F" => MemberKind::Field,
            "P" => MemberKind::Property,
            other => MemberKind::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            MemberKind::Type => "T",
            MemberKind::Method => "M",
            MemberKind::Field => "F",
            MemberKind::Property => "P",
            MemberKind::Other(code) => code,
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A parsed `Kind:Owner.Member` name.
///
/// Nested types and dotted namespaces cannot be told apart from the name
/// alone: `T:Game.Player.Stats` gives namespace `Game.Player` whether `Player`
/// is a namespace or an enclosing class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberIdentifier {
    pub kind: MemberKind,
    /// Full dotted name of the type that owns the entry.
    pub owner: String,
    /// Last segment of a member path. `None` for types, and for member
    /// paths that carry no dot at all.
    pub member: Option<String>,
    /// Parenthesized parameter list split off a member path, verbatim.
    pub signature: Option<String>,
    /// `owner` without its last segment, empty for the global namespace.
    pub namespace: String,
}

impl MemberIdentifier {
    /// Last dot-segment of the owner.
    pub fn short_name(&self) -> &str {
        short_name(&self.owner)
    }
}

/// Returns the part of a dotted name after its last dot.
pub fn short_name(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, last)| last)
}

/// One `param` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Param {
    pub name: String,
    pub description: String,
}

impl Param {
    pub fn new(name: &str, description: &str) -> Self {
        Param {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// One documentation entry with every text field resolved to a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub identifier: MemberIdentifier,
    pub summary: String,
    pub remarks: String,
    pub example: String,
    pub parameters: Vec<Param>,
    pub returns: String,
}

impl MemberRecord {
    /// A record with empty documentation text.
    pub fn new(identifier: MemberIdentifier) -> Self {
        MemberRecord {
            identifier,
            summary: String::new(),
            remarks: String::new(),
            example: String::new(),
            parameters: Vec::new(),
            returns: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MethodDoc {
    pub name: String,
    pub signature: String,
    pub summary: String,
    pub parameters: Vec<Param>,
    pub returns: String,
    pub remarks: String,
}

/// A field or property entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberDoc {
    pub name: String,
    pub summary: String,
}

/// Everything documented about one owner type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeDoc {
    pub full_name: String,
    pub short_name: String,
    pub namespace: String,
    pub summary: String,
    pub remarks: String,
    pub example: String,
    /// Input order, not alphabetical.
    pub methods: Vec<MethodDoc>,
    pub fields: Vec<MemberDoc>,
    pub properties: Vec<MemberDoc>,
}

impl TypeDoc {
    pub fn new(full_name: &str, namespace: &str) -> Self {
        TypeDoc {
            full_name: full_name.to_string(),
            short_name: short_name(full_name).to_string(),
            namespace: namespace.to_string(),
            ..Default::default()
        }
    }

    pub fn member_count(&self) -> usize {
        self.methods.len() + self.fields.len() + self.properties.len()
    }
}
