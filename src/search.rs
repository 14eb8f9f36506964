//! Client-side search index.

use serde::Serialize;

use crate::aggregate::DocSet;
use crate::error::DocResult;
use crate::locator::{member_url, method_anchors, type_page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Type,
    Method,
}

/// One row of `search-index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry {
    /// Short display name: `Player` or `Player.Jump`.
    pub name: String,
    pub full_name: String,
    pub namespace: String,
    pub summary: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// One entry per type followed by one per method of that type.
///
/// Fields and properties are not indexed.
// TODO: index fields and properties once the result list can show the
// member kind next to each hit.
pub fn build_search_index(docs: &DocSet) -> Vec<SearchEntry> {
    let mut entries = Vec::new();
    for type_doc in docs.types() {
        entries.push(SearchEntry {
            name: type_doc.short_name.clone(),
            full_name: type_doc.full_name.clone(),
            namespace: type_doc.namespace.clone(),
            summary: type_doc.summary.clone(),
            url: type_page(&type_doc.full_name),
            kind: EntryKind::Type,
        });
        let anchors = method_anchors(type_doc.methods.iter().map(|m| m.name.as_str()));
        entries.extend(
            type_doc
                .methods
                .iter()
                .zip(anchors)
                .map(|(method, anchor)| SearchEntry {
                    name: format!("{}.{}", type_doc.short_name, method.name),
                    full_name: format!("{}.{}", type_doc.full_name, method.name),
                    namespace: type_doc.namespace.clone(),
                    summary: method.summary.clone(),
                    url: member_url(&type_doc.full_name, &anchor),
                    kind: EntryKind::Method,
                }),
        );
    }
    entries
}

/// Pretty-printed JSON for `search-index.json`.
pub fn search_index_json(entries: &[SearchEntry]) -> DocResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemberRecord;
    use crate::parser::parse_identifier;

    fn docs(names: &[&str]) -> DocSet {
        DocSet::from_records(names.iter().map(|name| {
            let mut record = MemberRecord::new(parse_identifier(name).unwrap());
            record.summary = format!("about {}", name);
            record
        }))
    }

    #[test]
    fn test_types_and_methods_are_indexed() {
        let docs = docs(&[
            "T:App.Player",
            "M:App.Player.Jump(System.Single)",
            "F:App.Player.speed",
            "P:App.Player.Health",
            "M:Util.Log",
        ]);
        let entries = build_search_index(&docs);

        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[0],
            SearchEntry {
                name: "Player".to_string(),
                full_name: "App.Player".to_string(),
                namespace: "App".to_string(),
                summary: "about T:App.Player".to_string(),
                url: "App.Player.html".to_string(),
                kind: EntryKind::Type,
            }
        );
        assert_eq!(entries[1].name, "Player.Jump");
        assert_eq!(entries[1].full_name, "App.Player.Jump");
        assert_eq!(entries[1].url, "App.Player.html#Jump");
        assert_eq!(entries[1].kind, EntryKind::Method);
        assert_eq!(entries[2].name, "Util");
        assert_eq!(entries[2].summary, "");
        assert_eq!(entries[3].name, "Util.Log");
        assert_eq!(entries[3].namespace, "");
    }

    #[test]
    fn test_index_size_ignores_fields_and_properties() {
        let docs = docs(&[
            "F:A.x",
            "P:A.Y",
            "M:A.One",
            "M:A.Two",
            "T:B",
            "P:B.Z",
        ]);
        let stats = docs.stats();

        assert_eq!(
            build_search_index(&docs).len(),
            stats.total_types + stats.total_methods
        );
    }

    #[test]
    fn test_json_shape() {
        let docs = docs(&["M:App.Menu.Open"]);
        let json = search_index_json(&build_search_index(&docs)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["type"], "type");
        assert_eq!(value[0]["summary"], "");
        assert_eq!(value[1]["type"], "method");
        assert_eq!(value[1]["url"], "App.Menu.html#Open");
        assert_eq!(value[1]["full_name"], "App.Menu.Open");
    }

    #[test]
    fn test_overloads_link_to_their_own_cards() {
        let docs = docs(&["M:A.Move(System.Int32)", "M:A.Move(System.Single)"]);
        let urls: Vec<String> = build_search_index(&docs)
            .into_iter()
            .map(|entry| entry.url)
            .collect();

        assert_eq!(urls, vec!["A.html", "A.html#Move", "A.html#Move-2"]);
    }

    #[test]
    fn test_empty_index() {
        assert_eq!(search_index_json(&[]).unwrap(), "[]");
    }
}
