//! File names, URLs and fragments derived from documented names.
//!
//! Every path the site links to goes through [`sanitize_name`], so a page name
//! computed while writing files always matches the one used in links and in
//! the search index.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

fn forbidden_chars() -> &'static Regex {
    static FORBIDDEN: OnceLock<Regex> = OnceLock::new();
    FORBIDDEN.get_or_init(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid character class"))
}

/// Replaces each of `< > : " / \ | ? *` with `_`.
///
/// Two names differing only in those characters map to the same locator;
/// no attempt is made to disambiguate them.
pub fn sanitize_name(name: &str) -> String {
    forbidden_chars().replace_all(name, "_").into_owned()
}

/// Page file name for a type, relative to the site root.
pub fn type_page(owner: &str) -> String {
    format!("{}.html", sanitize_name(owner))
}

/// Fragment id of a member on its type page, without the leading `#`.
pub fn member_anchor(member: &str) -> String {
    sanitize_name(member)
}

/// Link to a member: the type page plus the member fragment.
pub fn member_url(owner: &str, member: &str) -> String {
    format!("{}#{}", type_page(owner), member_anchor(member))
}

/// Fragment ids for the methods of one type, in the given order.
///
/// The first method with a given name keeps the plain anchor, later
/// overloads get `-2`, `-3` and so on.
pub fn method_anchors<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    names
        .into_iter()
        .map(|name| {
            let anchor = member_anchor(name);
            let count = seen.entry(anchor.clone()).or_default();
            *count += 1;
            if *count == 1 {
                anchor
            } else {
                format!("{}-{}", anchor, count)
            }
        })
        .collect()
}
