//! HTML pages: the overview page and one page per type.

use crate::aggregate::DocSet;
use crate::generator::SiteOptions;
use crate::locator::{method_anchors, type_page};
use crate::model::{MemberDoc, MethodDoc, TypeDoc};

/// `index.html`: navigation by type and namespace plus the totals.
pub fn render_index(docs: &DocSet, options: &SiteOptions) -> String {
    let mut out = String::new();
    page_start(&mut out, &options.title, options);
    header(
        &mut out,
        options,
        "<p>Generated from XML documentation comments</p>",
    );

    out.push_str("<div class=\"container\">\n<nav class=\"sidebar\">\n");
    search_box(&mut out);
    out.push_str("<h2>Navigation</h2>\n");
    out.push_str("<div class=\"nav-tabs\">\n");
    out.push_str("  <button class=\"nav-tab active\" data-tab=\"types\">Types</button>\n");
    out.push_str("  <button class=\"nav-tab\" data-tab=\"namespaces\">Namespaces</button>\n");
    out.push_str("</div>\n");

    // Types tab
    out.push_str("<div id=\"types-tab\" class=\"tab-content active\">\n<ul class=\"type-list\">\n");
    for type_doc in docs.sorted_types() {
        let label = if type_doc.namespace.is_empty() {
            String::new()
        } else {
            format!(
                "<span class=\"namespace-label\">{}</span>",
                html_escape(&type_doc.namespace)
            )
        };
        out.push_str(&format!(
            "  <li><a href=\"{}\">{}</a>{}</li>\n",
            html_escape(&type_page(&type_doc.full_name)),
            html_escape(&type_doc.short_name),
            label
        ));
    }
    out.push_str("</ul>\n</div>\n");

    // Namespaces tab
    out.push_str("<div id=\"namespaces-tab\" class=\"tab-content\">\n");
    for (namespace, owners) in docs.namespaces() {
        out.push_str("<div class=\"namespace-group\">\n");
        out.push_str(&format!("<h3>{}</h3>\n<ul class=\"type-list\">\n", html_escape(namespace)));
        let mut owners: Vec<&String> = owners.iter().collect();
        owners.sort();
        for owner in owners {
            let short = docs.get(owner).map_or(owner.as_str(), |t| t.short_name.as_str());
            out.push_str(&format!(
                "  <li><a href=\"{}\">{}</a></li>\n",
                html_escape(&type_page(owner)),
                html_escape(short)
            ));
        }
        out.push_str("</ul>\n</div>\n");
    }
    let global: Vec<&TypeDoc> = docs
        .sorted_types()
        .into_iter()
        .filter(|t| t.namespace.is_empty())
        .collect();
    if !global.is_empty() {
        out.push_str("<div class=\"namespace-group\">\n<h3>Global</h3>\n<ul class=\"type-list\">\n");
        for type_doc in global {
            out.push_str(&format!(
                "  <li><a href=\"{}\">{}</a></li>\n",
                html_escape(&type_page(&type_doc.full_name)),
                html_escape(&type_doc.short_name)
            ));
        }
        out.push_str("</ul>\n</div>\n");
    }
    out.push_str("</div>\n</nav>\n");

    let stats = docs.stats();
    out.push_str("<main class=\"main-content\">\n");
    out.push_str("<div class=\"welcome-section\">\n");
    out.push_str(&format!("<h2>{}</h2>\n", html_escape(&options.title)));
    out.push_str("<p>Use the search box or browse by type or namespace.</p>\n");
    out.push_str("</div>\n");
    out.push_str("<div class=\"stats-grid\">\n");
    for (count, label) in [
        (stats.total_types, "Types"),
        (stats.total_methods, "Methods"),
        (stats.total_properties, "Properties"),
        (stats.total_fields, "Fields"),
    ] {
        out.push_str(&format!(
            "  <div class=\"stat-card\"><div class=\"stat-number\">{}</div><div class=\"stat-label\">{}</div></div>\n",
            count, label
        ));
    }
    out.push_str("</div>\n</main>\n</div>\n");

    page_end(&mut out);
    out
}

/// Page for one type. Members are listed alphabetically.
pub fn render_type_page(docs: &DocSet, type_doc: &TypeDoc, options: &SiteOptions) -> String {
    let mut out = String::new();
    page_start(
        &mut out,
        &format!("{} - {}", type_doc.short_name, options.title),
        options,
    );
    header(
        &mut out,
        options,
        "<p><a href=\"index.html\" class=\"back-link\">&larr; Back to index</a></p>",
    );

    out.push_str("<div class=\"container\">\n<nav class=\"sidebar\">\n");
    search_box(&mut out);
    out.push_str("<h2>Types</h2>\n<ul class=\"type-list\">\n");
    for other in docs.sorted_types() {
        let active = if other.full_name == type_doc.full_name {
            " class=\"active\""
        } else {
            ""
        };
        out.push_str(&format!(
            "  <li{}><a href=\"{}\">{}</a></li>\n",
            active,
            html_escape(&type_page(&other.full_name)),
            html_escape(&other.short_name)
        ));
    }
    out.push_str("</ul>\n</nav>\n");

    out.push_str("<main class=\"main-content\">\n<div class=\"type-header\">\n");
    out.push_str("<div class=\"breadcrumb\">\n  <a href=\"index.html\">Home</a>\n");
    if !type_doc.namespace.is_empty() {
        out.push_str(&format!(
            "  <span>&rarr;</span><span>{}</span>\n",
            html_escape(&type_doc.namespace)
        ));
    }
    out.push_str(&format!(
        "  <span>&rarr;</span><span class=\"current\">{}</span>\n</div>\n",
        html_escape(&type_doc.short_name)
    ));
    out.push_str(&format!(
        "<h2 class=\"type-title\">{}</h2>\n",
        html_escape(&type_doc.short_name)
    ));
    if !type_doc.namespace.is_empty() {
        out.push_str(&format!(
            "<p class=\"namespace-info\">Namespace: <code>{}</code></p>\n",
            html_escape(&type_doc.namespace)
        ));
    }
    out.push_str(&format!(
        "<p class=\"type-summary\">{}</p>\n",
        html_escape(&type_doc.summary)
    ));
    if !type_doc.remarks.is_empty() {
        out.push_str(&format!(
            "<div class=\"remarks\"><h4>Remarks</h4><p>{}</p></div>\n",
            html_escape(&type_doc.remarks)
        ));
    }
    if !type_doc.example.is_empty() {
        out.push_str(&format!(
            "<div class=\"example\"><h4>Example</h4><pre><code>{}</code></pre></div>\n",
            html_escape(&type_doc.example)
        ));
    }
    out.push_str("</div>\n");

    // Member summary badges
    out.push_str("<div class=\"summary-badges\">\n");
    for (count, anchor, class, label) in [
        (type_doc.fields.len(), "fields", "badge-field", "Fields"),
        (type_doc.properties.len(), "properties", "badge-property", "Properties"),
        (type_doc.methods.len(), "methods", "badge-method", "Methods"),
    ] {
        if count > 0 {
            out.push_str(&format!(
                "  <a href=\"#{}\" class=\"badge {}\">{} {}</a>\n",
                anchor, class, count, label
            ));
        }
    }
    out.push_str("</div>\n");

    out.push_str(&render_member_section("fields", "Fields", &type_doc.fields));
    out.push_str(&render_member_section("properties", "Properties", &type_doc.properties));

    if !type_doc.methods.is_empty() {
        out.push_str("<section id=\"methods\" class=\"member-section\">\n<h3>Methods</h3>\n");
        let anchors = method_anchors(type_doc.methods.iter().map(|m| m.name.as_str()));
        let mut methods: Vec<(&MethodDoc, String)> =
            type_doc.methods.iter().zip(anchors).collect();
        methods.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));
        for (method, anchor) in methods {
            out.push_str(&render_method(method, &anchor));
        }
        out.push_str("</section>\n");
    }

    out.push_str("</main>\n</div>\n");
    page_end(&mut out);
    out
}

/// A field or property section: one card per member, sorted by name.
/// Empty lists render nothing.
fn render_member_section(id: &str, title: &str, members: &[MemberDoc]) -> String {
    if members.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    out.push_str(&format!(
        "<section id=\"{}\" class=\"member-section\">\n<h3>{}</h3>\n<div class=\"member-grid\">\n",
        id, title
    ));
    let mut members: Vec<&MemberDoc> = members.iter().collect();
    members.sort_by(|a, b| a.name.cmp(&b.name));
    for member in members {
        out.push_str(&format!(
            "  <div class=\"member-card\"><h4><code>{}</code></h4><p>{}</p></div>\n",
            html_escape(&member.name),
            html_escape(&member.summary)
        ));
    }
    out.push_str("</div>\n</section>\n");
    out
}

/// Method card with `anchor` as its id. Parameters, return value and remarks
/// only appear when documented.
fn render_method(method: &MethodDoc, anchor: &str) -> String {
    let mut out = String::new();
    let anchor = html_escape(anchor);

    out.push_str(&format!("<div class=\"method-card\" id=\"{}\">\n", anchor));
    out.push_str("<div class=\"method-header\">\n");
    out.push_str(&format!(
        "  <h4><code>{}</code><span class=\"signature\">{}</span></h4>\n",
        html_escape(&method.name),
        html_escape(&method.signature)
    ));
    out.push_str(&format!(
        "  <a href=\"#{}\" class=\"anchor-link\">#</a>\n</div>\n",
        anchor
    ));
    out.push_str(&format!(
        "<p class=\"method-summary\">{}</p>\n",
        html_escape(&method.summary)
    ));

    if !method.parameters.is_empty() {
        out.push_str("<div class=\"params-section\">\n<h5>Parameters</h5>\n<table class=\"params-table\">\n");
        for param in &method.parameters {
            out.push_str(&format!(
                "  <tr><td><code>{}</code></td><td>{}</td></tr>\n",
                html_escape(&param.name),
                html_escape(&param.description)
            ));
        }
        out.push_str("</table>\n</div>\n");
    }

    if !method.returns.is_empty() {
        out.push_str(&format!(
            "<div class=\"returns-section\"><h5>Returns</h5><p>{}</p></div>\n",
            html_escape(&method.returns)
        ));
    }

    if !method.remarks.is_empty() {
        out.push_str(&format!(
            "<div class=\"remarks-section\"><h5>Remarks</h5><p>{}</p></div>\n",
            html_escape(&method.remarks)
        ));
    }

    out.push_str("</div>\n");
    out
}

// Shared page chrome

fn page_start(out: &mut String, title: &str, options: &SiteOptions) {
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!(
        "<html lang=\"en\" data-theme=\"{}\">\n<head>\n",
        options.theme.as_str()
    ));
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    out.push_str("<link rel=\"stylesheet\" href=\"style.css\">\n");
    out.push_str("</head>\n<body>\n");
}

fn header(out: &mut String, options: &SiteOptions, subtitle: &str) {
    out.push_str("<header>\n<div class=\"header-content\">\n<div>\n");
    out.push_str(&format!("<h1>{}</h1>\n", html_escape(&options.title)));
    out.push_str(subtitle);
    out.push_str("\n</div>\n");
    out.push_str("<button id=\"theme-toggle\" class=\"theme-toggle\" title=\"Toggle theme\"><span class=\"theme-icon\"></span></button>\n");
    out.push_str("</div>\n</header>\n");
}

fn search_box(out: &mut String) {
    out.push_str("<div class=\"search-container\">\n");
    out.push_str("  <input type=\"text\" id=\"search-input\" placeholder=\"Search...\" autocomplete=\"off\">\n");
    out.push_str("  <div id=\"search-results\" class=\"search-results\"></div>\n");
    out.push_str("</div>\n");
}

fn page_end(out: &mut String) {
    out.push_str(&format!(
        "<footer>\n<p>Generated by {} {}</p>\n</footer>\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("<script src=\"script.js\"></script>\n</body>\n</html>\n");
}

/// Escapes text for use in element content and in double- or single-quoted
/// attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
