use log::{debug, trace};
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::Reader;

use crate::error::{DocError, DocResult};
use crate::model::{short_name, MemberRecord, Param};
use crate::parser::identifier::parse_identifier;

/// Reads `<doc><members><member name="...">` documents emitted by the C#
/// compiler (`/doc` or `GenerateDocumentationFile`).
#[derive(Debug, Default)]
pub struct XmlDocParser;

impl XmlDocParser {
    pub fn new() -> Self {
        XmlDocParser
    }

    /// Parses the whole document and returns one record per `member` element
    /// whose name is a valid `Kind:Path` identifier, in document order.
    ///
    /// A document without a `members` element yields no records. Malformed XML
    /// is an error.
    pub fn parse(&self, input: &str) -> DocResult<Vec<MemberRecord>> {
        let mut reader = Reader::from_str(input);
        let mut collector = MemberCollector::default();
        let mut seen_root = false;

        loop {
            let event = reader.read_event().map_err(|e| DocError::Xml {
                position: reader.buffer_position() as u64,
                message: e.to_string(),
            })?;
            match event {
                Event::Eof => break,
                Event::Start(ref e) | Event::Empty(ref e) => {
                    if seen_root && collector.stack.is_empty() {
                        return Err(DocError::Xml {
                            position: reader.buffer_position() as u64,
                            message: format!(
                                "unexpected second root element <{}>",
                                String::from_utf8_lossy(e.local_name().as_ref())
                            ),
                        });
                    }
                    seen_root = true;
                    collector.open(e, matches!(event, Event::Empty(_)));
                }
                Event::End(_) => collector.close(),
                Event::Text(ref e) => {
                    collector.push_text(&unescape_lossy(&String::from_utf8_lossy(e)))
                }
                Event::CData(ref e) => collector.push_text(&String::from_utf8_lossy(e)),
                Event::GeneralRef(ref e) => match resolve_reference(e) {
                    Some(value) => collector.push_text(&value),
                    None => {
                        return Err(DocError::Xml {
                            position: reader.buffer_position() as u64,
                            message: format!(
                                "unknown entity &{};",
                                String::from_utf8_lossy(e)
                            ),
                        })
                    }
                },
                _ => (),
            }
        }

        if !seen_root {
            return Err(DocError::Xml {
                position: reader.buffer_position() as u64,
                message: "no root element found".to_string(),
            });
        }
        if let Some(open) = collector.stack.last() {
            return Err(DocError::Xml {
                position: reader.buffer_position() as u64,
                message: format!(
                    "unexpected end of document, <{}> is not closed",
                    String::from_utf8_lossy(open)
                ),
            });
        }

        Ok(collector.records)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocField {
    Summary,
    Remarks,
    Example,
    Returns,
    Param,
}

impl DocField {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"summary" => Some(DocField::Summary),
            b"remarks" => Some(DocField::Remarks),
            b"example" => Some(DocField::Example),
            b"returns" => Some(DocField::Returns),
            b"param" => Some(DocField::Param),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct PendingMember {
    name: String,
    summary: Option<String>,
    remarks: Option<String>,
    example: Option<String>,
    returns: Option<String>,
    params: Vec<Param>,
}

impl PendingMember {
    fn into_record(self) -> Option<MemberRecord> {
        let identifier = parse_identifier(&self.name)?;
        let mut record = MemberRecord::new(identifier);
        record.summary = self.summary.unwrap_or_default();
        record.remarks = self.remarks.unwrap_or_default();
        record.example = self.example.unwrap_or_default();
        record.returns = self.returns.unwrap_or_default();
        record.parameters = self.params;
        Some(record)
    }
}

#[derive(Debug)]
struct Capture {
    field: DocField,
    depth: usize,
    param_name: String,
    text: String,
    /// Open inline references: element depth, label, text length at open.
    references: Vec<(usize, String, usize)>,
}

/// Walks the element tree and turns `doc/members/member` elements into
/// records. `stack` holds the local names of the currently open elements.
#[derive(Debug, Default)]
struct MemberCollector {
    stack: Vec<Vec<u8>>,
    member: Option<PendingMember>,
    capture: Option<Capture>,
    records: Vec<MemberRecord>,
}

impl MemberCollector {
    fn open(&mut self, e: &BytesStart, is_empty: bool) {
        let tag = e.local_name().as_ref().to_vec();
        let depth = self.stack.len();

        if let Some(capture) = self.capture.as_mut() {
            if let Some(label) = inline_reference(&tag, e) {
                if is_empty {
                    capture.text.push_str(&label);
                } else {
                    capture.references.push((depth, label, capture.text.len()));
                }
            }
        } else if depth == 2 && self.stack[1] == b"members" && tag == b"member" {
            match attribute(e, b"name").filter(|name| !name.is_empty()) {
                Some(name) => {
                    self.member = Some(PendingMember {
                        name,
                        ..Default::default()
                    })
                }
                None => debug!("skipping <member> without a name attribute"),
            }
            if is_empty {
                self.finish_member();
            }
        } else if depth == 3 && self.member.is_some() {
            if let Some(field) = DocField::from_tag(&tag) {
                self.capture = Some(Capture {
                    field,
                    depth,
                    param_name: if field == DocField::Param {
                        attribute(e, b"name").unwrap_or_default()
                    } else {
                        String::new()
                    },
                    text: String::new(),
                    references: Vec::new(),
                });
                if is_empty {
                    self.finish_capture();
                }
            }
        }

        if !is_empty {
            self.stack.push(tag);
        }
    }

    fn close(&mut self) {
        self.stack.pop();
        let depth = self.stack.len();
        if let Some(capture) = self.capture.as_mut() {
            if capture.references.last().is_some_and(|(at, _, _)| *at == depth) {
                if let Some((_, label, start)) = capture.references.pop() {
                    // <see cref="..."></see> without a body reads like the self-closing form
                    if capture.text[start..].trim().is_empty() {
                        capture.text.push_str(&label);
                    }
                }
            }
        }
        if self.capture.as_ref().is_some_and(|c| c.depth == depth) {
            self.finish_capture();
        }
        if depth == 2 && self.member.is_some() {
            self.finish_member();
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(capture) = self.capture.as_mut() {
            capture.text.push_str(text);
        }
    }

    fn finish_capture(&mut self) {
        let (Some(capture), Some(member)) = (self.capture.take(), self.member.as_mut()) else {
            return;
        };
        let text = capture.text.trim().to_string();
        // Only the first element of each kind counts; every param is kept.
        let slot = match capture.field {
            DocField::Summary => &mut member.summary,
            DocField::Remarks => &mut member.remarks,
            DocField::Example => &mut member.example,
            DocField::Returns => &mut member.returns,
            DocField::Param => {
                member.params.push(Param {
                    name: capture.param_name,
                    description: text,
                });
                return;
            }
        };
        if slot.is_none() {
            *slot = Some(text);
        }
    }

    fn finish_member(&mut self) {
        let Some(member) = self.member.take() else {
            return;
        };
        let name = member.name.clone();
        match member.into_record() {
            Some(record) => {
                trace!("parsed member {}", name);
                self.records.push(record);
            }
            None => debug!("skipping member with unsupported name {:?}", name),
        }
    }
}

fn attribute(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .map(|attr| {
            unescape_lossy(&String::from_utf8_lossy(&attr.value))
        })
}

fn unescape_lossy(raw: &str) -> String {
    match unescape(raw) {
        Ok(value) => value.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Label for a `<see cref="..."/>` style element inside documentation text.
/// It is used when the element has no body of its own.
fn inline_reference(tag: &[u8], e: &BytesStart) -> Option<String> {
    if !matches!(tag, b"see" | b"seealso" | b"paramref" | b"typeparamref") {
        return None;
    }
    if let Some(cref) = attribute(e, b"cref") {
        let target = cref.split_once(':').map_or(cref.as_str(), |(_, rest)| rest);
        let target = target.find('(').map_or(target, |index| &target[..index]);
        return Some(short_name(target).to_string());
    }
    attribute(e, b"name").or_else(|| attribute(e, b"langword"))
}

/// Character references and the five predefined entities. Anything else
/// is undeclared and yields `None`.
fn resolve_reference(e: &BytesRef) -> Option<String> {
    if let Ok(Some(ch)) = e.resolve_char_ref() {
        return Some(ch.to_string());
    }
    resolve_predefined_entity(&String::from_utf8_lossy(e)).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemberKind;

    fn parse(xml: &str) -> Vec<MemberRecord> {
        XmlDocParser::new().parse(xml).unwrap()
    }

    #[test]
    fn test_simple_type() {
        let records = parse(
            r#"<?xml version="1.0"?>
<doc>
    <assembly><name>Assembly-CSharp</name></assembly>
    <members>
        <member name="T:App.Player">
            <summary>
                Main player
            </summary>
        </member>
    </members>
</doc>
"#,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier.kind, MemberKind::Type);
        assert_eq!(records[0].identifier.owner, "App.Player");
        assert_eq!(records[0].summary, "Main player");
        assert_eq!(records[0].remarks, "");
        assert!(records[0].parameters.is_empty());
    }

    #[test]
    fn test_method_with_params_and_returns() {
        let records = parse(
            r#"<doc><members>
    <member name="M:Foo.Jump(System.Single,System.Boolean)">
        <summary>Jumps.</summary>
        <param name="height">How high.</param>
        <param name="force"/>
        <param>Unnamed</param>
        <returns>void</returns>
        <remarks>Only when grounded.</remarks>
    </member>
</members></doc>"#,
        );

        let record = &records[0];
        assert_eq!(record.identifier.member.as_deref(), Some("Jump"));
        assert_eq!(
            record.parameters,
            vec![
                Param::new("height", "How high."),
                Param::new("force", ""),
                Param::new("", "Unnamed"),
            ]
        );
        assert_eq!(record.returns, "void");
        assert_eq!(record.remarks, "Only when grounded.");
    }

    #[test]
    fn test_missing_members_element() {
        assert!(parse("<doc><assembly><name>X</name></assembly></doc>").is_empty());
    }

    #[test]
    fn test_empty_members_element() {
        assert!(parse("<doc><members/></doc>").is_empty());
        assert!(parse("<doc><members></members></doc>").is_empty());
    }

    #[test]
    fn test_malformed_and_unnamed_members_are_skipped() {
        let records = parse(
            r#"<doc><members>
    <member name="XYZ"><summary>ignored</summary></member>
    <member><summary>no name</summary></member>
    <member name=""/>
    <member name="T:Kept"/>
</members></doc>"#,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier.owner, "Kept");
    }

    #[test]
    fn test_inline_references_and_entities() {
        let records = parse(
            r#"<doc><members>
    <member name="M:App.Player.Heal(System.Int32)">
        <summary>Adds <paramref name="amount"/> to <see cref="P:App.Player.Health"/> if &lt; max, see <see langword="null"/>.</summary>
    </member>
</members></doc>"#,
        );

        assert_eq!(
            records[0].summary,
            "Adds amount to Health if < max, see null."
        );
    }

    #[test]
    fn test_inline_references_with_end_tag() {
        let records = parse(
            r#"<doc><members>
    <member name="M:App.Player.Heal(System.Int32)">
        <summary>Calls <see cref="M:A.Jump"></see> now</summary>
        <remarks>Pass <paramref name="amount"></paramref>, or <see cref="T:App.Bonus">a bonus</see>.</remarks>
    </member>
</members></doc>"#,
        );

        assert_eq!(records[0].summary, "Calls Jump now");
        assert_eq!(records[0].remarks, "Pass amount, or a bonus.");
    }

    #[test]
    fn test_nested_markup_and_cdata() {
        let records = parse(
            r#"<doc><members>
    <member name="T:App.Inventory">
        <summary><para>First.</para> <para>Second.</para></summary>
        <example><code><![CDATA[var x = a < b;]]></code></example>
    </member>
</members></doc>"#,
        );

        assert_eq!(records[0].summary, "First. Second.");
        assert_eq!(records[0].example, "var x = a < b;");
    }

    #[test]
    fn test_first_summary_wins() {
        let records = parse(
            r#"<doc><members>
    <member name="T:A"><summary>one</summary><summary>two</summary></member>
</members></doc>"#,
        );
        assert_eq!(records[0].summary, "one");
    }

    #[test]
    fn test_members_outside_members_element_are_ignored() {
        let records = parse(
            r#"<doc><member name="T:Stray"/><members><member name="T:Real"/></members></doc>"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier.owner, "Real");
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let parser = XmlDocParser::new();
        assert!(matches!(
            parser.parse("<doc><members></doc>"),
            Err(DocError::Xml { .. })
        ));
        assert!(matches!(parser.parse(""), Err(DocError::Xml { .. })));
        assert!(matches!(
            parser.parse("<doc><members>"),
            Err(DocError::Xml { .. })
        ));
    }

    #[test]
    fn test_second_root_is_an_error() {
        let err = XmlDocParser::new()
            .parse(r#"<doc><members><member name="T:A"/></members></doc><doc2/>"#)
            .unwrap_err();
        assert!(err.to_string().contains("second root element <doc2>"));
    }

    #[test]
    fn test_undeclared_entity_is_an_error() {
        let err = XmlDocParser::new()
            .parse(r#"<doc><members><member name="T:A"><summary>a &bogus; b</summary></member></members></doc>"#)
            .unwrap_err();
        assert!(matches!(err, DocError::Xml { .. }));
        assert!(err.to_string().contains("unknown entity &bogus;"));
    }

    #[test]
    fn test_character_references_are_resolved() {
        let records = parse(
            r#"<doc><members><member name="T:A"><summary>&#65;&#x42; &amp; &quot;C&quot;</summary></member></members></doc>"#,
        );
        assert_eq!(records[0].summary, "AB & \"C\"");
    }
}
