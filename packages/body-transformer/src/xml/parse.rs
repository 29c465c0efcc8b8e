//! Loading a body string into a mutable [`Document`].
//!
//! Parsing is delegated to `roxmltree`, which rejects malformed markup. The
//! body is wrapped in a synthetic root element before parsing so fragments
//! with several top-level nodes are accepted; the wrapper never reaches the
//! resulting tree.

use roxmltree::{ExpandedName, Node, NodeType};

use super::tree::{Attribute, Document, Element, NodeId, NodeKind};
use crate::error::Result;

/// Tag of the synthetic element wrapped around the body during parsing.
const WRAPPER_TAG: &str = "body-transformer-fragment";

/// Split a leading XML declaration off the body.
///
/// Returns `(declaration, rest)`. Whitespace before the declaration is
/// dropped together with it.
fn split_declaration(body: &str) -> (Option<&str>, &str) {
    let trimmed = body.trim_start();
    if !trimmed.starts_with("<?xml") {
        return (None, body);
    }
    // `<?xml-stylesheet ...?>` and friends are ordinary processing instructions
    if !trimmed[5..].starts_with(|c: char| c.is_ascii_whitespace() || c == '?') {
        return (None, body);
    }
    match trimmed.find("?>") {
        Some(end) => (Some(&trimmed[..end + 2]), &trimmed[end + 2..]),
        None => (None, body),
    }
}

/// Split a leading document type declaration off the body.
///
/// Returns `(doctype, rest)`. The doctype keeps the whitespace in front of
/// it, and an internal subset (`[...]`) may contain `>` inside quotes.
fn split_doctype(body: &str) -> (Option<&str>, &str) {
    let start = body.len() - body.trim_start().len();
    if !body[start..].starts_with("<!DOCTYPE") {
        return (None, body);
    }

    let mut in_subset = false;
    let mut quote = None;
    for (offset, c) in body[start..].char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[') => in_subset = true,
            (None, ']') => in_subset = false,
            (None, '>') if !in_subset => {
                let end = start + offset + 1;
                return (Some(&body[..end]), &body[end..]);
            }
            _ => {}
        }
    }
    (None, body)
}

/// Parse a body string into a document.
///
/// # Errors
/// Returns `XmlParse` if the body is not well-formed.
///
/// # Examples
/// ```
/// use body_transformer::xml::parse_document;
///
/// let doc = parse_document("<body><p>text</p></body>").unwrap();
/// assert_eq!(doc.find_elements(doc.root(), "p").len(), 1);
///
/// assert!(parse_document("<body><p>text</body>").is_err());
/// ```
pub fn parse_document(body: &str) -> Result<Document> {
    let (declaration, rest) = split_declaration(body);
    let (doctype, rest) = split_doctype(rest);
    // The doctype stays in front of the wrapper so its entities still resolve
    let wrapped = format!(
        "{}<{WRAPPER_TAG}>{rest}</{WRAPPER_TAG}>",
        doctype.unwrap_or_default()
    );
    let parsed = roxmltree::Document::parse(&wrapped)?;

    let mut doc = Document::new();
    if let Some(declaration) = declaration {
        doc.set_declaration(declaration);
    }
    if let Some(doctype) = doctype {
        doc.set_doctype(doctype);
    }

    let root = doc.root();
    let wrapper = parsed.root_element();
    for child in wrapper.children() {
        copy_node(&mut doc, root, child);
    }

    tracing::trace!(nodes = parsed.descendants().count(), "Parsed body");
    Ok(doc)
}

/// Copy a roxmltree node and its subtree under `parent`.
fn copy_node(doc: &mut Document, parent: NodeId, node: Node<'_, '_>) {
    let kind = match node.node_type() {
        NodeType::Element => NodeKind::Element(convert_element(node)),
        NodeType::Text => NodeKind::Text(node.text().unwrap_or_default().to_string()),
        NodeType::Comment => NodeKind::Comment(node.text().unwrap_or_default().to_string()),
        NodeType::PI => match node.pi() {
            Some(pi) => NodeKind::ProcessingInstruction {
                target: pi.target.to_string(),
                value: pi.value.map(str::to_string),
            },
            None => return,
        },
        NodeType::Root => return,
    };

    let id = doc.append_child(parent, kind);
    for child in node.children() {
        copy_node(doc, id, child);
    }
}

/// Build an element with its qualified tag, namespace declarations and
/// attributes in source order.
fn convert_element(node: Node<'_, '_>) -> Element {
    let mut element = Element::new(qualified_name(node, node.tag_name()));

    // Declarations introduced on this element (not inherited from the parent)
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|parent| {
            parent
                .namespaces()
                .map(|ns| (ns.name(), ns.uri()))
                .collect()
        })
        .unwrap_or_default();
    for ns in node.namespaces() {
        if inherited.contains(&(ns.name(), ns.uri())) {
            continue;
        }
        let name = match ns.name() {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        };
        element.attributes.push(Attribute::new(name, ns.uri()));
    }

    for attr in node.attributes() {
        let name = match attr.namespace().and_then(|uri| node.lookup_prefix(uri)) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", attr.name()),
            _ => attr.name().to_string(),
        };
        element.attributes.push(Attribute::new(name, attr.value()));
    }

    element
}

/// Tag name including its namespace prefix, as written in the source.
fn qualified_name(node: Node<'_, '_>, name: ExpandedName<'_, '_>) -> String {
    match name.namespace().and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", name.name()),
        _ => name.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;

    #[test]
    fn test_parse_single_root() {
        let doc = parse_document(r#"<body><p class="x">Hello</p></body>"#).unwrap();
        let root = doc.root();

        let body = doc.children(root)[0];
        assert_eq!(doc.tag(body), Some("body"));

        let p = doc.child_elements(body)[0];
        assert_eq!(doc.element(p).unwrap().attribute("class"), Some("x"));
        assert_eq!(
            doc.kind(doc.children(p)[0]),
            &NodeKind::Text("Hello".to_string())
        );
    }

    #[test]
    fn test_parse_fragment_with_text_around() {
        let doc = parse_document("A<table><tr/></table>B").unwrap();
        let root = doc.root();

        assert_eq!(doc.children(root).len(), 3);
        assert_eq!(doc.find_elements(root, "table").len(), 1);
    }

    #[test]
    fn test_parse_keeps_attribute_order() {
        let doc = parse_document(r#"<content type="t" data-embedded="true" id="1"/>"#).unwrap();
        let content = doc.find_elements(doc.root(), "content")[0];
        let names: Vec<_> = doc
            .element(content)
            .unwrap()
            .attributes
            .iter()
            .map(|a| a.name.clone())
            .collect();
        assert_eq!(names, ["type", "data-embedded", "id"]);
    }

    #[test]
    fn test_parse_resolves_entities() {
        let doc = parse_document(r#"<p title="a &amp; b">x &lt; y</p>"#).unwrap();
        let p = doc.find_elements(doc.root(), "p")[0];

        assert_eq!(doc.element(p).unwrap().attribute("title"), Some("a & b"));
        assert_eq!(
            doc.kind(doc.children(p)[0]),
            &NodeKind::Text("x < y".to_string())
        );
    }

    #[test]
    fn test_parse_keeps_comments_and_pis() {
        let doc = parse_document("<body><!-- note --><?render fast?></body>").unwrap();
        let body = doc.children(doc.root())[0];
        let children = doc.children(body);

        assert_eq!(
            doc.kind(children[0]),
            &NodeKind::Comment(" note ".to_string())
        );
        assert_eq!(
            doc.kind(children[1]),
            &NodeKind::ProcessingInstruction {
                target: "render".to_string(),
                value: Some("fast".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_declaration() {
        let doc = parse_document("<?xml version=\"1.0\"?>\n<body/>").unwrap();
        assert_eq!(doc.declaration(), Some("<?xml version=\"1.0\"?>"));
        assert_eq!(doc.find_elements(doc.root(), "body").len(), 1);
    }

    #[test]
    fn test_parse_doctype() {
        let doc = parse_document("<!DOCTYPE body><body><p>x</p></body>").unwrap();
        assert_eq!(doc.doctype(), Some("<!DOCTYPE body>"));
        assert_eq!(doc.find_elements(doc.root(), "p").len(), 1);
    }

    #[test]
    fn test_parse_doctype_entities() {
        let body = r#"<!DOCTYPE body [<!ENTITY nbsp "&#160;">]><body>a&nbsp;b</body>"#;
        let doc = parse_document(body).unwrap();
        let text: String = doc
            .descendants(doc.root())
            .into_iter()
            .filter_map(|id| match doc.kind(id) {
                NodeKind::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(text, "a\u{a0}b");
    }

    #[test]
    fn test_parse_declaration_and_doctype() {
        let doc = parse_document("<?xml version=\"1.0\"?>\n<!DOCTYPE body>\n<body/>").unwrap();
        assert_eq!(doc.declaration(), Some("<?xml version=\"1.0\"?>"));
        assert_eq!(doc.doctype(), Some("\n<!DOCTYPE body>"));
        assert_eq!(doc.find_elements(doc.root(), "body").len(), 1);
    }

    #[test]
    fn test_parse_namespace_prefix() {
        let doc =
            parse_document(r#"<body xmlns:ft="http://ft.com/ns"><ft:note ft:kind="x"/></body>"#)
                .unwrap();
        let body = doc.find_elements(doc.root(), "body")[0];
        let note = doc.find_elements(doc.root(), "ft:note")[0];

        assert_eq!(
            doc.element(body).unwrap().attribute("xmlns:ft"),
            Some("http://ft.com/ns")
        );
        // Inherited declarations are not repeated
        assert_eq!(doc.element(note).unwrap().attribute("xmlns:ft"), None);
        assert_eq!(doc.element(note).unwrap().attribute("ft:kind"), Some("x"));
    }

    #[test]
    fn test_parse_unclosed_tag() {
        let err = parse_document("<body><p>text</body>").unwrap_err();
        assert!(matches!(err, TransformError::XmlParse(_)));
    }

    #[test]
    fn test_parse_unknown_entity() {
        assert!(parse_document("<p>a&nbsp;b</p>").is_err());
    }

    #[test]
    fn test_split_declaration() {
        assert_eq!(split_declaration("<body/>"), (None, "<body/>"));
        assert_eq!(
            split_declaration("  <?xml version=\"1.0\"?><body/>"),
            (Some("<?xml version=\"1.0\"?>"), "<body/>")
        );
        assert_eq!(
            split_declaration("<?xml-stylesheet href=\"a\"?><body/>"),
            (None, "<?xml-stylesheet href=\"a\"?><body/>")
        );
    }

    #[test]
    fn test_split_doctype() {
        assert_eq!(split_doctype("<body/>"), (None, "<body/>"));
        assert_eq!(
            split_doctype("\n<!DOCTYPE body>\n<body/>"),
            (Some("\n<!DOCTYPE body>"), "\n<body/>")
        );
        assert_eq!(
            split_doctype(r#"<!DOCTYPE body [<!ENTITY gt2 "a>b">]><body/>"#),
            (Some(r#"<!DOCTYPE body [<!ENTITY gt2 "a>b">]>"#), "<body/>")
        );
        // Unterminated declarations are left for the parser to reject
        assert_eq!(split_doctype("<!DOCTYPE body"), (None, "<!DOCTYPE body"));
    }
}
