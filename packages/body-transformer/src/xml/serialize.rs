//! Writing a [`Document`] back to markup.

use std::fmt::Write;

use super::tree::{Document, NodeId, NodeKind};
use crate::error::Result;

/// Escape character data for element content.
fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Escape character data for a double-quoted attribute value.
fn escape_attribute(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(c),
        }
    }
}

/// Serialize a document to a string.
///
/// Elements without children are written self-closing (`<br/>`). Text is
/// escaped, so the output parses back to the same tree.
///
/// # Errors
/// Returns `Serialize` if writing to the output buffer fails.
///
/// # Examples
/// ```
/// use body_transformer::xml::{parse_document, write_document};
///
/// let doc = parse_document("<p>a &amp; b<br></br></p>").unwrap();
/// assert_eq!(write_document(&doc).unwrap(), "<p>a &amp; b<br/></p>");
/// ```
pub fn write_document(doc: &Document) -> Result<String> {
    let mut out = String::new();
    if let Some(declaration) = doc.declaration() {
        out.push_str(declaration);
    }
    if let Some(doctype) = doc.doctype() {
        out.push_str(doctype);
    }
    for child in doc.children(doc.root()) {
        write_node(doc, *child, &mut out)?;
    }
    Ok(out)
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) -> Result<()> {
    match doc.kind(id) {
        NodeKind::Root => {
            for child in doc.children(id) {
                write_node(doc, *child, out)?;
            }
        }
        NodeKind::Element(element) => {
            write!(out, "<{}", element.tag)?;
            for attr in &element.attributes {
                write!(out, " {}=\"", attr.name)?;
                escape_attribute(out, &attr.value);
                out.push('"');
            }

            let children = doc.children(id);
            if children.is_empty() {
                out.push_str("/>");
                return Ok(());
            }

            out.push('>');
            for child in children {
                write_node(doc, *child, out)?;
            }
            write!(out, "</{}>", element.tag)?;
        }
        NodeKind::Text(text) => escape_text(out, text),
        NodeKind::Comment(text) => write!(out, "<!--{text}-->")?,
        NodeKind::ProcessingInstruction { target, value } => match value {
            Some(value) => write!(out, "<?{target} {value}?>")?,
            None => write!(out, "<?{target}?>")?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    fn round_trip(body: &str) -> String {
        write_document(&parse_document(body).unwrap()).unwrap()
    }

    #[test]
    fn test_write_preserves_markup() {
        let body = r#"<body><p class="a" id="b">Hello <em>world</em></p></body>"#;
        assert_eq!(round_trip(body), body);
    }

    #[test]
    fn test_write_empty_elements_self_closing() {
        assert_eq!(round_trip("<p></p>"), "<p/>");
        assert_eq!(round_trip("<p><br /></p>"), "<p><br/></p>");
    }

    #[test]
    fn test_write_escapes_text_and_attributes() {
        assert_eq!(
            round_trip(r#"<a title="&quot;x&quot; &amp; y">1 &lt; 2</a>"#),
            r#"<a title="&quot;x&quot; &amp; y">1 &lt; 2</a>"#
        );
    }

    #[test]
    fn test_write_fragment_whitespace() {
        let body = "\n<p>1</p>\n<p>2</p>\n";
        assert_eq!(round_trip(body), body);
    }

    #[test]
    fn test_write_declaration_comment_and_pi() {
        assert_eq!(
            round_trip("<?xml version=\"1.0\"?><body><!--c--><?x y?></body>"),
            "<?xml version=\"1.0\"?><body><!--c--><?x y?></body>"
        );
    }

    #[test]
    fn test_write_doctype() {
        let body = "<?xml version=\"1.0\"?>\n<!DOCTYPE body>\n<body><p>x</p></body>";
        assert_eq!(round_trip(body), body);
        assert_eq!(round_trip("<!DOCTYPE body><body/>"), "<!DOCTYPE body><body/>");
    }

    #[test]
    fn test_write_detached_node_is_gone() {
        let mut doc = parse_document("<body>A<table><tr/></table>B</body>").unwrap();
        let table = doc.find_elements(doc.root(), "table")[0];
        doc.detach(table);

        assert_eq!(write_document(&doc).unwrap(), "<body>AB</body>");
    }
}
