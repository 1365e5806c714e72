use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

pub trait TextExtractor: Send + Sync {
    /// Return the human-visible text of `input`.
    fn visible_text(&self, input: &str) -> String;
}

/// Extracts visible text from HTML-ish input.
///
/// Text nodes are concatenated in document order; block-level elements
/// contribute a separating space so adjacent paragraphs do not fuse.
/// Plain text goes through the same parser so character references such as
/// `&amp;` or `&nbsp;` are decoded either way.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisibleTextExtractor;

impl TextExtractor for VisibleTextExtractor {
    fn visible_text(&self, input: &str) -> String {
        let document = Html::parse_document(input);
        let mut out = String::with_capacity(input.len() / 2);
        for child in document.root_element().children() {
            visit_node(child, &mut out);
        }
        out
    }
}

fn visit_node(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(_) => {
            if let Some(element) = ElementRef::wrap(node) {
                visit_element(element, out);
            }
        }
        _ => {
            for child in node.children() {
                visit_node(child, out);
            }
        }
    }
}

fn visit_element(element: ElementRef<'_>, out: &mut String) {
    let tag = element.value().name().to_ascii_lowercase();
    match tag.as_str() {
        "script" | "style" | "noscript" | "template" => {}
        "br" | "hr" => out.push(' '),
        "p" | "div" | "section" | "article" | "header" | "footer" | "nav" | "li" | "ul"
        | "ol" | "table" | "tr" | "td" | "th" | "blockquote" | "h1" | "h2" | "h3" | "h4"
        | "h5" | "h6" | "title" | "figcaption" => {
            out.push(' ');
            visit_children(element, out);
            out.push(' ');
        }
        _ => visit_children(element, out),
    }
}

fn visit_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        visit_node(child, out);
    }
}
