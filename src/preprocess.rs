// Document cleanup: strip non-content tags, and derive boilerplate-free copies
// of a content region.

use std::sync::LazyLock;

use ego_tree::iter::Edge;
use ego_tree::{NodeId, NodeRef};
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Tags to completely remove (including all children).
const REMOVE_TAGS: &[&str] = &[
    "script", "style", "head", "noscript", "template",
    // form controls carry no article text
    "input", "button", "select", "textarea",
    // embedded content
    "embed", "object", "applet", "iframe", "param",
];

/// Tags whose element is dropped but whose children are preserved.
const REMOVE_TAG_KEEP_CHILDREN: &[&str] = &["form"];

/// Selectors for structural boilerplate inside a content region.
pub const BOILERPLATE_SELECTORS: &[&str] = &[
    ".profile",
    ".author",
    ".company",
    ".shop",
    ".service",
    ".footer",
    ".sidebar",
    ".related",
    ".recommend",
    ".nav",
    "header",
    "footer",
    "aside",
];

static BOILERPLATE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(&BOILERPLATE_SELECTORS.join(", ")).unwrap());

/// What the serializer does with an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Keep,
    Remove,
    Unwrap,
}

/// Return a copy of `doc` without scripts, styles, `<head>`, comments,
/// form controls and embedded objects.
///
/// Scraper's tree is not meant to be mutated in place, so the document is
/// serialized while skipping the unwanted nodes and parsed again.
pub fn clean(doc: &Html) -> Html {
    let mut out = String::new();
    serialize_node(&doc.tree.root(), &mut out, &|el: &ElementRef<'_>| {
        tag_disposition(el.value().name())
    });
    Html::parse_document(&out)
}

/// Return a working copy of `region` with every descendant matching
/// [`BOILERPLATE_SELECTORS`] removed. The region element itself is kept even
/// if it matches.
pub fn strip_boilerplate(region: ElementRef<'_>) -> Html {
    let root_id = region.id();
    let mut out = String::new();
    serialize_node(&region, &mut out, &|el: &ElementRef<'_>| {
        if el.id() != root_id && BOILERPLATE.matches(el) {
            Disposition::Remove
        } else {
            tag_disposition(el.value().name())
        }
    });
    Html::parse_fragment(&out)
}

fn tag_disposition(tag: &str) -> Disposition {
    if REMOVE_TAGS.contains(&tag) {
        Disposition::Remove
    } else if REMOVE_TAG_KEEP_CHILDREN.contains(&tag) {
        Disposition::Unwrap
    } else {
        Disposition::Keep
    }
}

/// Serialize the subtree under `root`, consulting `decide` for every element.
///
/// Iterates over open/close edges so arbitrarily deep markup does not grow
/// the call stack.
fn serialize_node(
    root: &NodeRef<'_, Node>,
    out: &mut String,
    decide: &dyn Fn(&ElementRef<'_>) -> Disposition,
) {
    // Removed subtree currently being skipped, until its close edge.
    let mut skipping: Option<NodeId> = None;
    // One entry per open element: the close tag to emit, if any.
    let mut open: Vec<Option<&str>> = Vec::new();

    for edge in root.traverse() {
        match edge {
            Edge::Open(node) => {
                if skipping.is_some() {
                    continue;
                }
                match node.value() {
                    Node::Element(el) => {
                        let Some(element) = ElementRef::wrap(node) else {
                            continue;
                        };
                        match decide(&element) {
                            Disposition::Remove => skipping = Some(node.id()),
                            Disposition::Unwrap => open.push(None),
                            Disposition::Keep => {
                                let tag = el.name();
                                out.push('<');
                                out.push_str(tag);
                                for (attr, val) in el.attrs() {
                                    out.push(' ');
                                    out.push_str(attr);
                                    out.push_str("=\"");
                                    escape_into(val, out, true);
                                    out.push('"');
                                }
                                if is_void_element(tag) {
                                    out.push_str(" />");
                                    open.push(None);
                                } else {
                                    out.push('>');
                                    open.push(Some(tag));
                                }
                            }
                        }
                    }
                    // Decoded entities must not turn back into markup on the second parse.
                    Node::Text(text) => escape_into(&text.text, out, false),
                    Node::Document
                    | Node::Fragment
                    | Node::Comment(_)
                    | Node::ProcessingInstruction(_)
                    | Node::Doctype(_) => {}
                }
            }
            Edge::Close(node) => {
                if let Some(id) = skipping {
                    if id == node.id() {
                        skipping = None;
                    }
                    continue;
                }
                if !node.value().is_element() {
                    continue;
                }
                if let Some(Some(tag)) = open.pop() {
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
            }
        }
    }
}

fn escape_into(val: &str, out: &mut String, attr: bool) {
    for ch in val.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
