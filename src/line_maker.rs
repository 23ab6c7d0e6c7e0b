// Line extraction from a content region.

use std::sync::LazyLock;

use ego_tree::iter::Edge;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Selector};

use crate::line::Line;
use crate::preprocess;
use crate::region::{ContentRegion, Profile, RegionKind};

/// Elements whose text becomes a line in structural mode.
static STRUCTURAL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p, li, h2, h3, h4").unwrap());

/// Tags that start and end a line in whole-region mode.
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "body",
    "caption",
    "center",
    "dd",
    "details",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "legend",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "summary",
    "table",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

/// How lines are cut out of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// One line per `p`/`li`/`h2`-`h4` element.
    Structural,
    /// One line per `p` of the synthetic paragraph region.
    Paragraphs,
    /// Full visible text, broken at block boundaries and `<br>`.
    WholeRegion,
}

impl ExtractionMode {
    pub fn for_region(kind: RegionKind, profile: Profile) -> Self {
        match (kind, profile) {
            (RegionKind::Paragraphs, _) => ExtractionMode::Paragraphs,
            (_, Profile::StructuralCleanup) => ExtractionMode::Structural,
            (_, Profile::KeywordFilter) => ExtractionMode::WholeRegion,
        }
    }
}

/// Extract raw lines from `region` in document order.
///
/// Under [`Profile::StructuralCleanup`] each region element is first copied
/// with its structural boilerplate removed.
pub fn extract_lines(region: &ContentRegion<'_>, profile: Profile) -> Vec<Line> {
    match ExtractionMode::for_region(region.kind, profile) {
        ExtractionMode::Paragraphs => region
            .elements
            .iter()
            .filter_map(|p| Line::new(&element_text(*p), "p"))
            .collect(),
        ExtractionMode::Structural => region
            .elements
            .iter()
            .flat_map(|el| {
                let copy = preprocess::strip_boilerplate(*el);
                structural_lines(copy.root_element())
            })
            .collect(),
        ExtractionMode::WholeRegion => region
            .elements
            .iter()
            .flat_map(|el| block_lines(*el))
            .collect(),
    }
}

/// Text of every `p`, `li`, `h2`, `h3`, `h4` under `root`. Nested matches
/// (a `p` inside an `li`) each produce their own line.
pub fn structural_lines(root: ElementRef<'_>) -> Vec<Line> {
    root.select(&STRUCTURAL)
        .filter_map(|el| Line::new(&element_text(el), el.value().name()))
        .collect()
}

/// Visible text of `root`, one line per block-level run.
pub fn block_lines(root: ElementRef<'_>) -> Vec<Line> {
    let mut walker = Walker::new(root.value().name());
    walker.visit(*root);
    walker.flush();
    walker.lines
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Walk state threaded through the recursive DOM walk.
struct Walker {
    lines: Vec<Line>,
    buffer: String,
    /// Tag of the block the buffered text belongs to.
    buffer_tag: Option<String>,
    blocks: Vec<String>,
}

impl Walker {
    fn new(root_tag: &str) -> Self {
        Self {
            lines: Vec::new(),
            buffer: String::new(),
            buffer_tag: None,
            blocks: vec![root_tag.to_string()],
        }
    }

    /// Emit the buffered text as a line and start a new one.
    fn flush(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        if let Some(tag) = self.buffer_tag.take() {
            if let Some(line) = Line::new(&text, &tag) {
                self.lines.push(line);
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.buffer_tag.is_none() {
            self.buffer_tag = self.blocks.last().cloned();
        }
        self.buffer.push_str(text);
    }

    /// Walk the subtree under `root` edge by edge, so nesting depth does not
    /// grow the call stack.
    fn visit(&mut self, root: NodeRef<'_, Node>) {
        for edge in root.traverse() {
            match edge {
                Edge::Open(node) => match node.value() {
                    Node::Element(el) => {
                        let tag = el.name();
                        if tag == "br" {
                            self.flush();
                        } else if is_block_tag(tag) {
                            self.flush();
                            self.blocks.push(tag.to_string());
                        }
                    }
                    Node::Text(text) => self.push_text(&text.text),
                    _ => {}
                },
                Edge::Close(node) => {
                    if let Node::Element(el) = node.value() {
                        if is_block_tag(el.name()) {
                            self.flush();
                            self.blocks.pop();
                        }
                    }
                }
            }
        }
    }
}
