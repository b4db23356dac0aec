//! Per-node HTML attributes and per-element allow-list filtering.
//!
//! comrak's AST has no attribute storage of its own, so attributes live in a
//! side table keyed by node identity and are attached between parsing and
//! rendering.  Which names actually reach the output depends on the element
//! being rendered: figures accept any global attribute, plain paragraphs a
//! restricted subset, images the global set plus `<img>`-specific names.

use std::fmt::{self, Write};

use comrak::html::Context;
use comrak::nodes::AstNode;
use phf::phf_set;
use rustc_hash::FxHashMap;

static GLOBAL_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "accesskey",
    "autocapitalize",
    "autofocus",
    "class",
    "contenteditable",
    "dir",
    "draggable",
    "enterkeyhint",
    "hidden",
    "id",
    "inert",
    "inputmode",
    "is",
    "itemid",
    "itemprop",
    "itemref",
    "itemscope",
    "itemtype",
    "lang",
    "nonce",
    "part",
    "role",
    "slot",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
};

static PARAGRAPH_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "class",
    "dir",
    "hidden",
    "id",
    "lang",
    "style",
    "title",
};

static IMAGE_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "align",
    "border",
    "crossorigin",
    "decoding",
    "fetchpriority",
    "height",
    "ismap",
    "loading",
    "referrerpolicy",
    "sizes",
    "srcset",
    "usemap",
    "width",
};

/// Allow-list applied to attribute names when rendering a given element.
/// Any `data-*` name passes every filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeFilter {
    /// The HTML global attributes; used for `<figure>`.
    Global,

    /// The subset permitted on plain `<p>` elements.
    Paragraph,

    /// The global attributes plus `<img>`-specific ones.
    Image,
}

impl AttributeFilter {
    /// Whether an attribute called `name` survives this filter.
    pub fn allows(self, name: &str) -> bool {
        if name.starts_with("data-") {
            return true;
        }
        match self {
            AttributeFilter::Global => GLOBAL_ATTRIBUTES.contains(name),
            AttributeFilter::Paragraph => PARAGRAPH_ATTRIBUTES.contains(name),
            AttributeFilter::Image => {
                GLOBAL_ATTRIBUTES.contains(name) || IMAGE_ATTRIBUTES.contains(name)
            }
        }
    }
}

/// Attributes for AST nodes, keyed by node identity.
///
/// Nodes are arena-allocated and never move during a render, so the address
/// of a node's data cell identifies it for as long as the arena is alive.
/// Attributes render in insertion order; inserting an existing name replaces
/// its value in place.
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    map: FxHashMap<usize, Vec<(String, String)>>,
}

impl AttributeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `name="value"` to `node`, replacing any existing value for
    /// the same name.
    pub fn insert<'a>(&mut self, node: &'a AstNode<'a>, name: &str, value: &str) {
        let attrs = self.map.entry(key(node)).or_default();
        match attrs.iter_mut().find(|a| a.0 == name) {
            Some(a) => a.1 = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    /// The attributes attached to `node`, in insertion order.
    pub fn get<'a>(&self, node: &'a AstNode<'a>) -> Option<&[(String, String)]> {
        self.map.get(&key(node)).map(|attrs| attrs.as_slice())
    }

    /// Whether `node` has any attributes attached.
    pub fn contains<'a>(&self, node: &'a AstNode<'a>) -> bool {
        self.map.contains_key(&key(node))
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn key<'a>(node: &'a AstNode<'a>) -> usize {
    node.data.as_ptr() as usize
}

pub(crate) fn render_attributes<T>(
    context: &mut Context<T>,
    attrs: &[(String, String)],
    filter: AttributeFilter,
) -> fmt::Result {
    for (name, value) in attrs {
        if !filter.allows(name) {
            continue;
        }
        context.write_str(" ")?;
        context.write_str(name)?;
        context.write_str("=\"")?;
        context.escape(value)?;
        context.write_str("\"")?;
    }
    Ok(())
}
