//! Figure-aware HTML formatting.
//!
//! The formatter here overrides comrak's default output for exactly two node
//! kinds.  A paragraph whose sole child is an image with nested inline
//! content becomes a `<figure>`, the image's inline content is rendered a
//! second time as rich markup inside a `<figcaption>`, and every other node
//! kind falls through to [`format_node_default`].

use std::fmt::{self, Write};

use comrak::html::{format_document_with_formatter, format_node_default, ChildRendering, Context};
use comrak::nodes::{AstNode, NodeLink, NodeValue};
use comrak::options::Plugins;
use comrak::Options;

use crate::attributes::{self, AttributeFilter, AttributeStore};

/// Figure-specific rendering configuration, carried through the render as
/// formatter user data and read-only for its duration.
///
/// The unsafe-URL allowance is not duplicated here; it rides on the host's
/// `Options.render.unsafe` flag like every other URL in the document.
#[derive(Debug, Clone, Default)]
pub struct FigureOptions {
    /// Emit XHTML-style self-closing tags (`<img />`).
    pub xhtml: bool,

    /// Attributes to render on paragraph, figure and image elements.
    pub attributes: AttributeStore,
}

/// Render a document rooted at `root` to `output` with figure support.
///
/// The [`FigureOptions`] are passed back on success so a store of node
/// attributes can be reused for another render of the same tree.
pub fn format_document<'a>(
    root: &'a AstNode<'a>,
    options: &Options,
    figures: FigureOptions,
    output: &mut dyn fmt::Write,
) -> Result<FigureOptions, fmt::Error> {
    format_document_with_plugins(root, options, figures, output, &Plugins::default())
}

/// Like [`format_document`], but with comrak plugins.
pub fn format_document_with_plugins<'a>(
    root: &'a AstNode<'a>,
    options: &Options,
    figures: FigureOptions,
    output: &mut dyn fmt::Write,
    plugins: &Plugins,
) -> Result<FigureOptions, fmt::Error> {
    format_document_with_formatter(root, options, output, plugins, format_node, figures)
}

/// The formatter function itself, suitable for passing to
/// [`format_document_with_formatter`] directly.
pub fn format_node<'a>(
    context: &mut Context<FigureOptions>,
    node: &'a AstNode<'a>,
    entering: bool,
) -> Result<ChildRendering, fmt::Error> {
    match node.data.borrow().value {
        NodeValue::Paragraph => render_paragraph(context, node, entering),
        NodeValue::Image(ref nl) => render_image(context, node, nl, entering),
        _ => format_node_default(context, node, entering),
    }
}

/// Whether `node` is a paragraph whose sole child is an image that itself
/// has nested inline content.
///
/// Evaluated independently on every enter and exit call that needs it; the
/// tree is stable during a render, so the four call sites always agree.
pub fn is_figure<'a>(node: &'a AstNode<'a>) -> bool {
    if !matches!(node.data.borrow().value, NodeValue::Paragraph) {
        return false;
    }
    let child = match node.first_child() {
        Some(child) => child,
        None => return false,
    };
    match node.last_child() {
        Some(last) if std::ptr::eq(child, last) => {}
        _ => return false,
    }
    matches!(child.data.borrow().value, NodeValue::Image(..)) && child.first_child().is_some()
}

fn render_paragraph<'a>(
    context: &mut Context<FigureOptions>,
    node: &'a AstNode<'a>,
    entering: bool,
) -> Result<ChildRendering, fmt::Error> {
    let figure = is_figure(node);

    // Plain paragraphs only need handling here when they carry attributes;
    // tight-list paragraphs have no tag to put them on either way.
    if !figure && (!context.user.attributes.contains(node) || in_tight_list(node)) {
        return format_node_default(context, node, entering);
    }

    let (name, filter) = if figure {
        ("figure", AttributeFilter::Global)
    } else {
        ("p", AttributeFilter::Paragraph)
    };

    if entering {
        context.cr()?;
        context.write_str("<")?;
        context.write_str(name)?;
        if context.options.render.sourcepos {
            write!(context, " data-sourcepos=\"{}\"", node.data.borrow().sourcepos)?;
        }
        // Copied out so rendering can borrow the context mutably.
        let attrs = context.user.attributes.get(node).map(<[_]>::to_vec);
        if let Some(attrs) = attrs {
            attributes::render_attributes(context, &attrs, filter)?;
        }
        context.write_str(">")?;
        if figure {
            context.write_str("\n")?;
        }
    } else {
        context.write_str("</")?;
        context.write_str(name)?;
        context.write_str(">\n")?;
    }
    Ok(ChildRendering::HTML)
}

fn render_image<'a>(
    context: &mut Context<FigureOptions>,
    node: &'a AstNode<'a>,
    nl: &NodeLink,
    entering: bool,
) -> Result<ChildRendering, fmt::Error> {
    let caption = node.first_child().is_some() && node.parent().map_or(false, is_figure);

    if !entering {
        if caption {
            context.write_str("</figcaption>\n")?;
        }
        return Ok(ChildRendering::HTML);
    }

    context.write_str("<img")?;
    if context.options.render.sourcepos {
        write!(context, " data-sourcepos=\"{}\"", node.data.borrow().sourcepos)?;
    }
    context.write_str(" src=\"")?;
    if context.options.render.r#unsafe || !dangerous_url(nl.url.as_bytes()) {
        context.escape_href(&nl.url)?;
    }
    context.write_str("\" alt=\"")?;
    let mut alt = String::new();
    collect_text(node, &mut alt);
    context.escape(&alt)?;
    context.write_str("\"")?;
    if !nl.title.is_empty() {
        context.write_str(" title=\"")?;
        context.escape(&nl.title)?;
        context.write_str("\"")?;
    }
    let attrs = context.user.attributes.get(node).map(<[_]>::to_vec);
    if let Some(attrs) = attrs {
        attributes::render_attributes(context, &attrs, AttributeFilter::Image)?;
    }
    context.write_str(if context.user.xhtml { " />" } else { ">" })?;

    if caption {
        // The children render a second time, as inline HTML, for the
        // caption; the plain-text pass above only fed the alt attribute.
        context.write_str("\n<figcaption>")?;
        return Ok(ChildRendering::HTML);
    }
    Ok(ChildRendering::Skip)
}

/// Flattens the text of `node`'s descendants into `output`: literal text and
/// code spans are kept, line breaks become single spaces, and inline
/// wrappers contribute their own descendants.
fn collect_text<'a>(node: &'a AstNode<'a>, output: &mut String) {
    for child in node.children() {
        match child.data.borrow().value {
            NodeValue::Text(ref literal) => output.push_str(literal),
            NodeValue::Code(ref nc) => output.push_str(&nc.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
            _ => collect_text(child, output),
        }
    }
}

fn in_tight_list<'a>(node: &'a AstNode<'a>) -> bool {
    node.parent()
        .and_then(|n| n.parent())
        .map_or(false, |n| match n.data.borrow().value {
            NodeValue::List(ref nl) => nl.tight,
            _ => false,
        })
}

/// Destination URLs suppressed unless unsafe rendering is enabled: the
/// script-executing schemes, plus `data:` for anything but plain images.
pub(crate) fn dangerous_url(input: &[u8]) -> bool {
    let has_prefix =
        |prefix: &[u8]| input.len() >= prefix.len() && input[..prefix.len()].eq_ignore_ascii_case(prefix);

    if has_prefix(b"data:") {
        return !(has_prefix(b"data:image/png")
            || has_prefix(b"data:image/gif")
            || has_prefix(b"data:image/jpeg")
            || has_prefix(b"data:image/webp"));
    }
    has_prefix(b"javascript:") || has_prefix(b"vbscript:") || has_prefix(b"file:")
}
