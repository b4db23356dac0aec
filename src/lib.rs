//! A rendering extension for [comrak](https://docs.rs/comrak) that turns
//! image-only paragraphs into HTML figures.
//!
//! An image occurring by itself in a paragraph, with nonempty alt content, is
//! rendered as a `<figure>` with a `<figcaption>` instead of a plain
//! paragraph.  The image's alt content becomes the caption, and may carry
//! inline markup:
//!
//! ``` md
//! ![**Figure:** [description](/link)](image.png "title")
//! ```
//!
//! The syntax is borrowed from [Pandoc](https://pandoc.org/MANUAL.html#images).
//! If you want a regular inline image, make sure it is not the only thing in
//! the paragraph, for example by inserting a nonbreaking space after it.
//!
//! ```
//! use comrak::Options;
//! use comrak_figures::markdown_to_html;
//!
//! let html = markdown_to_html(
//!     "![**Figure:** [description](/link)](image.png \"title\")\n",
//!     &Options::default(),
//! );
//! assert_eq!(
//!     html,
//!     concat!(
//!         "<figure>\n",
//!         "<img src=\"image.png\" alt=\"Figure: description\" title=\"title\">\n",
//!         "<figcaption><strong>Figure:</strong> <a href=\"/link\">description</a></figcaption>\n",
//!         "</figure>\n",
//!     ),
//! );
//! ```
//!
//! Everything other than paragraphs and images renders exactly as comrak's
//! default HTML formatter would; see [`html::format_node`] for the node
//! handling and [`html::format_document`] for driving a full render with
//! per-node [attributes](attributes::AttributeStore).

pub mod attributes;
pub mod html;


pub use crate::attributes::{AttributeFilter, AttributeStore};
pub use crate::html::{is_figure, FigureOptions};

use comrak::{parse_document, Arena, Options};

/// Render Markdown to HTML with figure support and default
/// [`FigureOptions`].
///
/// One-shot equivalent of [`comrak::markdown_to_html`].
pub fn markdown_to_html(md: &str, options: &Options) -> String {
    let arena = Arena::new();
    let root = parse_document(&arena, md, options);
    let mut output = String::new();
    html::format_document(root, options, FigureOptions::default(), &mut output)
        .unwrap_or_else(|_| unreachable!("writing to a String cannot fail"));
    output
}
