//! Parses a small document, attaches attributes to the figure paragraph,
//! and prints the rendered HTML.

use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena, Options};
use comrak_figures::{html, FigureOptions};

fn main() {
    let arena = Arena::new();
    let options = Options::default();
    let root = parse_document(
        &arena,
        "![**Figure 1.** A [shed](/sheds/12)](shed.jpg \"the shed\")\n",
        &options,
    );

    let mut figures = FigureOptions::default();
    for node in root.descendants() {
        match node.data.borrow().value {
            NodeValue::Paragraph => figures.attributes.insert(node, "class", "photo"),
            NodeValue::Image(..) => figures.attributes.insert(node, "loading", "lazy"),
            _ => {}
        }
    }

    let mut out = String::new();
    html::format_document(root, &options, figures, &mut out)
        .unwrap_or_else(|_| unreachable!("writing to a String cannot fail"));

    println!("{}", out);
}
