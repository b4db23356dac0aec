use super::*;

#[test]
fn image_alone_with_rich_alt_becomes_figure() {
    html(
        "![**Figure:** [description](/link)](image.png \"title\")\n",
        concat!(
            "<figure>\n",
            "<img src=\"image.png\" alt=\"Figure: description\" title=\"title\">\n",
            "<figcaption><strong>Figure:</strong> <a href=\"/link\">description</a></figcaption>\n",
            "</figure>\n",
        ),
    );
}

#[test]
fn image_alone_with_plain_alt_becomes_figure() {
    // Bare alt text still parses as a text child of the image, so it
    // qualifies and captions as unformatted text.
    html(
        "![circuit diagram](circuit.svg)\n",
        concat!(
            "<figure>\n",
            "<img src=\"circuit.svg\" alt=\"circuit diagram\">\n",
            "<figcaption>circuit diagram</figcaption>\n",
            "</figure>\n",
        ),
    );
}

#[test]
fn image_with_empty_alt_stays_a_paragraph() {
    html(
        "![](image.png \"title\")\n",
        "<p><img src=\"image.png\" alt=\"\" title=\"title\"></p>\n",
    );
}

#[test]
fn two_images_in_one_paragraph_stay_a_paragraph() {
    html(
        "![a](x.png) ![b](y.png)\n",
        "<p><img src=\"x.png\" alt=\"a\"> <img src=\"y.png\" alt=\"b\"></p>\n",
    );
}

#[test]
fn image_with_trailing_text_stays_a_paragraph() {
    html(
        "![**alt**](image.png) trailing\n",
        "<p><img src=\"image.png\" alt=\"alt\"> trailing</p>\n",
    );
}

#[test]
fn consecutive_figures_and_paragraphs() {
    html(
        concat!(
            "![**Figure:** [description](/link)](image.png \"title\")\n",
            "\n",
            "![](image.png \"title\")\n",
            "\n",
            "![**Figure:** [description](/link)](image.png \"title\")\n",
            "![**alt**](image.png \"title\")\n",
        ),
        concat!(
            "<figure>\n",
            "<img src=\"image.png\" alt=\"Figure: description\" title=\"title\">\n",
            "<figcaption><strong>Figure:</strong> <a href=\"/link\">description</a></figcaption>\n",
            "</figure>\n",
            "<p><img src=\"image.png\" alt=\"\" title=\"title\"></p>\n",
            "<p><img src=\"image.png\" alt=\"Figure: description\" title=\"title\">\n",
            "<img src=\"image.png\" alt=\"alt\" title=\"title\"></p>\n",
        ),
    );
}

#[test]
fn code_span_in_caption() {
    html(
        "![the `main` loop](loop.png)\n",
        concat!(
            "<figure>\n",
            "<img src=\"loop.png\" alt=\"the main loop\">\n",
            "<figcaption>the <code>main</code> loop</figcaption>\n",
            "</figure>\n",
        ),
    );
}

#[test]
fn soft_break_flattens_to_space_in_alt() {
    html(
        "![first\nsecond](x.png)\n",
        concat!(
            "<figure>\n",
            "<img src=\"x.png\" alt=\"first second\">\n",
            "<figcaption>first\nsecond</figcaption>\n",
            "</figure>\n",
        ),
    );
}

#[test]
fn nested_image_contributes_alt_text_only() {
    html(
        "![a ![b](y.png)](x.png)\n",
        concat!(
            "<figure>\n",
            "<img src=\"x.png\" alt=\"a b\">\n",
            "<figcaption>a <img src=\"y.png\" alt=\"b\"></figcaption>\n",
            "</figure>\n",
        ),
    );
}

#[test]
fn missing_destination_renders_empty_src() {
    html(
        "![diagram]()\n",
        concat!(
            "<figure>\n",
            "<img src=\"\" alt=\"diagram\">\n",
            "<figcaption>diagram</figcaption>\n",
            "</figure>\n",
        ),
    );
}

#[test]
fn figure_inside_block_quote() {
    html(
        "> ![quoted](x.png)\n",
        concat!(
            "<blockquote>\n",
            "<figure>\n",
            "<img src=\"x.png\" alt=\"quoted\">\n",
            "<figcaption>quoted</figcaption>\n",
            "</figure>\n",
            "</blockquote>\n",
        ),
    );
}

#[test]
fn figure_inside_tight_list_item() {
    html(
        "- ![listed](x.png)\n",
        concat!(
            "<ul>\n",
            "<li>\n",
            "<figure>\n",
            "<img src=\"x.png\" alt=\"listed\">\n",
            "<figcaption>listed</figcaption>\n",
            "</figure>\n",
            "</li>\n",
            "</ul>\n",
        ),
    );
}

#[test]
fn dangerous_destination_is_suppressed() {
    html(
        "![click](javascript:alert(1))\n",
        concat!(
            "<figure>\n",
            "<img src=\"\" alt=\"click\">\n",
            "<figcaption>click</figcaption>\n",
            "</figure>\n",
        ),
    );
}

#[test]
fn dangerous_destination_survives_unsafe_mode() {
    html_opts(
        "![click](javascript:alert(1))\n",
        concat!(
            "<figure>\n",
            "<img src=\"javascript:alert(1)\" alt=\"click\">\n",
            "<figcaption>click</figcaption>\n",
            "</figure>\n",
        ),
        |opts| opts.render.r#unsafe = true,
    );
}

#[test]
fn data_image_destination_is_not_dangerous() {
    html(
        "![dot](data:image/png;base64,iVBOR)\n",
        concat!(
            "<figure>\n",
            "<img src=\"data:image/png;base64,iVBOR\" alt=\"dot\">\n",
            "<figcaption>dot</figcaption>\n",
            "</figure>\n",
        ),
    );
}

#[test]
fn xhtml_mode_self_closes_img() {
    html_figures(
        "![](image.png)\n\n![figure](image.png)\n",
        concat!(
            "<p><img src=\"image.png\" alt=\"\" /></p>\n",
            "<figure>\n",
            "<img src=\"image.png\" alt=\"figure\" />\n",
            "<figcaption>figure</figcaption>\n",
            "</figure>\n",
        ),
        FigureOptions {
            xhtml: true,
            ..FigureOptions::default()
        },
        |_| (),
    );
}

#[test]
fn sourcepos_lands_on_figure_and_img() {
    html_opts(
        "![pic](x.png)\n",
        concat!(
            "<figure data-sourcepos=\"1:1-1:13\">\n",
            "<img data-sourcepos=\"1:1-1:13\" src=\"x.png\" alt=\"pic\">\n",
            "<figcaption>pic</figcaption>\n",
            "</figure>\n",
        ),
        |opts| opts.render.sourcepos = true,
    );
}

#[test]
fn surrounding_document_renders_as_usual() {
    html(
        "## Results\n\n![plot of results](plot.png)\n\nAs shown *above*.\n",
        concat!(
            "<h2>Results</h2>\n",
            "<figure>\n",
            "<img src=\"plot.png\" alt=\"plot of results\">\n",
            "<figcaption>plot of results</figcaption>\n",
            "</figure>\n",
            "<p>As shown <em>above</em>.</p>\n",
        ),
    );
}
