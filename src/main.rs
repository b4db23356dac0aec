//! The `comrak-figures` binary.

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use comrak::{parse_document, Arena, Options};
use comrak_figures::{html, FigureOptions};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Convert CommonMark to HTML, rendering image-only paragraphs as figures"
)]
struct Cli {
    /// The CommonMark file(s) to parse; or standard input if none passed.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Treat newlines as hard line breaks.
    #[arg(long)]
    hardbreaks: bool,

    /// Use smart punctuation.
    #[arg(long)]
    smart: bool,

    /// Allow raw HTML and dangerous URLs.
    #[arg(long = "unsafe")]
    unsafe_: bool,

    /// Include source position attributes in the output.
    #[arg(long)]
    sourcepos: bool,

    /// Use XHTML-style self-closing tags.
    #[arg(long)]
    xhtml: bool,

    /// Write output to FILE instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut source = String::new();
    if cli.files.is_empty() {
        io::stdin().read_to_string(&mut source)?;
    } else {
        for file in &cli.files {
            source.push_str(&fs::read_to_string(file)?);
        }
    }

    let mut options = Options::default();
    options.parse.smart = cli.smart;
    options.render.hardbreaks = cli.hardbreaks;
    options.render.sourcepos = cli.sourcepos;
    options.render.r#unsafe = cli.unsafe_;

    let figures = FigureOptions {
        xhtml: cli.xhtml,
        ..FigureOptions::default()
    };

    let arena = Arena::new();
    let root = parse_document(&arena, &source, &options);
    let mut formatted = String::new();
    html::format_document(root, &options, figures, &mut formatted)?;

    match cli.output {
        None => io::stdout().write_all(formatted.as_bytes())?,
        Some(path) => fs::write(path, formatted)?,
    }
    Ok(())
}
