//! Command-line front end: inspect references and render chapter markup.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use lection::{
    BibleReference, ChapterSource, FootnoteMode, RenderOptions, Result, VersionMetadata,
    VersionRendering, merge_all,
};

#[derive(Parser, Debug)]
#[command(name = "lection")]
#[command(about = "Parse Bible references and render chapter markup to styled blocks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse USFM-like references and print them normalized.
    Ref {
        /// References such as GEN.1.3 or GEN.1.3-5
        refs: Vec<String>,

        /// Version id recorded on the parsed references
        #[arg(long, default_value_t = 1)]
        version_id: u32,

        /// Merge adjacent and overlapping references before printing
        #[arg(long)]
        merge: bool,
    },

    /// Render a chapter markup file to styled blocks as JSON.
    Render {
        /// File containing chapter markup
        file: PathBuf,

        /// Reference selecting the chapter and verse window, e.g. GEN.1.3-5.
        /// Note that GEN.1 selects verse 1 only.
        #[arg(long, short)]
        reference: String,

        /// Widen the verse window to the whole chapter
        #[arg(long)]
        whole_chapter: bool,

        #[arg(long)]
        hide_verse_numbers: bool,

        #[arg(long)]
        hide_headlines: bool,

        /// Footnote rendering mode
        #[arg(long, value_enum, default_value = "marker")]
        footnotes: FootnoteArg,

        /// Marker template used in marker mode
        #[arg(long, default_value = "*")]
        marker: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FootnoteArg {
    Hidden,
    Inline,
    Marker,
}

/// Single-chapter source backed by a local file's content.
struct FileSource {
    markup: String,
}

impl ChapterSource for FileSource {
    fn chapter_markup(&self, _version_id: u32, _book_code: &str, _chapter: u32) -> Result<String> {
        Ok(self.markup.clone())
    }

    fn version_metadata(&self, _version_id: u32) -> Result<VersionMetadata> {
        Ok(VersionMetadata::default())
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Ref {
            refs,
            version_id,
            merge,
        } => {
            let mut parsed = Vec::new();
            for input in &refs {
                match BibleReference::parse_unvalidated(input, version_id) {
                    Some(reference) => parsed.push(reference),
                    None => eprintln!("unparseable reference: {input}"),
                }
            }
            if merge {
                parsed = merge_all(parsed);
            }
            for reference in parsed {
                println!("{reference}");
            }
            Ok(())
        }

        Command::Render {
            file,
            reference,
            whole_chapter,
            hide_verse_numbers,
            hide_headlines,
            footnotes,
            marker,
        } => {
            let mut reference = BibleReference::parse_unvalidated(&reference, 1)
                .ok_or_else(|| lection::Error::InvalidReference(reference.clone()))?;
            if whole_chapter {
                reference = reference.with_whole_chapter();
            }

            let options = RenderOptions {
                show_verse_numbers: !hide_verse_numbers,
                show_headlines: !hide_headlines,
                footnotes: match footnotes {
                    FootnoteArg::Hidden => FootnoteMode::Hidden,
                    FootnoteArg::Inline => FootnoteMode::Inline,
                    FootnoteArg::Marker => FootnoteMode::Marker(marker),
                },
                ..Default::default()
            };

            let source = FileSource {
                markup: fs::read_to_string(file)?,
            };
            let rendering = VersionRendering::new(&source);
            match rendering.text_blocks(&reference, &options)? {
                Some(blocks) => {
                    let json = serde_json::to_string_pretty(&blocks)
                        .map_err(|e| lection::Error::source(e))?;
                    println!("{json}");
                }
                None => eprintln!("no content"),
            }
            Ok(())
        }
    }
}
