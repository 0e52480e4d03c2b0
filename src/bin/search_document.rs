//! Search a plain-text document and list every match.
//!
//! Pages are separated by form feeds. Matches are printed in page order with
//! a little surrounding context.
//!
//! Usage:
//!   cargo run --release --bin search_document -- <file> <pattern>
//!   cargo run --release --bin search_document -- <file> <pattern> --literal --context 30

use pdf_seek::document::{DocumentSource, TextDocument};
use pdf_seek::extract;
use pdf_seek::navigation::NavigationCursor;
use pdf_seek::search::{build_index, Match, SearchOptions};
use pdf_seek::{Result, ViewerConfig};
use std::path::PathBuf;
use std::process::ExitCode;

struct SearchArgs {
    path: PathBuf,
    pattern: String,
    config: ViewerConfig,
    context: usize,
}

impl SearchArgs {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut positional = Vec::new();
        let mut config = ViewerConfig::default();
        let mut context = 20;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--literal" => {
                    config.search = config.search.clone().with_literal(true);
                },
                "--case-sensitive" => {
                    config.search = config.search.clone().with_case_insensitive(false);
                },
                "--whole-word" => {
                    config.search = config.search.clone().with_whole_word(true);
                },
                "--config" => {
                    i += 1;
                    if i < args.len() {
                        match ViewerConfig::from_json_file(&args[i]) {
                            Ok(loaded) => config = loaded,
                            Err(e) => eprintln!("Ignoring config {}: {}", args[i], e),
                        }
                    }
                },
                "--context" => {
                    i += 1;
                    if let Some(value) = args.get(i).and_then(|v| v.parse().ok()) {
                        context = value;
                    }
                },
                other => positional.push(other.to_string()),
            }
            i += 1;
        }

        let mut positional = positional.into_iter();
        Some(Self {
            path: PathBuf::from(positional.next()?),
            pattern: positional.next()?,
            config,
            context,
        })
    }
}

/// Characters around a match, on one line.
fn snippet(text: &str, m: &Match, context: usize) -> String {
    let start = m.offset.saturating_sub(context);
    let take = m.len + (m.offset - start) + context;
    text.chars()
        .skip(start)
        .take(take)
        .collect::<String>()
        .replace(['\n', '\r'], " ")
}

async fn run(args: SearchArgs) -> Result<()> {
    let doc = TextDocument::open(&args.path).await?;
    let separator = args.config.fragment_separator.clone();
    let options: SearchOptions = args.config.search.clone();

    let matches = build_index(doc.page_count(), &args.pattern, &options, |page| {
        extract::page_text(&doc, page, &separator)
    })
    .await?;

    let mut page_text = String::new();
    let mut text_page = 0;
    for m in &matches {
        if m.page_index != text_page {
            page_text = extract::page_text(&doc, m.page_index, &separator).await?;
            text_page = m.page_index;
        }
        println!(
            "page {}, offset {}: {}",
            m.page_index,
            m.offset,
            snippet(&page_text, m, args.context)
        );
    }

    let mut cursor = NavigationCursor::new(doc.page_count());
    cursor.seed(matches);
    println!("{} ({})", cursor.results_label(), cursor.page_label());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = SearchArgs::from_args() else {
        eprintln!("Usage: search_document <file> <pattern> [--literal] [--case-sensitive] [--whole-word] [--context N] [--config FILE]");
        return ExitCode::from(2);
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
