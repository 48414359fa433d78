// Dialkey Lookup CLI Tool
// Highlight a dial-pad or text query inside a display name

use std::sync::Arc;

use clap::Parser;
use dialkey::{Language, LiteralTokenizer, NameSearch};

/// Dialkey Lookup - match a query against a name and show the highlight
#[derive(Parser, Debug)]
#[command(name = "dialkey-lookup")]
#[command(about = "Match a dial-pad digit or text query against a display name", long_about = None)]
#[command(version)]
struct Args {
    /// Display name to search in
    #[arg(value_name = "NAME")]
    name: String,

    /// Query: all digits → dial-pad matching, otherwise text prefix matching
    #[arg(value_name = "QUERY")]
    query: String,

    /// Interpretation language tag (e.g. zh, ja, ko); defaults to the
    /// process locale
    #[arg(short, long)]
    lang: Option<String>,

    /// Print the generated lookup keys
    #[arg(short, long)]
    keys: bool,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();

    let language = match &args.lang {
        Some(tag) => Language::from_tag(tag),
        None => Language::system_default(),
    };
    let search = NameSearch::with_language(Arc::new(LiteralTokenizer), language);

    if args.verbose {
        println!("Language: {}", language.code());
        println!("Style:    {}", search.classify(&args.name));
    }

    if args.keys {
        match search.generate_keys(&args.name) {
            Some(keys) => {
                println!("Lookup keys:");
                for key in keys.iter() {
                    println!(
                        "  {:>3}  {:?}  {:<8} → {}",
                        key.position,
                        key.kind,
                        key.source,
                        key.digits
                    );
                }
            }
            None => println!("Lookup keys: (none)"),
        }
        println!();
    }

    let digit_query = !args.query.is_empty() && args.query.chars().all(|c| c.is_ascii_digit());
    let range = if digit_query {
        search.highlight_digits(&args.name, &args.query)
    } else {
        search.highlight_prefix(&args.name, &args.query)
    };

    let mode = if digit_query { "digits" } else { "prefix" };
    match range {
        Some(range) => {
            println!("Matched ({}): {}", mode, emphasize(&args.name, range.clone()));
            if args.verbose {
                println!("Range:          [{}, {})", range.start, range.end);
            }
        }
        None => println!("No match ({}): {}", mode, args.name),
    }
}

/// Wrap the `[start, end)` character range in ANSI reverse video
fn emphasize(name: &str, range: std::ops::Range<usize>) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    for (idx, ch) in name.chars().enumerate() {
        if idx == range.start {
            out.push_str("\x1b[7m");
        }
        if idx == range.end {
            out.push_str("\x1b[0m");
        }
        out.push(ch);
    }
    if range.end >= name.chars().count() {
        out.push_str("\x1b[0m");
    }
    out
}
