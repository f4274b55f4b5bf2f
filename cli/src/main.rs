use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use searchcore::{ScoringMethod, SearchIndex, SearchOutcome, Searcher};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pagesearch")]
#[command(about = "Inspect a page corpus and run ranked queries against it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print document and term counts for a corpus
    Stats {
        /// Corpus file with `*PAGE:<url>` records
        #[arg(long)]
        corpus: String,
        /// Also list this many terms with the highest document frequency
        #[arg(long, default_value_t = 0)]
        top: usize,
    },
    /// Run a query and print ranked pages with their scores
    Query {
        #[arg(long)]
        corpus: String,
        /// Scoring method: tf or tfidf
        #[arg(long, default_value = "tf")]
        scoring: ScoringMethod,
        /// Emit one JSON object per hit instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Query text; `OR` separates alternatives
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Stats { corpus, top } => {
            let index = load_index(Path::new(&corpus))?;
            print_stats(&index, top, &mut out)
        }
        Commands::Query { corpus, scoring, json, terms } => {
            let index = load_index(Path::new(&corpus))?;
            let searcher = Searcher::with_method(Arc::new(index), scoring);
            print_results(&searcher, &terms.join(" "), json, &mut out)
        }
    }
}

fn load_index(path: &Path) -> Result<SearchIndex> {
    let f = File::open(path).with_context(|| format!("opening corpus {}", path.display()))?;
    let reader = BufReader::new(f);
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    let index = SearchIndex::from_lines(&lines);
    tracing::info!(corpus = %path.display(), num_docs = index.num_docs(), "corpus loaded");
    Ok(index)
}

fn print_stats(index: &SearchIndex, top: usize, out: &mut impl Write) -> Result<()> {
    writeln!(out, "documents: {}", index.num_docs())?;
    writeln!(out, "terms: {}", index.num_terms())?;
    if top > 0 {
        let mut terms: Vec<(&str, u32)> = index.document_frequencies().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        for (term, df) in terms.into_iter().take(top) {
            writeln!(out, "{df}\t{term}")?;
        }
    }
    Ok(())
}

fn print_results(searcher: &Searcher, text: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let hits = match searcher.search(text) {
        SearchOutcome::NoQuery => {
            writeln!(out, "No search query supplied.")?;
            return Ok(());
        }
        SearchOutcome::Hits(hits) => hits,
    };
    if json {
        for hit in &hits {
            writeln!(out, "{}", serde_json::to_string(hit)?)?;
        }
        return Ok(());
    }
    writeln!(out, "Search Results for: \"{text}\"")?;
    for hit in &hits {
        writeln!(out, "URL: {}, Title: {}, Score: {:?}", hit.url, hit.title, hit.score)?;
    }
    Ok(())
}
