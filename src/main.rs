// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use postlens::build::{load_corpus, run_analyze, AnalysisSettings, Corpus};
use postlens::{
    add_heading_anchors, build_toc, find_similar, slugify, suggest_links_excluding, Document,
    SimilarityQuery,
};

mod cli;
use cli::display::{
    link_score_value, outline_lines, row, section_bot, section_top, similarity_value, themed,
    truncate, BOLD, DIM, GRAY, GREEN,
};
use cli::{Cli, Commands};

/// `POSTLENS_LOG` wins over `RUST_LOG`; with neither set only warnings show.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("POSTLENS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            output,
            limit,
        } => analyze_cmd(&input, &output, limit),
        Commands::Related {
            input,
            id,
            limit,
            json,
        } => related_cmd(&input, &id, limit, json),
        Commands::Links {
            input,
            draft,
            exclude,
            limit,
            json,
        } => links_cmd(&input, &draft, exclude.as_deref(), limit, json),
        Commands::Toc { file, json } => toc_cmd(&file, json),
        Commands::Anchors { file } => anchors_cmd(&file),
        Commands::Slug { text } => {
            println!("{}", slugify(&text));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn analyze_cmd(input: &Path, output: &Path, limit: Option<usize>) -> Result<()> {
    let report = run_analyze(input, output, limit)?;

    eprintln!();
    eprintln!("✅ Analysis complete");
    eprintln!(
        "   {} documents │ {} related links │ {} headings",
        report.documents.len(),
        report.related_link_count(),
        report.heading_count()
    );
    Ok(())
}

fn related_cmd(input: &Path, id: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let corpus = load_corpus(input)?;
    let settings = corpus.settings().with_related_limit(limit);
    let doc = corpus.find(id)?;

    let results = find_similar(
        &SimilarityQuery::from(doc),
        &corpus.documents,
        settings.related_limit,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    section_top(&format!("RELATED TO {}", doc.id));
    if results.is_empty() {
        row(&format!(" {}", themed(GRAY, &[DIM], "no post scored above the threshold")));
    }
    for result in &results {
        row(&format!(
            " {}  {}",
            similarity_value(result.score),
            title_cell(&corpus, &result.id)
        ));
    }
    section_bot();
    Ok(())
}

fn links_cmd(
    input: &Path,
    draft: &Path,
    exclude: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let corpus = load_corpus(input)?;
    let settings: AnalysisSettings = corpus.settings().with_link_limit(limit);
    let text = fs::read_to_string(draft)
        .with_context(|| format!("failed to read draft {}", draft.display()))?;

    let suggestions = suggest_links_excluding(
        &text,
        &corpus.documents,
        exclude,
        settings.link_limit,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    section_top("LINK SUGGESTIONS");
    if suggestions.is_empty() {
        row(&format!(" {}", themed(GRAY, &[DIM], "no matching titles")));
    }
    for suggestion in &suggestions {
        row(&format!(
            " {}  {}",
            link_score_value(suggestion.score),
            title_cell(&corpus, &suggestion.id)
        ));
    }
    section_bot();
    Ok(())
}

fn toc_cmd(file: &Path, json: bool) -> Result<()> {
    let markdown = read_markdown(file)?;
    let toc = build_toc(&markdown);

    if json {
        println!("{}", serde_json::to_string_pretty(&toc)?);
        return Ok(());
    }

    for line in outline_lines(&toc) {
        println!("{}", line);
    }
    Ok(())
}

fn anchors_cmd(file: &Path) -> Result<()> {
    let markdown = read_markdown(file)?;
    print!("{}", add_heading_anchors(&markdown));
    Ok(())
}

fn read_markdown(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn title_cell(corpus: &Corpus, id: &str) -> String {
    let title = corpus
        .documents
        .iter()
        .find(|doc: &&Document| doc.id == id)
        .map(|doc| doc.title.as_str())
        .unwrap_or("");
    format!(
        "{} {}",
        themed(GREEN, &[BOLD], &truncate(title, 48)),
        themed(GRAY, &[DIM], &format!("({})", id))
    )
}
