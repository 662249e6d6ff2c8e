pub mod document;
pub mod manifest;
pub mod parallel;

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::error::BuildError;
use crate::types::Document;

pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// File name of the report written by [`run_analyze`].
pub const REPORT_FILE: &str = "analysis.json";

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Read and validate `manifest.json` from an input directory.
pub fn load_manifest(input_dir: &Path) -> Result<InputManifest, BuildError> {
    let path = input_dir.join("manifest.json");
    let content = fs::read_to_string(&path).map_err(|source| BuildError::ReadManifest {
        path: path.clone(),
        source,
    })?;
    let manifest: InputManifest = serde_json::from_str(&content)
        .map_err(|source| BuildError::InvalidManifest { path, source })?;

    if manifest.version != MANIFEST_VERSION {
        return Err(BuildError::UnsupportedVersion {
            found: manifest.version,
            expected: MANIFEST_VERSION,
        });
    }

    Ok(manifest)
}

/// A manifest and the documents it lists.
#[derive(Clone, Debug)]
pub struct Corpus {
    pub manifest: InputManifest,
    pub documents: Vec<Document>,
}

impl Corpus {
    /// Look up a document by id.
    pub fn find(&self, id: &str) -> Result<&Document, BuildError> {
        self.documents
            .iter()
            .find(|doc| doc.id == id)
            .ok_or_else(|| BuildError::UnknownDocument(id.to_string()))
    }

    pub fn settings(&self) -> AnalysisSettings {
        AnalysisSettings::from(&self.manifest)
    }
}

/// Load the manifest and every document it lists.
pub fn load_corpus(input_dir: &Path) -> Result<Corpus, BuildError> {
    let manifest = load_manifest(input_dir)?;
    let documents = load_documents(input_dir, &manifest)?;
    tracing::info!(
        documents = documents.len(),
        dir = %input_dir.display(),
        "loaded corpus"
    );
    Ok(Corpus {
        manifest,
        documents,
    })
}

/// Analyze a corpus in memory.
pub fn analyze(documents: &[Document], settings: &AnalysisSettings) -> AnalysisReport {
    AnalysisReport {
        version: MANIFEST_VERSION,
        documents: analyze_documents(documents, settings),
    }
}

/// Load a corpus, analyze it and write `analysis.json` to `output_dir`.
///
/// `related_limit` overrides the manifest's `related.limit` when given.
pub fn run_analyze(
    input_dir: &Path,
    output_dir: &Path,
    related_limit: Option<usize>,
) -> Result<AnalysisReport, BuildError> {
    // Set up multi-progress display
    #[cfg(feature = "parallel")]
    let multi = MultiProgress::new();

    // 1. Read manifest
    let manifest = load_manifest(input_dir)?;
    let settings = AnalysisSettings::from(&manifest).with_related_limit(related_limit);

    // 2. Load documents in parallel with progress bar
    #[cfg(feature = "parallel")]
    let documents = {
        let load_pb = multi.add(ProgressBar::new(manifest.documents.len() as u64));
        load_pb.set_style(create_progress_style());
        load_pb.set_prefix("Loading");
        load_pb.set_message("documents...");
        let documents = load_documents_with_progress(input_dir, &manifest, &load_pb)?;
        load_pb.finish_with_message(format!("loaded {} documents", documents.len()));
        documents
    };
    #[cfg(not(feature = "parallel"))]
    let documents = load_documents(input_dir, &manifest)?;

    if documents.is_empty() {
        tracing::warn!(dir = %input_dir.display(), "no documents listed in manifest");
    }

    // 3. Analyze
    #[cfg(feature = "parallel")]
    let report = {
        let analyze_pb = multi.add(ProgressBar::new_spinner());
        analyze_pb.set_style(create_progress_style());
        analyze_pb.set_prefix("Analyzing");
        let report = analyze(&documents, &settings);
        analyze_pb.finish_with_message(format!("{} related links", report.related_link_count()));
        report
    };
    #[cfg(not(feature = "parallel"))]
    let report = analyze(&documents, &settings);

    // 4. Write report
    write_report(output_dir, &report)?;

    Ok(report)
}

/// Write `analysis.json` (pretty-printed) into `output_dir`, creating it if needed.
pub fn write_report(output_dir: &Path, report: &AnalysisReport) -> Result<(), BuildError> {
    fs::create_dir_all(output_dir).map_err(|source| BuildError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(REPORT_FILE);
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json).map_err(|source| BuildError::WriteOutput {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "wrote analysis report");
    Ok(())
}
