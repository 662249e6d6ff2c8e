// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the postlens command-line interface.
//!
//! `analyze` runs the whole corpus pipeline and writes `analysis.json`.
//! `related` and `links` run one ranker against a corpus directory, while
//! `toc`, `anchors` and `slug` work on a single markdown file or string.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "postlens",
    about = "Related posts, internal link suggestions and tables of contents for blogs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze every post in a corpus directory and write analysis.json
    Analyze {
        /// Input directory containing manifest.json and document files
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for analysis.json
        #[arg(short, long)]
        output: PathBuf,

        /// Related posts per document (overrides the manifest)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the posts most similar to one post
    Related {
        /// Input directory containing manifest.json and document files
        #[arg(short, long)]
        input: PathBuf,

        /// Id of the post to find neighbours for
        id: String,

        /// Maximum number of results (overrides the manifest)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Suggest existing posts to link to from a draft
    Links {
        /// Input directory containing manifest.json and document files
        #[arg(short, long)]
        input: PathBuf,

        /// Markdown file with the draft text
        draft: PathBuf,

        /// Id of the post being edited, never suggested
        #[arg(long)]
        exclude: Option<String>,

        /// Maximum number of suggestions (overrides the manifest)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the table of contents of a markdown file
    Toc {
        /// Markdown file
        file: PathBuf,

        /// Print JSON instead of an outline
        #[arg(long)]
        json: bool,
    },

    /// Print a markdown file with {#id} anchors appended to ## and ### headings
    Anchors {
        /// Markdown file
        file: PathBuf,
    },

    /// Print the anchor slug for a piece of text
    Slug {
        /// Heading text
        text: String,
    },
}
