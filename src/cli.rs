//! Command-line argument parsing for folio
//!
//! Supports:
//! - Creating documents from built-in templates
//! - Exporting document files to PDF
//! - Listing available templates

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A structured document editor
#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "A structured document editor")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Create a new document from a template
    New {
        /// Template to apply (see `folio templates`)
        #[arg(short, long, default_value = "simple")]
        template: String,

        /// Where to write the document file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Export a document file to PDF
    Export {
        /// Document file to export
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Title printed on the first page and used for the PDF filename
        #[arg(short, long, default_value = "")]
        title: String,

        /// Directory the PDF is written into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// List the built-in templates
    Templates,
}
