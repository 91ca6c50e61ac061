use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "xowl-store")]
/// xOWL in-memory quad store toolkit
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load RDF files and print statistics about the resulting dataset
    Stats {
        #[command(flatten)]
        input: Input,
    },
    /// Load RDF files and write the quads matching a pattern as N-Quads to stdout
    Dump {
        #[command(flatten)]
        input: Input,
        /// Only write the quads of this graph
        ///
        /// The default graph of the loaded files is the graph namespace of the store.
        #[arg(long, value_hint = ValueHint::Url)]
        graph: Option<String>,
        /// Only write the quads with this IRI as subject
        #[arg(long, value_hint = ValueHint::Url)]
        subject: Option<String>,
        /// Only write the quads with this IRI as property
        #[arg(long, value_hint = ValueHint::Url)]
        property: Option<String>,
    },
}

#[derive(clap::Args)]
pub struct Input {
    /// Files to load
    #[arg(short, long = "file", required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
    /// The format of the files to load
    ///
    /// It can be an extension like "nt" or a MIME type like "application/n-triples".
    ///
    /// By default the format is guessed from each file extension.
    #[arg(long)]
    pub format: Option<String>,
    /// Base IRI of the files to load
    #[arg(long, value_hint = ValueHint::Url)]
    pub base: Option<String>,
}
