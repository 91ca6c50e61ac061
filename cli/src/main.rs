use crate::cli::{Args, Command, Input};
use anyhow::{bail, Context};
use clap::Parser;
use std::fs::File;
use std::io::{stdout, BufReader, BufWriter, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;
use xowl_storage::io::{dump, load, load_file, QuadPattern, RdfFormat};
use xowl_storage::memory::MemDataset;

mod cli;

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Args::parse();
    match matches.command {
        Command::Stats { input } => {
            let dataset = load_dataset(&input)?;
            let subjects = dataset.subject_counts();
            let mut stdout = stdout().lock();
            writeln!(stdout, "quads: {}", dataset.len())?;
            writeln!(stdout, "graphs: {}", dataset.graphs().len())?;
            writeln!(
                stdout,
                "subjects: {} IRI, {} blank, {} anonymous",
                subjects.iri, subjects.blank, subjects.anonymous
            )?;
            Ok(())
        }
        Command::Dump {
            input,
            graph,
            subject,
            property,
        } => {
            let mut dataset = load_dataset(&input)?;
            let nodes = dataset.nodes_mut();
            // Unknown IRIs are interned as well, so that they match nothing.
            let pattern = QuadPattern {
                graph: graph.map(|iri| nodes.get_iri_node(&iri).into()),
                subject: subject.map(|iri| nodes.get_iri_node(&iri).into()),
                property: property.map(|iri| nodes.get_iri_node(&iri)),
                object: None,
            };
            let mut writer = dump(
                &dataset,
                &pattern,
                RdfFormat::NQuads,
                BufWriter::new(stdout().lock()),
            )?;
            writer.flush()?;
            Ok(())
        }
    }
}

fn load_dataset(input: &Input) -> anyhow::Result<MemDataset> {
    let format = input
        .format
        .as_deref()
        .map(rdf_format_from_name)
        .transpose()?;

    let mut dataset = MemDataset::new();
    for file in &input.files {
        let count = match format {
            Some(format) => {
                let reader = File::open(file)
                    .with_context(|| format!("Failed to open {}", file.display()))?;
                load(
                    &mut dataset,
                    BufReader::new(reader),
                    format,
                    input.base.as_deref(),
                    None,
                )
            }
            None => load_file(&mut dataset, file, input.base.as_deref(), None),
        }
        .with_context(|| format!("Failed to load {}", file.display()))?;
        info!("Loaded {count} quads from {}", file.display());
    }
    Ok(dataset)
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The file format '{name}' is unknown")
}
