use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use super::inputs::{load_corpus, load_image_sources, load_schema};
use crate::cli::StatusArgs;

pub fn run(args: StatusArgs) -> Result<()> {
    let corpus_path = args.data.corpus_path();
    let schema_path = args.data.schema_path();
    let image_paths = if args.image_sources.is_empty() {
        args.data.default_image_paths()
    } else {
        args.image_sources.clone()
    };

    info!(data_root = %args.data.data_root.display(), "status requested");

    if present(&corpus_path, "corpus") {
        let corpus = load_corpus(&corpus_path)?;
        let events = corpus
            .iter()
            .map(|record| record.event_mentions.len())
            .sum::<usize>();
        let entities = corpus
            .iter()
            .map(|record| record.entity_mentions.len())
            .sum::<usize>();
        info!(
            sentences = corpus.len(),
            event_mentions = events,
            entity_mentions = entities,
            "corpus status"
        );
    }

    if present(&schema_path, "event schema") {
        let schema = load_schema(&schema_path)?;
        let unroled = schema
            .0
            .iter()
            .filter(|(_, entry)| entry.roles.is_empty())
            .count();
        info!(
            event_types = schema.len(),
            event_types_without_roles = unroled,
            "event schema status"
        );
    }

    let images = load_image_sources(&image_paths)?;
    info!(
        loaded = images.loaded.len(),
        missing = images.missing.len(),
        records = images.sources.iter().map(|source| source.len()).sum::<usize>(),
        "image source status"
    );

    Ok(())
}

fn present(path: &Path, kind: &str) -> bool {
    if path.exists() {
        return true;
    }
    warn!(path = %path.display(), kind, "input file missing");
    false
}
