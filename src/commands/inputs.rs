use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::align::{NullTagger, PrecomputedTagger, SentenceTagger, SentenceTags};
use crate::model::{EventSchema, RawImageSource, SentenceRecord};
use crate::util::read_json;

pub(crate) fn load_corpus(path: &Path) -> Result<Vec<SentenceRecord>> {
    let corpus: Vec<SentenceRecord> =
        read_json(path).with_context(|| format!("corpus unavailable: {}", path.display()))?;
    info!(path = %path.display(), sentences = corpus.len(), "loaded corpus");
    Ok(corpus)
}

pub(crate) fn load_schema(path: &Path) -> Result<EventSchema> {
    let schema: EventSchema =
        read_json(path).with_context(|| format!("event schema unavailable: {}", path.display()))?;
    if schema.is_empty() {
        warn!(path = %path.display(), "event schema declares no event types");
    }
    info!(path = %path.display(), event_types = schema.len(), "loaded event schema");
    Ok(schema)
}

#[derive(Debug, Default)]
pub(crate) struct ImageSources {
    pub sources: Vec<RawImageSource>,
    pub loaded: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

// Absent files are empty sources; present but unparsable files are errors.
pub(crate) fn load_image_sources(paths: &[PathBuf]) -> Result<ImageSources> {
    let mut images = ImageSources::default();

    for path in paths {
        if !path.exists() {
            warn!(path = %path.display(), "image source missing; treating as empty");
            images.missing.push(path.clone());
            continue;
        }

        let source: RawImageSource = read_json(path)?;
        info!(path = %path.display(), records = source.len(), "loaded image source");
        images.sources.push(source);
        images.loaded.push(path.clone());
    }

    Ok(images)
}

pub(crate) fn load_tagger(path: Option<&Path>) -> Result<Box<dyn SentenceTagger>> {
    let Some(path) = path else {
        return Ok(Box::new(NullTagger));
    };

    let tags: BTreeMap<String, SentenceTags> =
        read_json(path).with_context(|| format!("tagger output unavailable: {}", path.display()))?;
    let tagger = PrecomputedTagger::new(tags);
    if tagger.is_empty() {
        warn!(path = %path.display(), "precomputed tags file has no sentences");
    }
    info!(path = %path.display(), sentences = tagger.len(), "loaded precomputed tags");
    Ok(Box::new(tagger))
}
