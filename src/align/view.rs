use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use super::events::{ReconciledEvent, reconcile_events};
use super::images::{ImageRecord, merge_image_sources};
use super::offsets::{GlobalSpan, accumulate};
use super::palette::color_for;
use super::select::require_article;
use super::spans::resolve_overlaps;
use super::tagger::SentenceTagger;
use crate::model::{EventSchema, RawImageSource, SentenceRecord};

#[derive(Debug, Clone, Copy)]
pub struct ReconcileInputs<'a> {
    pub corpus: &'a [SentenceRecord],
    pub schema: &'a EventSchema,
    pub image_sources: &'a [RawImageSource],
}

#[derive(Debug, Clone, Serialize)]
pub struct SentenceView {
    pub sentence_id: String,
    pub text: String,
    pub token_offset: usize,
    pub token_count: usize,
    pub dependency_labels: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    pub schema_gaps: Vec<String>,
    pub invalid_spans: usize,
    pub dropped_entity_spans: usize,
    pub dropped_trigger_spans: usize,
    pub malformed_boxes: usize,
    pub missing_image_sources: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    pub article_id: String,
    pub tokens: Vec<String>,
    pub sentences: Vec<SentenceView>,
    pub entity_spans: Vec<GlobalSpan>,
    pub trigger_spans: Vec<GlobalSpan>,
    pub entity_labels: BTreeSet<String>,
    pub events: BTreeMap<String, Vec<ReconciledEvent>>,
    pub event_sentences: BTreeMap<String, Vec<String>>,
    pub sentence_events: BTreeMap<String, BTreeSet<String>>,
    pub images: BTreeMap<String, ImageRecord>,
    pub image_groups: BTreeMap<String, Vec<ImageRecord>>,
    pub image_files: Vec<String>,
    pub event_types: BTreeSet<String>,
    pub schema_event_types: Vec<String>,
    pub label_colors: BTreeMap<String, String>,
    pub diagnostics: Diagnostics,
}

pub fn reconcile_article(
    inputs: ReconcileInputs<'_>,
    article_id: &str,
    tagger: &dyn SentenceTagger,
) -> Result<ArticleView> {
    let sentences = require_article(inputs.corpus, article_id)?;
    info!(
        article_id = %article_id,
        sentence_count = sentences.len(),
        "reconciling article"
    );

    let stream = accumulate(&sentences);
    let entity_spans = resolve_overlaps(&stream.entity_spans);
    let trigger_spans = resolve_overlaps(&stream.trigger_spans);

    let mut sentence_views = Vec::with_capacity(sentences.len());
    for (sentence, token_offset) in sentences.iter().zip(&stream.sentence_offsets) {
        let tags = tagger
            .tag(&sentence.sentence_id, &sentence.words)
            .with_context(|| format!("failed to tag sentence {}", sentence.sentence_id))?;
        let dependency_labels = tags
            .dependency_labels
            .into_iter()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        sentence_views.push(SentenceView {
            sentence_id: sentence.sentence_id.clone(),
            text: sentence.text(),
            token_offset: *token_offset,
            token_count: sentence.words.len(),
            dependency_labels,
        });
    }

    let entity_labels = sentences
        .iter()
        .flat_map(|sentence| &sentence.entity_mentions)
        .map(|mention| mention.entity_type.clone())
        .collect::<BTreeSet<String>>();

    let reconciliation = reconcile_events(&sentences, inputs.schema);
    let event_sentences = event_sentence_texts(&sentence_views, &reconciliation.events);

    let image_merge = merge_image_sources(inputs.image_sources, article_id);
    let image_files = image_merge
        .records
        .keys()
        .map(|id| format!("images/{id}.jpg"))
        .collect();

    let event_types = reconciliation
        .events
        .keys()
        .chain(image_merge.groups.keys())
        .cloned()
        .collect::<BTreeSet<String>>();

    let label_colors = entity_labels
        .iter()
        .chain(&event_types)
        .map(|label| (label.clone(), color_for(label).to_string()))
        .collect();

    let diagnostics = Diagnostics {
        schema_gaps: reconciliation.schema_gaps.iter().cloned().collect(),
        invalid_spans: stream.invalid_spans,
        dropped_entity_spans: stream.entity_spans.len() - entity_spans.len(),
        dropped_trigger_spans: stream.trigger_spans.len() - trigger_spans.len(),
        malformed_boxes: image_merge.malformed_boxes,
        missing_image_sources: Vec::new(),
    };

    debug!(
        article_id = %article_id,
        tokens = stream.tokens.len(),
        entity_spans = entity_spans.len(),
        trigger_spans = trigger_spans.len(),
        dropped_entity_spans = diagnostics.dropped_entity_spans,
        dropped_trigger_spans = diagnostics.dropped_trigger_spans,
        "resolved span layers"
    );
    info!(
        article_id = %article_id,
        event_types = event_types.len(),
        text_events = reconciliation.events.values().map(Vec::len).sum::<usize>(),
        image_records = image_merge.records.len(),
        "article reconciled"
    );

    Ok(ArticleView {
        article_id: article_id.to_string(),
        tokens: stream.tokens,
        sentences: sentence_views,
        entity_spans,
        trigger_spans,
        entity_labels,
        events: reconciliation.events,
        event_sentences,
        sentence_events: reconciliation.sentence_events,
        images: image_merge.records,
        image_groups: image_merge.groups,
        image_files,
        event_types,
        schema_event_types: inputs.schema.event_types(),
        label_colors,
        diagnostics,
    })
}

fn event_sentence_texts(
    sentences: &[SentenceView],
    events: &BTreeMap<String, Vec<ReconciledEvent>>,
) -> BTreeMap<String, Vec<String>> {
    let text_by_id = sentences
        .iter()
        .map(|sentence| (sentence.sentence_id.as_str(), sentence.text.as_str()))
        .collect::<BTreeMap<&str, &str>>();

    events
        .iter()
        .map(|(event_type, mentions)| {
            let texts = mentions
                .iter()
                .filter_map(|event| text_by_id.get(event.sentence_id.as_str()))
                .map(|text| text.to_string())
                .collect();
            (event_type.clone(), texts)
        })
        .collect()
}
