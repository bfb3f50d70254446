use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{info, warn};

use super::inputs::load_corpus;
use crate::cli::ArticlesArgs;
use crate::model::{ArticleInventoryManifest, ArticleSummary, PrefixCollision, SentenceRecord};
use crate::util::{digest_input, now_utc_string, write_json_pretty};

pub fn run(args: ArticlesArgs) -> Result<()> {
    let corpus_path = args.data.corpus_path();
    let corpus = load_corpus(&corpus_path)?;
    let manifest = build_manifest(&corpus_path, &corpus)?;

    if args.dry_run {
        info!(
            article_count = manifest.article_count,
            sentence_count = manifest.sentence_count,
            corpus = %corpus_path.display(),
            "article inventory dry-run complete"
        );
        return Ok(());
    }

    let manifest_path = args.manifest_path.unwrap_or_else(|| {
        args.data
            .data_root
            .join("manifests")
            .join("article_inventory.json")
    });

    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote article inventory");
    info!(article_count = manifest.article_count, "article inventory completed");

    Ok(())
}

pub(crate) fn build_manifest(
    corpus_path: &Path,
    corpus: &[SentenceRecord],
) -> Result<ArticleInventoryManifest> {
    let (articles, unparsed_sentence_ids) = summarize_articles(corpus)?;
    if !unparsed_sentence_ids.is_empty() {
        warn!(
            count = unparsed_sentence_ids.len(),
            "sentence ids without an <article>_<index> shape"
        );
    }

    let prefix_collisions = find_prefix_collisions(&articles);
    for collision in &prefix_collisions {
        warn!(
            article_id = %collision.article_id,
            shadowed_by = %collision.shadowed_by,
            "article id is a prefix of another article id"
        );
    }

    Ok(ArticleInventoryManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        corpus: digest_input("corpus", corpus_path)?,
        sentence_count: corpus.len(),
        article_count: articles.len(),
        articles,
        unparsed_sentence_ids,
        prefix_collisions,
    })
}

pub(crate) fn summarize_articles(
    corpus: &[SentenceRecord],
) -> Result<(Vec<ArticleSummary>, Vec<String>)> {
    let pattern = Regex::new(r"^(?P<article>.+)_(?P<index>\d+)$")
        .context("failed to compile sentence id regex")?;

    let mut positions = HashMap::<String, usize>::new();
    let mut articles = Vec::<ArticleSummary>::new();
    let mut unparsed = Vec::new();

    for record in corpus {
        let Some(article_id) = pattern
            .captures(&record.sentence_id)
            .and_then(|captures| captures.name("article"))
            .map(|m| m.as_str())
        else {
            unparsed.push(record.sentence_id.clone());
            continue;
        };

        let position = *positions.entry(article_id.to_string()).or_insert_with(|| {
            articles.push(ArticleSummary {
                article_id: article_id.to_string(),
                sentence_count: 0,
                entity_mention_count: 0,
                event_mention_count: 0,
            });
            articles.len() - 1
        });

        let summary = &mut articles[position];
        summary.sentence_count += 1;
        summary.entity_mention_count += record.entity_mentions.len();
        summary.event_mention_count += record.event_mentions.len();
    }

    Ok((articles, unparsed))
}

pub(crate) fn find_prefix_collisions(articles: &[ArticleSummary]) -> Vec<PrefixCollision> {
    let mut ids = articles
        .iter()
        .map(|summary| summary.article_id.as_str())
        .collect::<Vec<&str>>();
    ids.sort_unstable();

    let mut collisions = Vec::new();
    for (index, article_id) in ids.iter().enumerate() {
        for candidate in ids[index + 1..]
            .iter()
            .take_while(|candidate| candidate.starts_with(article_id))
        {
            collisions.push(PrefixCollision {
                article_id: article_id.to_string(),
                shadowed_by: candidate.to_string(),
            });
        }
    }

    collisions
}
