use anyhow::{Result, bail};
use serde::Serialize;
use tracing::info;

use super::inputs::{load_corpus, load_image_sources, load_schema, load_tagger};
use crate::align::{ArticleView, ReconcileInputs, article_id_from_file_name, reconcile_article};
use crate::cli::ViewArgs;
use crate::model::InputDigest;
use crate::util::{digest_input, write_json_pretty, write_json_stdout};

#[derive(Debug, Serialize)]
pub(crate) struct ViewReport {
    pub inputs: Vec<InputDigest>,
    pub view: ArticleView,
}

pub fn run(args: ViewArgs) -> Result<()> {
    let article_id = resolve_article_id(&args)?;
    let report = build_report(&args, &article_id)?;

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &report)?;
            info!(path = %path.display(), article_id = %article_id, "wrote article view");
        }
        None => write_json_stdout(&report)?,
    }

    Ok(())
}

pub(crate) fn resolve_article_id(args: &ViewArgs) -> Result<String> {
    if let Some(article_id) = &args.article_id {
        let trimmed = article_id.trim();
        if trimmed.is_empty() {
            bail!("article id must not be empty");
        }
        return Ok(trimmed.to_string());
    }

    match &args.article_file {
        Some(file_name) => Ok(article_id_from_file_name(file_name)?),
        None => bail!("either --article-id or --article-file is required"),
    }
}

pub(crate) fn build_report(args: &ViewArgs, article_id: &str) -> Result<ViewReport> {
    let corpus_path = args.data.corpus_path();
    let schema_path = args.data.schema_path();

    let corpus = load_corpus(&corpus_path)?;
    let schema = load_schema(&schema_path)?;
    let images = load_image_sources(&args.image_paths())?;
    let tagger = load_tagger(args.tags_path.as_deref())?;

    let inputs = ReconcileInputs {
        corpus: &corpus,
        schema: &schema,
        image_sources: &images.sources,
    };
    let mut view = reconcile_article(inputs, article_id, &*tagger)?;
    view.diagnostics.missing_image_sources = images
        .missing
        .iter()
        .map(|path| path.display().to_string())
        .collect();

    let mut digests = vec![
        digest_input("corpus", &corpus_path)?,
        digest_input("schema", &schema_path)?,
    ];
    for path in &images.loaded {
        digests.push(digest_input("image_source", path)?);
    }
    if let Some(path) = &args.tags_path {
        digests.push(digest_input("tags", path)?);
    }

    Ok(ViewReport {
        inputs: digests,
        view,
    })
}
