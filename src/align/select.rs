use std::path::Path;

use crate::error::AlignError;
use crate::model::SentenceRecord;

const ARTICLE_FILE_EXTENSION: &str = "txt";

// Plain prefix test: `art1` also matches `art10_0`.
pub fn select_article<'a>(corpus: &'a [SentenceRecord], article_id: &str) -> Vec<&'a SentenceRecord> {
    corpus
        .iter()
        .filter(|record| record.sentence_id.starts_with(article_id))
        .collect()
}

pub fn require_article<'a>(
    corpus: &'a [SentenceRecord],
    article_id: &str,
) -> Result<Vec<&'a SentenceRecord>, AlignError> {
    let selected = select_article(corpus, article_id);
    if selected.is_empty() {
        return Err(AlignError::article_not_found(article_id));
    }
    Ok(selected)
}

pub fn article_id_from_file_name(file_name: &str) -> Result<String, AlignError> {
    let unsupported = || AlignError::UnsupportedArticleFile {
        file_name: file_name.to_string(),
    };

    let base_name = Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(unsupported)?;

    let is_text = base_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case(ARTICLE_FILE_EXTENSION))
        .unwrap_or(false);
    if !is_text {
        return Err(unsupported());
    }

    let article_id = base_name.rsplitn(3, '.').last().unwrap_or_default();
    if article_id.is_empty() {
        return Err(unsupported());
    }

    Ok(article_id.to_string())
}
