use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    #[error("article not found: {article_id}")]
    ArticleNotFound { article_id: String },

    #[error("unsupported article file: {file_name}")]
    UnsupportedArticleFile { file_name: String },
}

impl AlignError {
    pub fn article_not_found(article_id: &str) -> Self {
        Self::ArticleNotFound {
            article_id: article_id.to_string(),
        }
    }
}
