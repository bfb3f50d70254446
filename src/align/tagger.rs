use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceTags {
    #[serde(default, alias = "dep")]
    pub dependency_labels: Vec<String>,
    #[serde(default, alias = "pos")]
    pub pos_tags: Vec<String>,
}

pub trait SentenceTagger {
    fn tag(&self, sentence_id: &str, words: &[String]) -> Result<SentenceTags>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullTagger;

impl SentenceTagger for NullTagger {
    fn tag(&self, _sentence_id: &str, _words: &[String]) -> Result<SentenceTags> {
        Ok(SentenceTags::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PrecomputedTagger {
    tags: BTreeMap<String, SentenceTags>,
}

impl PrecomputedTagger {
    pub fn new(tags: BTreeMap<String, SentenceTags>) -> Self {
        Self { tags }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl SentenceTagger for PrecomputedTagger {
    fn tag(&self, sentence_id: &str, _words: &[String]) -> Result<SentenceTags> {
        Ok(self.tags.get(sentence_id).cloned().unwrap_or_default())
    }
}
