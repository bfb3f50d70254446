use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SentenceRecord {
    #[serde(default)]
    pub sentence_id: String,
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(
        rename = "golden-entity-mentions",
        alias = "entityMentions",
        default
    )]
    pub entity_mentions: Vec<EntityMention>,
    #[serde(
        rename = "golden-event-mentions",
        alias = "eventMentions",
        default
    )]
    pub event_mentions: Vec<EventMention>,
}

impl SentenceRecord {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityMention {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "entity-type", alias = "type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventMention {
    #[serde(alias = "eventType", default)]
    pub event_type: String,
    #[serde(default)]
    pub trigger: Option<Trigger>,
    #[serde(default)]
    pub arguments: Vec<EventArgument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trigger {
    #[serde(default)]
    pub text: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventArgument {
    pub role: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EventTypeSchema {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct EventSchema(pub BTreeMap<String, EventTypeSchema>);

impl EventSchema {
    pub fn roles(&self, event_type: &str) -> Option<&[String]> {
        self.0.get(event_type).map(|entry| entry.roles.as_slice())
    }

    pub fn event_types(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Boxes stay untyped until merge so odd arrays can be defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawImageRecord {
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub role: BTreeMap<String, Vec<Value>>,
}

pub type RawImageSource = BTreeMap<String, RawImageRecord>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDigest {
    pub kind: String,
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSummary {
    pub article_id: String,
    pub sentence_count: usize,
    pub entity_mention_count: usize,
    pub event_mention_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrefixCollision {
    pub article_id: String,
    pub shadowed_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleInventoryManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub corpus: InputDigest,
    pub sentence_count: usize,
    pub article_count: usize,
    pub articles: Vec<ArticleSummary>,
    pub unparsed_sentence_ids: Vec<String>,
    pub prefix_collisions: Vec<PrefixCollision>,
}
