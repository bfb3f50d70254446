use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use tracing::warn;

use crate::model::{EventMention, EventSchema, SentenceRecord};

pub const MISSING_ROLE_TEXT: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleFiller {
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciledEvent {
    pub sentence_id: String,
    pub trigger_text: Option<String>,
    pub arguments: Vec<RoleFiller>,
}

#[derive(Debug, Clone, Default)]
pub struct EventReconciliation {
    pub events: BTreeMap<String, Vec<ReconciledEvent>>,
    pub sentence_events: BTreeMap<String, BTreeSet<String>>,
    pub schema_gaps: BTreeSet<String>,
}

pub fn reconcile_events(sentences: &[&SentenceRecord], schema: &EventSchema) -> EventReconciliation {
    let mut reconciliation = EventReconciliation::default();

    for sentence in sentences {
        for mention in &sentence.event_mentions {
            let expected: &[String] = match schema.roles(&mention.event_type) {
                Some(roles) => roles,
                None => {
                    if reconciliation
                        .schema_gaps
                        .insert(mention.event_type.clone())
                    {
                        warn!(
                            event_type = %mention.event_type,
                            sentence_id = %sentence.sentence_id,
                            "event type missing from schema; no roles expected"
                        );
                    }
                    &[]
                }
            };

            reconciliation
                .events
                .entry(mention.event_type.clone())
                .or_default()
                .push(ReconciledEvent {
                    sentence_id: sentence.sentence_id.clone(),
                    trigger_text: mention.trigger.as_ref().map(|trigger| trigger.text.clone()),
                    arguments: fill_roles(mention, expected),
                });

            reconciliation
                .sentence_events
                .entry(sentence.sentence_id.clone())
                .or_default()
                .insert(mention.event_type.clone());
        }
    }

    reconciliation
}

pub fn fill_roles(mention: &EventMention, expected: &[String]) -> Vec<RoleFiller> {
    let mut observed = HashMap::<&str, &str>::new();
    for argument in &mention.arguments {
        observed
            .entry(argument.role.as_str())
            .or_insert(argument.text.as_str());
    }

    expected
        .iter()
        .map(|role| RoleFiller {
            role: role.clone(),
            text: observed
                .get(role.as_str())
                .copied()
                .unwrap_or(MISSING_ROLE_TEXT)
                .to_string(),
        })
        .collect()
}
