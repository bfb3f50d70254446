use std::collections::{BTreeMap, BTreeSet};

use crate::model::{EventSchema, EventTypeSchema, SentenceRecord};

pub fn derive_schema(corpus: &[SentenceRecord]) -> EventSchema {
    let mut observed = BTreeMap::<String, (BTreeSet<String>, BTreeSet<String>)>::new();

    for mention in corpus.iter().flat_map(|record| &record.event_mentions) {
        if mention.event_type.is_empty() {
            continue;
        }

        let (triggers, roles) = observed.entry(mention.event_type.clone()).or_default();
        if let Some(trigger) = mention.trigger.as_ref().filter(|t| !t.text.is_empty()) {
            triggers.insert(trigger.text.clone());
        }
        roles.extend(
            mention
                .arguments
                .iter()
                .filter(|argument| !argument.role.is_empty())
                .map(|argument| argument.role.clone()),
        );
    }

    EventSchema(
        observed
            .into_iter()
            .map(|(event_type, (triggers, roles))| {
                let entry = EventTypeSchema {
                    roles: roles.into_iter().collect(),
                    triggers: triggers.into_iter().collect(),
                };
                (event_type, entry)
            })
            .collect(),
    )
}
