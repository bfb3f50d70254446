use serde::Serialize;
use tracing::warn;

use crate::model::SentenceRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalSpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl GlobalSpan {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    pub tokens: Vec<String>,
    pub sentence_offsets: Vec<usize>,
    pub entity_spans: Vec<GlobalSpan>,
    pub trigger_spans: Vec<GlobalSpan>,
    pub invalid_spans: usize,
}

pub fn accumulate(sentences: &[&SentenceRecord]) -> TokenStream {
    let mut stream = TokenStream {
        sentence_offsets: Vec::with_capacity(sentences.len()),
        ..TokenStream::default()
    };
    let mut offset = 0_usize;

    for sentence in sentences {
        let token_count = sentence.words.len();
        stream.sentence_offsets.push(offset);
        stream.tokens.extend(sentence.words.iter().cloned());

        for mention in &sentence.entity_mentions {
            match lift_span(
                offset,
                token_count,
                mention.start,
                mention.end,
                &mention.entity_type,
            ) {
                Some(span) => stream.entity_spans.push(span),
                None => {
                    warn!(
                        sentence_id = %sentence.sentence_id,
                        start = mention.start,
                        end = mention.end,
                        token_count,
                        label = %mention.entity_type,
                        "skipping entity mention outside its sentence"
                    );
                    stream.invalid_spans += 1;
                }
            }
        }

        for mention in &sentence.event_mentions {
            let Some(trigger) = mention.trigger.as_ref() else {
                continue;
            };
            match lift_span(
                offset,
                token_count,
                trigger.start,
                trigger.end,
                &mention.event_type,
            ) {
                Some(span) => stream.trigger_spans.push(span),
                None => {
                    warn!(
                        sentence_id = %sentence.sentence_id,
                        start = trigger.start,
                        end = trigger.end,
                        token_count,
                        label = %mention.event_type,
                        "skipping event trigger outside its sentence"
                    );
                    stream.invalid_spans += 1;
                }
            }
        }

        offset += token_count;
    }

    stream
}

fn lift_span(
    offset: usize,
    token_count: usize,
    start: usize,
    end: usize,
    label: &str,
) -> Option<GlobalSpan> {
    if start >= end || end > token_count {
        return None;
    }
    Some(GlobalSpan::new(offset + start, offset + end, label))
}
