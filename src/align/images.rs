use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Number, Value};
use tracing::warn;

use crate::model::RawImageSource;

const BOX_FIELD_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub object_id: String,
    pub x1: Number,
    pub y1: Number,
    pub x2: Number,
    pub y2: Number,
}

impl BoundingBox {
    // Short arrays and unreadable coordinates zero all four coordinates and
    // report `true`; the object id is kept whenever element 0 exists.
    fn from_value(value: &Value) -> (Self, bool) {
        let fields = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
        let object_id = fields.first().map(object_id_text).unwrap_or_default();

        let coordinates = if fields.len() < BOX_FIELD_COUNT {
            None
        } else {
            fields[1..BOX_FIELD_COUNT]
                .iter()
                .map(coordinate)
                .collect::<Option<Vec<Number>>>()
        };

        match coordinates.as_deref() {
            Some([x1, y1, x2, y2]) => {
                let parsed = Self {
                    object_id,
                    x1: x1.clone(),
                    y1: y1.clone(),
                    x2: x2.clone(),
                    y2: y2.clone(),
                };
                (parsed, false)
            }
            _ => (Self::zeroed(object_id), true),
        }
    }

    fn zeroed(object_id: String) -> Self {
        Self {
            object_id,
            x1: Number::from(0),
            y1: Number::from(0),
            x2: Number::from(0),
            y2: Number::from(0),
        }
    }
}

fn coordinate(value: &Value) -> Option<Number> {
    match value {
        Value::Number(number) => Some(number.clone()),
        Value::String(text) => text.trim().parse::<Number>().ok(),
        _ => None,
    }
}

fn object_id_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub id: String,
    pub event_type: Option<String>,
    pub role: BTreeMap<String, Vec<BoundingBox>>,
}

#[derive(Debug, Clone, Default)]
pub struct ImageMerge {
    pub records: BTreeMap<String, ImageRecord>,
    pub groups: BTreeMap<String, Vec<ImageRecord>>,
    pub malformed_boxes: usize,
}

// First source to set an event type owns it; boxes concatenate in source order.
pub fn merge_image_sources(sources: &[RawImageSource], article_id: &str) -> ImageMerge {
    let mut merge = ImageMerge::default();

    for source in sources {
        for (id, raw) in source {
            if !id.starts_with(article_id) {
                continue;
            }

            let record = merge
                .records
                .entry(id.clone())
                .or_insert_with(|| ImageRecord {
                    id: id.clone(),
                    event_type: None,
                    role: BTreeMap::new(),
                });

            if record.event_type.is_none() {
                record.event_type = raw
                    .event_type
                    .as_ref()
                    .filter(|event_type| !event_type.is_empty())
                    .cloned();
            }

            for (role, boxes) in &raw.role {
                let merged_boxes = record.role.entry(role.clone()).or_default();
                for value in boxes {
                    let (bounding_box, malformed) = BoundingBox::from_value(value);
                    if malformed {
                        warn!(
                            image_id = %id,
                            role = %role,
                            box_value = %value,
                            "bounding box short or not numeric; using zero coordinates"
                        );
                        merge.malformed_boxes += 1;
                    }
                    merged_boxes.push(bounding_box);
                }
            }
        }
    }

    for record in merge.records.values() {
        if let Some(event_type) = &record.event_type {
            merge
                .groups
                .entry(event_type.clone())
                .or_default()
                .push(record.clone());
        }
    }

    merge
}
