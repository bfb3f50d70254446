mod events;
mod images;
mod offsets;
mod palette;
mod schema;
mod select;
mod spans;
mod tagger;
mod view;

pub use schema::derive_schema;
pub use select::article_id_from_file_name;
pub use tagger::{NullTagger, PrecomputedTagger, SentenceTagger, SentenceTags};
pub use view::{ArticleView, ReconcileInputs, reconcile_article};
