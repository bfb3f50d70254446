pub mod articles;
mod inputs;
pub mod schema;
pub mod status;
pub mod view;
