use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const CORPUS_FILE_NAME: &str = "text_only_event.json";
pub const SCHEMA_FILE_NAME: &str = "event_schema.json";
pub const DEFAULT_IMAGE_FILE_NAMES: [&str; 2] =
    ["image_only_event.json", "image_multimedia_event.json"];

#[derive(Parser, Debug)]
#[command(
    name = "m2e2-align",
    version,
    about = "Align M2E2 sentence annotations into article-level event views"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    View(ViewArgs),
    Schema(SchemaArgs),
    Articles(ArticlesArgs),
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    #[arg(long, default_value = "data")]
    pub data_root: PathBuf,

    #[arg(long)]
    pub corpus_path: Option<PathBuf>,

    #[arg(long)]
    pub schema_path: Option<PathBuf>,
}

impl DataArgs {
    pub fn corpus_path(&self) -> PathBuf {
        self.corpus_path
            .clone()
            .unwrap_or_else(|| self.data_root.join(CORPUS_FILE_NAME))
    }

    pub fn schema_path(&self) -> PathBuf {
        self.schema_path
            .clone()
            .unwrap_or_else(|| self.data_root.join(SCHEMA_FILE_NAME))
    }

    pub fn default_image_paths(&self) -> Vec<PathBuf> {
        DEFAULT_IMAGE_FILE_NAMES
            .iter()
            .map(|name| self.data_root.join(name))
            .collect()
    }
}

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[arg(
        long,
        required_unless_present = "article_file",
        conflicts_with = "article_file"
    )]
    pub article_id: Option<String>,

    #[arg(long)]
    pub article_file: Option<String>,

    #[arg(long = "image-source")]
    pub image_sources: Vec<PathBuf>,

    #[arg(long)]
    pub tags_path: Option<PathBuf>,

    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl ViewArgs {
    pub fn image_paths(&self) -> Vec<PathBuf> {
        if self.image_sources.is_empty() {
            self.data.default_image_paths()
        } else {
            self.image_sources.clone()
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ArticlesArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[arg(long = "image-source")]
    pub image_sources: Vec<PathBuf>,
}
