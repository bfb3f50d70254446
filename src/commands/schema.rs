use anyhow::Result;
use tracing::info;

use super::inputs::load_corpus;
use crate::align::derive_schema;
use crate::cli::{SCHEMA_FILE_NAME, SchemaArgs};
use crate::util::write_json_pretty;

pub fn run(args: SchemaArgs) -> Result<()> {
    let corpus_path = args.data.corpus_path();
    let corpus = load_corpus(&corpus_path)?;
    let schema = derive_schema(&corpus);

    let role_count = schema.0.values().map(|entry| entry.roles.len()).sum::<usize>();
    if args.dry_run {
        info!(
            event_types = schema.len(),
            roles = role_count,
            corpus = %corpus_path.display(),
            "schema dry-run complete"
        );
        return Ok(());
    }

    // Never defaults onto the schema `view` reads.
    let output_path = args
        .output
        .unwrap_or_else(|| args.data.data_root.join("derived").join(SCHEMA_FILE_NAME));
    write_json_pretty(&output_path, &schema)?;
    info!(
        path = %output_path.display(),
        event_types = schema.len(),
        roles = role_count,
        "wrote derived event schema"
    );

    Ok(())
}
