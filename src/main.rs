use std::env;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use log::{info, warn};

use coview::{GraphConfig, RawRow, Report, SessionStore};

fn main() -> Result<()> {
    coview::utils::logging::init();

    let path = env::args()
        .nth(1)
        .context("usage: coview <viewing-activity.jsonl>")?;

    info!("coview starting up...");

    let file = File::open(&path).with_context(|| format!("failed to open {path}"))?;
    let reader = BufReader::new(file);
    let rows: Vec<RawRow> = serde_json::Deserializer::from_reader(reader)
        .into_iter::<RawRow>()
        .collect::<Result<_, _>>()
        .with_context(|| format!("failed to decode rows from {path}"))?;

    info!("loaded {} raw rows", rows.len());

    let store = SessionStore::load(rows);
    if store.rejected() > 0 {
        warn!("{} malformed rows skipped", store.rejected());
    }
    if let Err(err) = store.check_non_empty() {
        warn!("{err}; emitting an empty report");
    }

    let report = Report::build(&store, &GraphConfig::default());
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
