use crate::global_settings::GlobalSettings;
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};
use log::{debug, warn};
use overlap_lib::{Interval, OverlapResolver, Settings};
use serde::Deserialize;
use std::path::Path;

pub type Resolver = OverlapResolver<DateTime<Local>, String>;

/// One event, as found in the input file
#[derive(Deserialize)]
struct EventRecord {
    start: DateTime<FixedOffset>,
    stop: DateTime<FixedOffset>,
    data: String,
}

/// Load all events from a JSON file
pub fn load_events(path: &Path, settings: &GlobalSettings) -> Result<Resolver> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    parse_events(&content, settings.resolver, settings.skip_invalid)
        .with_context(|| format!("Invalid events in {}", path.display()))
}

/// Parse a JSON array of events.  Events that cannot be added to the resolver
/// either abort the parsing, or are skipped when skip_invalid is set.
pub fn parse_events(
    content: &str,
    settings: Settings,
    skip_invalid: bool,
) -> Result<Resolver> {
    let records: Vec<EventRecord> = serde_json::from_str(content)?;
    let mut resolver = Resolver::with_settings(settings);

    for (idx, rec) in records.into_iter().enumerate() {
        let added = Interval::new(
            rec.start.with_timezone(&Local),
            rec.stop.with_timezone(&Local),
            rec.data,
        )
        .and_then(|e| resolver.add(e));

        match added {
            Ok(()) => {}
            Err(e) if skip_invalid => {
                warn!("Skipping event #{idx}: {e}");
            }
            Err(e) => {
                return Err(anyhow::Error::from(e)
                    .context(format!("Event #{idx}")));
            }
        }
    }

    debug!("Loaded {} events", resolver.len());
    Ok(resolver)
}
