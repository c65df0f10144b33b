use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Arg, ArgMatches, arg};
use std::path::PathBuf;

pub struct GlobalSettings {
    pub events_file: Option<PathBuf>,

    // Reference time for all queries ("now" by default)
    pub reftime: DateTime<Local>,

    pub resolver: overlap_lib::Settings,

    // Whether invalid events are dropped (with a warning) instead of aborting
    pub skip_invalid: bool,

    pub table: crate::tables::Settings,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--events [FILE] "JSON file listing the events").global(true),
            arg!(--at [TIME] "Reference time (RFC 3339), defaults to now")
                .global(true),
            arg!(--"reject-nested" "Reject events fully inside another one")
                .global(true),
            arg!(--"skip-invalid" "Ignore invalid events instead of failing")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Result<Self> {
        let reftime = match args.get_one::<String>("at") {
            None => Local::now(),
            Some(at) => DateTime::parse_from_rfc3339(at)
                .with_context(|| format!("Invalid reference time {at}"))?
                .with_timezone(&Local),
        };
        Ok(GlobalSettings {
            events_file: args.get_one::<String>("events").map(PathBuf::from),
            reftime,
            resolver: overlap_lib::Settings {
                reject_nested: args.get_flag("reject-nested"),
            },
            skip_invalid: args.get_flag("skip-invalid"),
            table: crate::tables::Settings::default(),
        })
    }
}
