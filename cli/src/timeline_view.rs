use crate::loader::Resolver;
use crate::tables::{Align, Column, Table, Width};
use chrono::{DateTime, Local};
use clap::{Arg, ArgMatches, arg};
use itertools::Itertools;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct Settings {
    // Maximum number of rows (including the current state)
    pub limit: Option<usize>,
    pub table: crate::tables::Settings,
}

impl Settings {
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [arg!(--limit [COUNT] "Maximum number of changes to show")
            .value_parser(clap::value_parser!(usize))]
    }

    pub fn new(args: &ArgMatches, table: &crate::tables::Settings) -> Self {
        Settings {
            limit: args.get_one::<usize>("limit").copied(),
            table: table.clone(),
        }
    }
}

/// One row of the timeline: from `at`, the given event is active until the
/// next change.
struct Row {
    at: DateTime<Local>,
    event: Option<String>,
    until: Option<DateTime<Local>>,
}

fn format_time(ts: Option<&DateTime<Local>>) -> String {
    ts.map_or_else(|| "-".to_string(), |t| t.format(TIME_FORMAT).to_string())
}

fn build_rows(
    resolver: &Resolver,
    reftime: &DateTime<Local>,
    limit: Option<usize>,
) -> Vec<Row> {
    std::iter::once((reftime, resolver.active_at(reftime)))
        .chain(resolver.changes(reftime))
        .take(limit.unwrap_or(usize::MAX))
        .map(|(at, event)| Row {
            at: *at,
            event: event.map(|e| e.data().clone()),
            until: resolver.next_change(at).0.copied(),
        })
        .collect_vec()
}

pub fn timeline_view(
    resolver: &Resolver,
    reftime: &DateTime<Local>,
    settings: Settings,
    max_width: usize,
) -> String {
    let rows = build_rows(resolver, reftime, settings.limit);
    let at_image = |row: &Row| format_time(Some(&row.at));
    let until_image = |row: &Row| format_time(row.until.as_ref());
    let event_image = |row: &Row| row.event.clone().unwrap_or_default();

    let mut table = Table::new(
        vec![
            Column::new(&at_image).with_title("From"),
            Column::new(&until_image).with_title("Until"),
            Column::new(&event_image)
                .with_title("Event")
                .with_width(Width::ExpandWithMin(10)),
        ],
        &settings.table,
    )
    .with_title("Timeline")
    .with_col_headers();
    table.add_rows(&rows);
    table.to_string(max_width)
}

/// Describe the event active at reftime, stopping at the next change
pub fn active_view(resolver: &Resolver, reftime: &DateTime<Local>) -> String {
    match resolver.active_clipped_at(reftime) {
        None => "No active event".to_string(),
        Some(e) => format!(
            "{} (from {} to {})",
            e.data(),
            format_time(Some(e.start())),
            format_time(Some(e.stop())),
        ),
    }
}

/// Describe the next change after reftime
pub fn next_view(resolver: &Resolver, reftime: &DateTime<Local>) -> String {
    match resolver.next_change(reftime) {
        (None, _) => "No more changes".to_string(),
        (Some(at), None) => {
            format!("{}: no active event", format_time(Some(at)))
        }
        (Some(at), Some(e)) => {
            format!("{}: {}", format_time(Some(at)), e.data())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use overlap_lib::Interval;

    fn time(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    fn resolver() -> Resolver {
        let mut r = Resolver::new();
        r.add(Interval::new(time(8), time(18), "comfort".into()).unwrap())
            .unwrap();
        r.add(Interval::new(time(12), time(13), "lunch".into()).unwrap())
            .unwrap();
        r
    }

    #[test]
    fn test_rows() {
        let r = resolver();
        let rows = build_rows(&r, &time(6), None);
        let summary = rows
            .iter()
            .map(|row| {
                (
                    row.at,
                    row.event.as_deref().unwrap_or("-").to_string(),
                    row.until,
                )
            })
            .collect_vec();
        assert_eq!(
            summary,
            vec![
                (time(6), "-".to_string(), Some(time(8))),
                (time(8), "comfort".to_string(), Some(time(12))),
                (time(12), "lunch".to_string(), Some(time(13))),
                (time(13), "comfort".to_string(), Some(time(18))),
                (time(18), "-".to_string(), None),
            ]
        );
        assert_eq!(build_rows(&r, &time(6), Some(2)).len(), 2);
    }

    #[test]
    fn test_views() {
        let r = resolver();
        assert_eq!(
            active_view(&r, &time(9)),
            "comfort (from 2024-03-01 08:00 to 2024-03-01 12:00)"
        );
        assert_eq!(active_view(&r, &time(19)), "No active event");
        assert_eq!(next_view(&r, &time(9)), "2024-03-01 12:00: lunch");
        assert_eq!(
            next_view(&r, &time(17)),
            "2024-03-01 18:00: no active event"
        );
        assert_eq!(next_view(&r, &time(18)), "No more changes");
    }

    #[test]
    fn test_timeline_view() {
        let r = resolver();
        let output = timeline_view(
            &r,
            &time(12),
            Settings {
                limit: None,
                table: crate::tables::Settings::default(),
            },
            80,
        );
        let lines = output.lines().collect_vec();
        assert_eq!(lines.len(), 2 + 2 + 3);
        assert!(output.contains("lunch"));
        assert!(output.contains("comfort"));
    }
}
