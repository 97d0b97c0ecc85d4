//! Replay recorded UI events through a dashboard session.
//!
//! # Event file format
//!
//! ```text
//! # comments and blank lines are ignored
//! year 2015
//! click United States
//! click
//! reset
//! ```
//!
//! `click` with no country clears the clicked country.

use anyhow::{bail, Context};
use gmc_core::Dataset;
use gmc_data::{DashboardConfig, DashboardSession, SelectionEvent};
use std::path::Path;
use std::sync::Arc;

/// Parse one line of an event file. `Ok(None)` for blank and comment lines.
pub fn parse_event(line: &str) -> anyhow::Result<Option<SelectionEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };
    let event = match keyword.to_ascii_lowercase().as_str() {
        "year" => {
            let year = rest
                .parse::<i32>()
                .with_context(|| format!("invalid year in event '{}'", line))?;
            SelectionEvent::YearChanged(year)
        }
        "click" if rest.is_empty() => SelectionEvent::MapClicked(None),
        "click" => SelectionEvent::MapClicked(Some(rest.to_string())),
        "reset" => SelectionEvent::Reset,
        other => bail!("unknown event '{}'", other),
    };
    Ok(Some(event))
}

/// Run every event and return the summary message shown after each one.
pub fn replay(session: &mut DashboardSession, script: &str) -> anyhow::Result<Vec<String>> {
    let year = session.selection().year;
    let message = session.refresh().view.summary.message();
    let mut lines = vec![format!("initial {}: {}", year, message)];
    for (number, line) in script.lines().enumerate() {
        let Some(event) = parse_event(line).with_context(|| format!("line {}", number + 1))? else {
            continue;
        };
        let published = session.handle(event);
        lines.push(format!(
            "#{} {}: {}",
            published.generation,
            published.selection.year,
            published.view.summary.message()
        ));
    }
    Ok(lines)
}

pub fn run_replay(dataset: Arc<Dataset>, config: DashboardConfig, events: &Path) -> anyhow::Result<()> {
    let script = std::fs::read_to_string(events)
        .with_context(|| format!("Failed to read events {}", events.display()))?;
    let mut session = DashboardSession::new(dataset, config);
    for line in replay(&mut session, &script)? {
        println!("{}", line);
    }
    log::info!("Replayed events from {}", events.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_dataset;

    #[test]
    fn parse_known_events() {
        assert_eq!(parse_event("year 2015").unwrap(), Some(SelectionEvent::YearChanged(2015)));
        assert_eq!(
            parse_event("  click United States ").unwrap(),
            Some(SelectionEvent::MapClicked(Some("United States".to_string())))
        );
        assert_eq!(parse_event("click").unwrap(), Some(SelectionEvent::MapClicked(None)));
        assert_eq!(parse_event("RESET").unwrap(), Some(SelectionEvent::Reset));
        assert_eq!(parse_event("# note").unwrap(), None);
        assert_eq!(parse_event("").unwrap(), None);
    }

    #[test]
    fn parse_rejects_bad_events() {
        assert!(parse_event("year soon").is_err());
        assert!(parse_event("zoom 3").is_err());
    }

    #[test]
    fn replay_reports_each_step() {
        let mut session = DashboardSession::new(sample_dataset(), DashboardConfig::default());
        let script = "year 2020\nclick Germany\n\nyear 2021\nreset\n";
        let lines = replay(&mut session, script).unwrap();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("initial 2021: France"));
        assert!(lines[1].starts_with("#2 2020: France"));
        assert!(lines[2].starts_with("#3 2020: Germany"));
        // Germany has no 2021 record
        assert_eq!(lines[3], "#4 2021: No data available for the selected country");
        assert!(lines[4].starts_with("#5 2021: France"));
    }

    #[test]
    fn replay_names_the_failing_line() {
        let mut session = DashboardSession::new(sample_dataset(), DashboardConfig::default());
        let err = replay(&mut session, "year 2020\nwarp 9\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2");
    }

    #[test]
    fn replay_fixture_events() {
        let csv = include_str!("../../fixtures/meat_consumption.csv");
        let dataset = Dataset::from_csv_str(csv).unwrap();
        let mut session = DashboardSession::new(Arc::new(dataset), DashboardConfig::default());
        let lines = replay(&mut session, include_str!("../../fixtures/events.txt")).unwrap();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("initial 2021: Argentina"));
        assert!(lines[2].starts_with("#3 2015: Japan"));
        assert!(lines[3].starts_with("#4 2021: Japan"));
        // India has no 2021 record in the fixture
        assert_eq!(lines[4], "#5 2021: No data available for the selected country");
        assert!(lines[5].starts_with("#6 2021: Argentina"));
        assert!(lines[6].starts_with("#7 2021: Argentina"));
    }
}
