//! Write the derived view as one JSON file per dashboard widget.

use crate::view::derive;
use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use gmc_core::Dataset;
use gmc_data::{DashboardConfig, Selection};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Files written by [`run_export`], in write order.
pub const EXPORT_FILES: [&str; 6] = [
    "map.json",
    "bar.json",
    "line.json",
    "pie.json",
    "summary.json",
    "manifest.json",
];

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generated_at: String,
    selection: &'a Selection,
    records: usize,
    files: &'a [&'a str],
}

fn write_json<T: Serialize>(path: PathBuf, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn run_export(
    dataset: &Dataset,
    config: &DashboardConfig,
    year: Option<i32>,
    country: Option<String>,
    out: &Path,
) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("create {}", out.display()))?;
    let (selection, view) = derive(dataset, config, year, country);

    write_json(out.join("map.json"), &view.map_series)?;
    write_json(out.join("bar.json"), &view.bar_series)?;
    write_json(out.join("line.json"), &view.line_series)?;
    write_json(out.join("pie.json"), &view.pie_series)?;
    write_json(out.join("summary.json"), &view.summary)?;
    write_json(
        out.join("manifest.json"),
        &Manifest {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            selection: &selection,
            records: dataset.len(),
            files: &EXPORT_FILES,
        },
    )?;

    info!(
        "Export complete for {}: {} files written to {}",
        selection.year,
        EXPORT_FILES.len(),
        out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_dataset, scratch_dir};

    #[test]
    fn export_writes_every_widget_file() {
        let dataset = sample_dataset();
        let out = scratch_dir("export").join("2020");
        run_export(&dataset, &DashboardConfig::default(), Some(2020), Some("France".to_string()), &out).unwrap();

        for name in EXPORT_FILES {
            assert!(out.join(name).exists(), "{} should exist", name);
        }

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["country"], "France");
        assert_eq!(summary["total_consumption_k"], "0.08K");

        let map: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("map.json")).unwrap()).unwrap();
        assert_eq!(map.as_array().unwrap().len(), 2);

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("manifest.json")).unwrap()).unwrap();
        assert_eq!(manifest["selection"]["year"], 2020);
        assert_eq!(manifest["records"], 3);
        assert!(manifest["generated_at"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn export_missing_country_writes_no_data() {
        let dataset = sample_dataset();
        let out = scratch_dir("export-miss");
        run_export(&dataset, &DashboardConfig::default(), Some(2021), Some("Germany".to_string()), &out).unwrap();

        let pie: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("pie.json")).unwrap()).unwrap();
        assert!(pie.as_array().unwrap().is_empty());
        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["status"], "no_data");
    }
}
