use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::model::Datasets;

/// The bundled sample datasets.
pub const SAMPLE_JSON: &str = include_str!("sample.json");

/// Tables simple enough to be stored as CSV (no nested sequences).
const CSV_TABLES: [&str; 5] = ["kitties", "mods", "classrooms", "sidekicks", "stars"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse the bundled sample datasets.
pub fn load_sample() -> Result<Datasets> {
    let ds = parse_bundle(SAMPLE_JSON).context("parsing bundled sample datasets")?;
    debug!("loaded bundled sample ({} records)", ds.record_count());
    Ok(ds)
}

/// Load datasets from a path: a directory of per-table files, or a single
/// bundle file.
pub fn load_path(path: &Path) -> Result<Datasets> {
    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

/// Load a bundle file. Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `{ "kitties": [...], "humans": { "Sam Neill": {...} }, ... }`
pub fn load_file(path: &Path) -> Result<Datasets> {
    let ext = extension_of(path);
    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading bundle {}", path.display()))?;
            let ds = parse_bundle(&text)
                .with_context(|| format!("parsing bundle {}", path.display()))?;
            debug!("loaded bundle {} ({} records)", path.display(), ds.record_count());
            Ok(ds)
        }
        other => bail!("Unsupported bundle extension: .{other}"),
    }
}

/// Load one file per table from `dir`.
///
/// Each table is read from `<table>.json`, or `<table>.csv` for the flat
/// tables. Tables without a file stay empty. When both exist the JSON file is
/// used.
pub fn load_dir(dir: &Path) -> Result<Datasets> {
    let mut ds = Datasets::default();
    let mut used: BTreeSet<PathBuf> = BTreeSet::new();

    for table in Datasets::TABLES {
        let Some(path) = table_file(dir, table) else {
            continue;
        };
        read_table_into(&mut ds, table, &path)
            .with_context(|| format!("loading table '{table}' from {}", path.display()))?;
        used.insert(path);
    }

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let path = entry.context("reading directory entry")?.path();
        if path.is_file() && !used.contains(&path) {
            warn!("ignoring {}: {}", path.display(), unused_reason(&path, &used));
        }
    }

    debug!("loaded {} tables from {} ({} records)", used.len(), dir.display(), ds.record_count());
    Ok(ds)
}

/// Parse a JSON bundle held in memory.
pub fn parse_bundle(text: &str) -> Result<Datasets> {
    serde_json::from_str(text).context("invalid dataset bundle")
}

// ---------------------------------------------------------------------------
// Per-table readers
// ---------------------------------------------------------------------------

fn table_file(dir: &Path, table: &str) -> Option<PathBuf> {
    let json = dir.join(format!("{table}.json"));
    if json.is_file() {
        return Some(json);
    }
    let csv = dir.join(format!("{table}.csv"));
    if CSV_TABLES.contains(&table) && csv.is_file() {
        return Some(csv);
    }
    None
}

/// Why a file in a table directory was not loaded.
fn unused_reason(path: &Path, used: &BTreeSet<PathBuf>) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let shadow = path.with_file_name(format!("{stem}.json"));
    if Datasets::TABLES.contains(&stem) && shadow != path && used.contains(&shadow) {
        format!("shadowed by {stem}.json")
    } else {
        "not a recognised table file".to_string()
    }
}

fn read_table_into(ds: &mut Datasets, table: &str, path: &Path) -> Result<()> {
    match table {
        "kitties" => ds.kitties = read_rows(path)?,
        "clubs" => ds.clubs = read_json(path)?,
        "mods" => ds.mods = read_rows(path)?,
        "cakes" => ds.cakes = read_json(path)?,
        "classrooms" => ds.classrooms = read_rows(path)?,
        "breweries" => ds.breweries = read_json(path)?,
        "instructors" => ds.instructors = read_json(path)?,
        "cohorts" => ds.cohorts = read_json(path)?,
        "bosses" => ds.bosses = read_json(path)?,
        "sidekicks" => ds.sidekicks = read_rows(path)?,
        "constellations" => ds.constellations = read_json(path)?,
        "stars" => ds.stars = read_rows(path)?,
        "weapons" => ds.weapons = read_json(path)?,
        "characters" => ds.characters = read_json(path)?,
        "dinosaurs" => ds.dinosaurs = read_json(path)?,
        "humans" => ds.humans = read_json(path)?,
        "movies" => ds.movies = read_json(path)?,
        other => bail!("Unknown table: {other}"),
    }
    Ok(())
}

/// Read a flat sequence table from JSON or CSV.
fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    match extension_of(path).as_str() {
        "csv" => read_csv(path),
        _ => read_json(path),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON")
}

/// CSV layout: header row with camelCase column names, one record per row.
fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    reader
        .deserialize()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}
