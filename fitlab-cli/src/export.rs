//! JSON and CSV export of catalog collections.
//!
//! JSON keeps the nested shape of the records. CSV flattens each collection to
//! one row per leaf record, repeating the parent's id and name.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::ValueEnum;
use serde::Serialize;

use fitlab_core::domain::{
    AthleteStatus, Category, EquipmentStatus, PeriodizationKind, Scoring, Sport, Volume,
};
use fitlab_core::Catalog;

use crate::Collection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// The whole catalog. Nested collections have no flat form, so JSON only.
pub fn export_catalog(catalog: &Catalog, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(catalog).context("failed to serialize catalog")?;
            json.push('\n');
            Ok(json)
        }
        ExportFormat::Csv => bail!("CSV export needs a collection, e.g. `export athletes --format csv`"),
    }
}

pub fn export_collection(
    catalog: &Catalog,
    collection: Collection,
    format: ExportFormat,
) -> Result<String> {
    tracing::debug!(?collection, ?format, "exporting");
    match format {
        ExportFormat::Json => collection_json(catalog, collection),
        ExportFormat::Csv => collection_csv(catalog, collection),
    }
}

fn collection_json(catalog: &Catalog, collection: Collection) -> Result<String> {
    let json = match collection {
        Collection::Athletes => serde_json::to_string_pretty(&catalog.athletes),
        Collection::SubModules => serde_json::to_string_pretty(&catalog.sub_modules),
        Collection::Batteries => serde_json::to_string_pretty(&catalog.batteries),
        Collection::Skills => serde_json::to_string_pretty(&catalog.skill_components),
        Collection::Equipment => serde_json::to_string_pretty(&catalog.equipment),
        Collection::Sessions => serde_json::to_string_pretty(&catalog.sessions),
        Collection::Periodization => serde_json::to_string_pretty(&catalog.periodization_models),
    }
    .context("failed to serialize collection")?;
    Ok(json + "\n")
}

// ─── CSV rows ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct AthleteRow<'a> {
    id: &'a str,
    name: &'a str,
    sport: Sport,
    status: AthleteStatus,
    age: u8,
    position: &'a str,
    readiness: u8,
    last_assessed: NaiveDate,
    assessments: usize,
}

#[derive(Serialize)]
struct ScreenRow<'a> {
    module_id: &'a str,
    module: &'a str,
    category: Category,
    screen_id: &'a str,
    screen: &'a str,
    duration_min: u16,
    metrics: String,
    equipment: String,
}

/// A performance test under a battery or a skill component.
#[derive(Serialize)]
struct TestRow<'a> {
    parent_id: &'a str,
    parent: &'a str,
    group: &'a str,
    test_id: &'a str,
    test: &'a str,
    unit: &'a str,
    scoring: Scoring,
    norm_bands: usize,
}

#[derive(Serialize)]
struct EquipmentRow<'a> {
    id: &'a str,
    name: &'a str,
    kind: &'a str,
    location: &'a str,
    status: EquipmentStatus,
    last_calibrated: NaiveDate,
    calibration_interval_days: u32,
    calibration_due: NaiveDate,
}

#[derive(Serialize)]
struct SessionRow<'a> {
    id: &'a str,
    title: &'a str,
    date: NaiveDate,
    start: NaiveTime,
    duration_min: u16,
    location: &'a str,
    battery_id: Option<&'a str>,
    athlete_ids: String,
}

#[derive(Serialize)]
struct PhaseRow<'a> {
    model_id: &'a str,
    model: &'a str,
    kind: PeriodizationKind,
    phase: &'a str,
    weeks: u8,
    focus: &'a str,
    intensity_pct: u8,
    volume: Volume,
}

fn collection_csv(catalog: &Catalog, collection: Collection) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    match collection {
        Collection::Athletes => {
            for a in &catalog.athletes {
                wtr.serialize(AthleteRow {
                    id: &a.id,
                    name: &a.name,
                    sport: a.sport,
                    status: a.status,
                    age: a.age,
                    position: &a.position,
                    readiness: a.readiness,
                    last_assessed: a.last_assessed,
                    assessments: a.assessments.len(),
                })?;
            }
        }
        Collection::SubModules => {
            for m in &catalog.sub_modules {
                for s in &m.screens {
                    wtr.serialize(ScreenRow {
                        module_id: &m.id,
                        module: &m.name,
                        category: m.category,
                        screen_id: &s.id,
                        screen: &s.name,
                        duration_min: s.duration_min,
                        metrics: s.metrics.join(";"),
                        equipment: s.equipment.join(";"),
                    })?;
                }
            }
        }
        Collection::Batteries => {
            for b in &catalog.batteries {
                for t in &b.tests {
                    wtr.serialize(TestRow {
                        parent_id: &b.id,
                        parent: &b.name,
                        group: b.category.label(),
                        test_id: &t.id,
                        test: &t.name,
                        unit: &t.unit,
                        scoring: t.scoring,
                        norm_bands: t.norms.len(),
                    })?;
                }
            }
        }
        Collection::Skills => {
            for s in &catalog.skill_components {
                for t in &s.tests {
                    wtr.serialize(TestRow {
                        parent_id: &s.id,
                        parent: &s.name,
                        group: s.kind.label(),
                        test_id: &t.id,
                        test: &t.name,
                        unit: &t.unit,
                        scoring: t.scoring,
                        norm_bands: t.norms.len(),
                    })?;
                }
            }
        }
        Collection::Equipment => {
            for e in &catalog.equipment {
                wtr.serialize(EquipmentRow {
                    id: &e.id,
                    name: &e.name,
                    kind: &e.kind,
                    location: &e.location,
                    status: e.status,
                    last_calibrated: e.last_calibrated,
                    calibration_interval_days: e.calibration_interval_days,
                    calibration_due: e.calibration_due(),
                })?;
            }
        }
        Collection::Sessions => {
            for s in &catalog.sessions {
                wtr.serialize(SessionRow {
                    id: &s.id,
                    title: &s.title,
                    date: s.date,
                    start: s.start,
                    duration_min: s.duration_min,
                    location: &s.location,
                    battery_id: s.battery_id.as_deref(),
                    athlete_ids: s.athlete_ids.join(";"),
                })?;
            }
        }
        Collection::Periodization => {
            for m in &catalog.periodization_models {
                for p in &m.phases {
                    wtr.serialize(PhaseRow {
                        model_id: &m.id,
                        model: &m.name,
                        kind: m.kind,
                        phase: &p.name,
                        weeks: p.weeks,
                        focus: &p.focus,
                        intensity_pct: p.intensity_pct,
                        volume: p.volume,
                    })?;
                }
            }
        }
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn athletes_csv_has_header_and_one_row_each() {
        let catalog = Catalog::builtin();
        let csv = export_collection(&catalog, Collection::Athletes, ExportFormat::Csv).unwrap();
        let rows = lines(&csv);
        assert_eq!(
            rows[0],
            "id,name,sport,status,age,position,readiness,last_assessed,assessments"
        );
        assert_eq!(rows.len(), catalog.athletes.len() + 1);
        assert!(rows[1].starts_with("ath_001,Maya Okafor,soccer,active,21,Midfielder,88,2025-03-03,3"));
    }

    #[test]
    fn nested_collections_flatten_to_leaf_rows() {
        let catalog = Catalog::builtin();

        let screens = export_collection(&catalog, Collection::SubModules, ExportFormat::Csv).unwrap();
        assert_eq!(lines(&screens).len(), catalog.screen_count() + 1);

        let batteries = export_collection(&catalog, Collection::Batteries, ExportFormat::Csv).unwrap();
        let skills = export_collection(&catalog, Collection::Skills, ExportFormat::Csv).unwrap();
        assert_eq!(
            lines(&batteries).len() - 1 + lines(&skills).len() - 1,
            catalog.test_count()
        );
        assert!(batteries.contains("bat_field,Team Sport Field Battery"));
        assert!(batteries.contains("higher_is_better"));

        let phases: usize = catalog.periodization_models.iter().map(|m| m.phases.len()).sum();
        let csv = export_collection(&catalog, Collection::Periodization, ExportFormat::Csv).unwrap();
        assert_eq!(lines(&csv).len(), phases + 1);
    }

    #[test]
    fn equipment_csv_includes_due_date() {
        let catalog = Catalog::builtin();
        let csv = export_collection(&catalog, Collection::Equipment, ExportFormat::Csv).unwrap();
        let first = &catalog.equipment[0];
        let due = first.calibration_due().to_string();
        let row = lines(&csv)
            .into_iter()
            .find(|line| line.starts_with(&format!("{},", first.id)))
            .unwrap();
        assert!(row.ends_with(&due));
    }

    #[test]
    fn collection_json_round_trips_through_catalog_types() {
        let catalog = Catalog::builtin();
        let json = export_collection(&catalog, Collection::Sessions, ExportFormat::Json).unwrap();
        let sessions: Vec<fitlab_core::domain::Session> = serde_json::from_str(&json).unwrap();
        assert_eq!(sessions, catalog.sessions);
    }

    #[test]
    fn whole_catalog_is_json_only() {
        let catalog = Catalog::builtin();
        let json = export_catalog(&catalog, ExportFormat::Json).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
        assert!(export_catalog(&catalog, ExportFormat::Csv).is_err());
    }

    #[test]
    fn export_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equipment.csv");
        let catalog = Catalog::builtin();
        let csv = export_collection(&catalog, Collection::Equipment, ExportFormat::Csv).unwrap();
        std::fs::write(&path, &csv).unwrap();
        let read = std::fs::read_to_string(&path).unwrap();
        assert!(read.starts_with("id,name,kind,location,status,"));
    }
}
