//! `fitlab-cli`: scripting access to the catalog, drill-down views and routes.

mod export;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use fitlab_core::badge::Badged;
use fitlab_core::domain::{AthleteStatus, Keyed, Sport, Titled};
use fitlab_core::drill::views;
use fitlab_core::logging::{init_logging, LogConfig, LogTarget};
use fitlab_core::query::{
    calibration_queue, due_count, upcoming_sessions, AthleteFilter, DashboardSummary,
};
use fitlab_core::{
    BackAction, Catalog, DashboardConfig, DrillDown, DrillEvent, DrillScreen, HashRouter,
    Level, SelectionStack,
};

use crate::export::{export_catalog, export_collection, ExportFormat};

#[derive(Parser)]
#[command(name = "fitlab-cli", about = "FitLab fitness-assessment catalog from the command line")]
struct Cli {
    /// Config file. Defaults to <config dir>/fitlab/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON catalog to load instead of the built-in fixtures.
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) for date-relative commands.
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the records of one collection.
    List {
        collection: Collection,

        /// Athletes only: keep one sport (e.g. soccer, track).
        #[arg(long, value_parser = parse_sport)]
        sport: Option<Sport>,

        /// Athletes only: keep one status (e.g. injured).
        #[arg(long, value_parser = parse_status)]
        status: Option<AthleteStatus>,

        /// Athletes only: case-insensitive match on name or position.
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Replay selections through a drill-down view and print the screen.
    Drill {
        view: View,

        /// Ids to select, outermost first: a root entity, then one of its children.
        #[arg(long = "select", value_name = "ID")]
        select: Vec<String>,

        /// Back presses applied after the selections.
        #[arg(long, default_value_t = 0)]
        back: usize,

        /// Print the screen as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Resolve a location fragment to its tab.
    Route {
        /// Fragment such as #schedule. A missing '#' is added.
        fragment: String,
    },

    /// Equipment ordered by next calibration date.
    Calibration {
        /// Days ahead of the due date at which items are flagged.
        #[arg(long)]
        warning_days: Option<u32>,
    },

    /// Dashboard aggregates.
    Summary {
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Export one collection, or the whole catalog as JSON.
    Export {
        collection: Option<Collection>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file. Defaults to stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Athletes,
    SubModules,
    Batteries,
    Skills,
    Equipment,
    Sessions,
    Periodization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    Athletes,
    Assessment,
    IntegratedTesting,
    SkillPerformance,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        DashboardConfig::discover(cli.config.as_deref()).context("load configuration")?;
    if let Some(path) = cli.fixtures.clone() {
        config.fixtures = Some(path);
    }
    if let Some(today) = cli.today {
        config.today = Some(today);
    }

    let log = LogConfig::from_settings(&config.log, cli.verbose).with_target(LogTarget::Stderr);
    init_logging(&log).context("initialize logging")?;

    let catalog = config.load_catalog().context("load catalog")?;
    let today = config.today(&catalog);
    tracing::debug!(%today, athletes = catalog.athletes.len(), "catalog ready");

    match cli.command {
        Commands::List {
            collection,
            sport,
            status,
            search,
        } => {
            let filter = AthleteFilter {
                sport,
                status,
                search,
            };
            if collection != Collection::Athletes && !filter.is_empty() {
                bail!("--sport, --status and --search apply to athletes only");
            }
            print!("{}", list(&catalog, collection, &filter, today));
        }
        Commands::Drill {
            view,
            select,
            back,
            json,
        } => {
            let report = drill(&catalog, view, &select, back)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serialize screen")?
                );
            } else {
                print!("{}", report.render_text());
            }
        }
        Commands::Route { fragment } => {
            let fragment = normalize_fragment(&fragment);
            match HashRouter::resolve(&fragment) {
                Some(tab) => println!("{fragment} -> {} (tab {})", tab.label(), tab.index() + 1),
                None => bail!("no route for {fragment}"),
            }
        }
        Commands::Calibration { warning_days } => {
            let warning_days = warning_days.unwrap_or(config.calibration_warning_days);
            print!("{}", calibration(&catalog, today, warning_days));
        }
        Commands::Summary { json } => {
            let summary = DashboardSummary::compute(&catalog, today, config.calibration_warning_days);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).context("serialize summary")?
                );
            } else {
                print!("{}", summary_text(&summary));
            }
        }
        Commands::Export {
            collection,
            format,
            out,
        } => {
            let content = match collection {
                Some(collection) => export_collection(&catalog, collection, format)?,
                None => export_catalog(&catalog, format)?,
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("write {}", path.display()))?;
                    eprintln!("Exported to {}", path.display());
                }
                None => print!("{content}"),
            }
        }
    }

    Ok(())
}

// ─── Argument parsing ────────────────────────────────────────────────

/// Lowercase with everything but letters and digits removed.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Accepts the serialized name or the display label, loosely: "track",
/// "Track & Field" and "track-field" all select `Sport::Track`.
fn parse_sport(s: &str) -> Result<Sport, String> {
    let wanted = normalize(s);
    Sport::ALL
        .into_iter()
        .find(|sport| {
            normalize(sport.label()) == wanted || normalize(&format!("{sport:?}")) == wanted
        })
        .ok_or_else(|| format!("unknown sport '{s}'"))
}

fn parse_status(s: &str) -> Result<AthleteStatus, String> {
    let wanted = normalize(s);
    AthleteStatus::ALL
        .into_iter()
        .find(|status| normalize(status.label()) == wanted)
        .ok_or_else(|| format!("unknown status '{s}'"))
}

fn normalize_fragment(fragment: &str) -> String {
    if fragment.starts_with('#') {
        fragment.to_string()
    } else {
        format!("#{fragment}")
    }
}

// ─── Drill replay ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Row {
    id: String,
    title: String,
}

/// Serializable snapshot of a rendered drill-down screen.
#[derive(Debug, Serialize)]
struct ScreenReport {
    view: &'static str,
    level: Level,
    /// Set on a not-found screen: the id that failed to resolve.
    missing: Option<String>,
    back: Option<BackAction>,
    /// Titles from the root down to the shown entity.
    path: Vec<String>,
    rows: Vec<Row>,
    /// Full record on a leaf screen.
    detail: Option<serde_json::Value>,
}

impl ScreenReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let mut crumbs = vec![self.view.to_string()];
        crumbs.extend(self.path.iter().cloned());
        out.push_str(&format!("=== {} ===\n", crumbs.join(" › ")));
        out.push_str(&format!("Level:        {}\n", self.level.label()));

        if let Some(id) = &self.missing {
            out.push_str(&format!("Not found:    '{id}'\n"));
        }
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&format!("{:>3}. {:<22} {}\n", i + 1, row.id, row.title));
        }
        if let Some(detail) = &self.detail {
            if let Ok(pretty) = serde_json::to_string_pretty(detail) {
                out.push_str(&pretty);
                out.push('\n');
            }
        }
        if let Some(back) = self.back {
            let label = match back {
                BackAction::ClearLeaf => "back to list",
                BackAction::ClearAll => "back to root",
            };
            out.push_str(&format!("Back:         {label}\n"));
        }
        out
    }
}

fn rows<T: Keyed + Titled>(items: &[T]) -> Vec<Row> {
    items
        .iter()
        .map(|item| Row {
            id: item.id().to_string(),
            title: item.title().to_string(),
        })
        .collect()
}

/// Apply the selections as the shell would, then the back presses, each one
/// taking whatever back action the current screen offers.
fn replay<'a, R, C>(
    name: &'static str,
    drill: DrillDown<'a, R, C>,
    select: &[String],
    back: usize,
) -> Result<ScreenReport>
where
    R: Keyed + Titled,
    C: Keyed + Titled + Serialize,
{
    if select.len() > 2 {
        bail!("drill takes at most two --select ids (root, then child)");
    }
    let mut stack = SelectionStack::new();
    for (i, id) in select.iter().enumerate() {
        let event = if i == 0 {
            DrillEvent::SelectRoot(id.clone())
        } else {
            DrillEvent::SelectMid(id.clone())
        };
        tracing::debug!(view = name, ?event, "replay");
        stack.apply(event);
    }
    for _ in 0..back {
        match drill.render(&stack).back() {
            Some(action) => stack.apply_back(action),
            None => break,
        }
    }

    let screen = drill.render(&stack);
    let level = screen.level();
    let back = screen.back();
    let report = match screen {
        DrillScreen::Root { items } => ScreenReport {
            view: name,
            level,
            missing: None,
            back,
            path: Vec::new(),
            rows: rows(items),
            detail: None,
        },
        DrillScreen::Mid {
            entity, children, ..
        } => ScreenReport {
            view: name,
            level,
            missing: None,
            back,
            path: vec![entity.title().to_string()],
            rows: rows(children),
            detail: None,
        },
        DrillScreen::Leaf { parent, entity, .. } => ScreenReport {
            view: name,
            level,
            missing: None,
            back,
            path: vec![parent.title().to_string(), entity.title().to_string()],
            rows: Vec::new(),
            detail: Some(serde_json::to_value(entity).context("serialize record")?),
        },
        DrillScreen::NotFound { id, .. } => ScreenReport {
            view: name,
            level,
            missing: Some(id),
            back,
            path: Vec::new(),
            rows: Vec::new(),
            detail: None,
        },
    };
    Ok(report)
}

fn drill(catalog: &Catalog, view: View, select: &[String], back: usize) -> Result<ScreenReport> {
    match view {
        View::Athletes => replay("Athletes", views::athletes(catalog), select, back),
        View::Assessment => replay("Assessment", views::assessment(catalog), select, back),
        View::IntegratedTesting => replay(
            "Integrated Testing",
            views::integrated_testing(catalog),
            select,
            back,
        ),
        View::SkillPerformance => replay(
            "Skill Performance",
            views::skill_performance(catalog),
            select,
            back,
        ),
    }
}

// ─── Plain-text listings ─────────────────────────────────────────────

fn list(catalog: &Catalog, collection: Collection, filter: &AthleteFilter, today: NaiveDate) -> String {
    let mut out = String::new();
    match collection {
        Collection::Athletes => {
            let athletes = filter.apply(&catalog.athletes);
            out.push_str(&format!(
                "=== Athletes ({} of {}, {}) ===\n",
                athletes.len(),
                catalog.athletes.len(),
                filter.describe()
            ));
            for a in athletes {
                out.push_str(&format!(
                    "{:<10} {:<22} {:<14} {:<11} {:>3}%  {}\n",
                    a.id,
                    a.name,
                    a.sport.label(),
                    a.status.badge().label,
                    a.readiness,
                    a.position
                ));
            }
        }
        Collection::SubModules => {
            out.push_str("=== Assessment sub-modules ===\n");
            for m in &catalog.sub_modules {
                out.push_str(&format!(
                    "{:<14} {:<28} {:<12} {} screens, {} min\n",
                    m.id,
                    m.name,
                    m.category.badge().label,
                    m.screens.len(),
                    m.total_minutes()
                ));
            }
        }
        Collection::Batteries => {
            out.push_str("=== Test batteries ===\n");
            for b in &catalog.batteries {
                out.push_str(&format!(
                    "{:<18} {:<28} {:<12} {} tests\n",
                    b.id,
                    b.name,
                    b.category.badge().label,
                    b.tests.len()
                ));
            }
        }
        Collection::Skills => {
            out.push_str("=== Skill components ===\n");
            for s in &catalog.skill_components {
                out.push_str(&format!(
                    "{:<16} {:<20} {:<12} {} tests\n",
                    s.id,
                    s.name,
                    s.kind.badge().label,
                    s.tests.len()
                ));
            }
        }
        Collection::Equipment => {
            out.push_str("=== Equipment ===\n");
            for e in &catalog.equipment {
                out.push_str(&format!(
                    "{:<14} {:<28} {:<16} {}\n",
                    e.id,
                    e.name,
                    e.status.label(),
                    e.location
                ));
            }
        }
        Collection::Sessions => {
            let upcoming = upcoming_sessions(&catalog.sessions, today);
            out.push_str(&format!(
                "=== Sessions ({} upcoming from {today}) ===\n",
                upcoming.len()
            ));
            for s in upcoming {
                out.push_str(&format!(
                    "{} {}  {:<32} {:>3} min  {}\n",
                    s.date,
                    s.start.format("%H:%M"),
                    s.title,
                    s.duration_min,
                    s.location
                ));
            }
        }
        Collection::Periodization => {
            out.push_str("=== Periodization models ===\n");
            for p in &catalog.periodization_models {
                out.push_str(&format!(
                    "{:<14} {:<26} {:<18} {} phases, {} weeks\n",
                    p.id,
                    p.name,
                    p.kind.label(),
                    p.phases.len(),
                    p.total_weeks()
                ));
            }
        }
    }
    out
}

fn calibration(catalog: &Catalog, today: NaiveDate, warning_days: u32) -> String {
    let queue = calibration_queue(&catalog.equipment, today, warning_days);
    let mut out = format!(
        "=== Calibration queue ({} due, warning {warning_days} days, as of {today}) ===\n",
        due_count(&queue)
    );
    for entry in &queue {
        out.push_str(&format!(
            "{:<10} {:<28} due {}  {:>5} days\n",
            entry.state.badge().label,
            entry.equipment.name,
            entry.due,
            entry.days_remaining
        ));
    }
    out
}

fn summary_text(summary: &DashboardSummary) -> String {
    let mut out = format!("=== Dashboard ({}) ===\n", summary.as_of);
    out.push_str(&format!("Athletes:             {}\n", summary.athletes));
    for (status, count) in &summary.by_status {
        out.push_str(&format!("  {:<20}{count}\n", status.label()));
    }
    match summary.mean_readiness {
        Some(mean) => out.push_str(&format!("Mean readiness:       {mean:.1}\n")),
        None => out.push_str("Mean readiness:       n/a\n"),
    }
    out.push_str(&format!("Assessment modules:   {}\n", summary.sub_modules));
    out.push_str(&format!("Screens:              {}\n", summary.screens));
    out.push_str(&format!("Performance tests:    {}\n", summary.tests));
    out.push_str(&format!("Sessions (7 days):    {}\n", summary.sessions_next_7_days));
    out.push_str(&format!(
        "Calibration due:      {} of {}\n",
        summary.equipment_due, summary.equipment_total
    ));
    out
}
