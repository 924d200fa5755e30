//! `fitlab`: terminal dashboard entry point.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use fitlab_core::logging::{init_logging, LogConfig, LogTarget};
use fitlab_core::DashboardConfig;
use fitlab_tui::app::{AppState, Overlay};
use fitlab_tui::{input, ui};

#[derive(Parser)]
#[command(name = "fitlab", about = "FitLab: fitness-assessment dashboard in the terminal")]
struct Args {
    /// Config file. Defaults to <config dir>/fitlab/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON catalog to load instead of the built-in fixtures.
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) for schedule and calibration views.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Route to open at start-up, e.g. #schedule.
    #[arg(long)]
    route: Option<String>,

    /// Skip the welcome overlay.
    #[arg(long, default_value_t = false)]
    no_welcome: bool,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config =
        DashboardConfig::discover(args.config.as_deref()).context("load configuration")?;
    if let Some(path) = args.fixtures {
        config.fixtures = Some(path);
    }
    if let Some(today) = args.today {
        config.today = Some(today);
    }

    // The terminal is in the alternate screen, so logs go to a file.
    let log = LogConfig::from_settings(&config.log, args.verbose);
    let target = match log.target.clone() {
        LogTarget::Stderr => default_log_file().map_or(LogTarget::Off, LogTarget::File),
        other => other,
    };
    init_logging(&log.with_target(target)).context("initialize logging")?;

    let catalog = config.load_catalog().context("load catalog")?;
    let today = config.today(&catalog);
    tracing::info!(
        athletes = catalog.athletes.len(),
        tests = catalog.test_count(),
        %today,
        "starting dashboard"
    );

    let mut app = AppState::new(catalog, &config, today);
    if args.no_welcome {
        app.overlay = Overlay::None;
    }
    if let Some(route) = args.route {
        app.submit_route(&route);
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("dashboard closed");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain fragment changes (non-blocking)
        app.drain_fragments();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("fitlab").join("fitlab.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_route_and_date() {
        let args = Args::try_parse_from([
            "fitlab",
            "--route",
            "#schedule",
            "--today",
            "2025-03-10",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.route.as_deref(), Some("#schedule"));
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2025, 3, 10));
        assert_eq!(args.verbose, 2);
    }
}
