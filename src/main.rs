//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; roster and quorum math live in the use cases.

use std::path::PathBuf;
use std::sync::Arc;

use bod_minutes::adapters::fs::{FsMeetingDir, FsMinutesRepo};
use bod_minutes::adapters::ui::prompt::InquirePrompter;
use bod_minutes::adapters::ui::tui::TuiInputPort;
use bod_minutes::domain::Semester;
use bod_minutes::ports::{InputPort, MeetingDirPort, MinutesRepoPort, PrompterPort};
use bod_minutes::usecases::{AttendanceService, RosterService};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    bod_minutes::adapters::ui::init_ui();

    let cfg = bod_minutes::shared::config::AppConfig::load().unwrap_or_default();
    let minutes_root = PathBuf::from(cfg.minutes_root_or_default());
    let minutes_root_abs = minutes_root
        .canonicalize()
        .unwrap_or_else(|_| minutes_root.clone());
    info!(path = %minutes_root_abs.display(), "minutes tree root");
    let semester_override = cfg.semester.as_deref().map(Semester::new);
    if let Some(semester) = &semester_override {
        info!(semester = %semester, "semester override set (BOD_MINUTES_SEMESTER)");
    }

    // --- Outbound adapters ---
    let dir: Arc<dyn MeetingDirPort> =
        Arc::new(FsMeetingDir::new(&minutes_root, semester_override));
    let minutes: Arc<dyn MinutesRepoPort> = Arc::new(FsMinutesRepo);
    let prompter: Arc<dyn PrompterPort> = Arc::new(InquirePrompter);

    // --- Services ---
    let roster_service = Arc::new(RosterService::new(Arc::clone(&dir), Arc::clone(&minutes)));
    let attendance_service = Arc::new(AttendanceService::new(
        Arc::clone(&minutes),
        Arc::clone(&prompter),
        Arc::clone(&roster_service),
    ));

    // --- Run (main menu -> split / roster / quorum) ---
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&dir),
        roster_service,
        attendance_service,
    ));
    input_port.run().map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
