use std::io;
use std::process::ExitCode;

use webide::kernel::services::settings::{ensure_settings_file, load_settings, Settings};
use webide::kernel::{AppState, Effect, NotificationLevel, Store};
use webide::script::{parse_script, replay, ScriptStep};

fn load_script(path: Option<String>) -> io::Result<Vec<ScriptStep>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let source = std::fs::read_to_string(&path)?;
    parse_script(&source).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn run() -> io::Result<()> {
    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file unavailable, using defaults");
    }
    let settings: Settings = load_settings().unwrap_or_default();
    let steps = load_script(std::env::args().nth(1))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut store = Store::new(AppState::new(&settings));
    let effects = runtime.block_on(replay(&mut store, steps));

    for effect in effects {
        if let Effect::Notify(n) = effect {
            let level = match n.level {
                NotificationLevel::Info => "info",
                NotificationLevel::Warning => "warning",
            };
            eprintln!("[{level}] {}", n.message);
        }
    }

    let json = serde_json::to_string_pretty(&store.snapshot()).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    let _logging = webide::logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "webide failed");
            eprintln!("webide: {e}");
            ExitCode::FAILURE
        }
    }
}
