use directories::ProjectDirs;
use pdiff::app::App;
use pdiff::Config;
use ratatui::crossterm::event;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "pdiff", "pdiff")
}

fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config/default.toml")
    }
}

fn get_log_path() -> PathBuf {
    let dir = project_dirs()
        .map(|p| p.data_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir);
    let _ = std::fs::create_dir_all(&dir);
    dir.join("pdiff.log")
}

/// The terminal belongs to the UI, so logs go to a file.
fn init_logging() -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_log_path())?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pdiff=info,pdiff_api=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    let config_path = get_config_path();
    let mut config = Config::load_or_default(&config_path);
    config.apply_env();
    config.validate()?;
    tracing::info!(
        create_url = %config.server.create_url,
        post_image_url = %config.server.post_image_url,
        "Loaded configuration"
    );
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e}");
    }

    let config = load_config()?;
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, App::new(config));
    ratatui::restore();

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {e}");
    }
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            if app.handle_event(event)? {
                break;
            }
        }

        app.process_async_events();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
