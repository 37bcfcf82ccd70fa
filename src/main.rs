//! Binary entry point: resolve configuration, start file logging, load the
//! song list, and drive the Ratatui event loop until the user exits.
use anyhow::Context;
use karaoke_songs::{logging, run_app, App, Config, GitPushHook, SongStore};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    logging::init(&config.log_file)?;
    info!(
        data_dir = %config.data_dir.display(),
        csv = %config.csv_file.display(),
        git_push = config.git_push,
        "starting"
    );

    let mut store = SongStore::open(&config.csv_file)
        .with_context(|| format!("failed to load {}", config.csv_file.display()))?;
    if config.git_push {
        store.add_hook(GitPushHook::new(&config.git_remote, &config.git_branch));
    }

    let mut app = App::new(store);
    run_app(&mut app)
}
