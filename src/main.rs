use anyhow::Context as _;

use hookcraft::{config::Config, storage, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from([".dev.env", ".secrets.env"]);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("hookcraft=info"))
        .init();

    let config = Config::from_env()?;
    let storage = storage::Connection::open(&config.storage_path)
        .with_context(|| format!("cannot open '{}'", config.storage_path.display()))?;

    log::info!("relaying webhooks through {}", config.relay_url);

    eframe::run_native(
        "Hookcraft",
        eframe::NativeOptions::default(),
        Box::new(move |cc| App::create(cc, config, storage)),
    )
    .map_err(|err| anyhow::anyhow!("cannot start the window: {err}"))
}
