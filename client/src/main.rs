// client/src/main.rs
use clap::Parser;
use pokerview::app::App;
use pokerview::config::ClientConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = ClientConfig::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log))
        .init();
    tracing::info!(server = %config.server, name = %config.name, table = ?config.table, "starting client");

    iced::application("pokerview", App::update, App::view)
        .subscription(App::subscription)
        .theme(|_| iced::Theme::Dark)
        .window_size(iced::Size::new(1200.0, 860.0))
        .run_with(move || (App::new(config), iced::Task::none()))?;
    Ok(())
}
