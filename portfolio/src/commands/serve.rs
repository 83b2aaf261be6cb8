use portfolio_config::Config;
use tracing::info;

use crate::environment::build_rest_server;

pub async fn serve(config: Config, port: Option<u16>) -> anyhow::Result<()> {
    info!("Loading catalog from {}", config.catalog.path.display());
    let server = build_rest_server(&config)?;

    info!(
        "Appending contact messages to {}",
        config.contact.log_path.display()
    );

    let host = config.http.host;
    let port = port.unwrap_or(config.http.port);
    info!("Starting http server on {host}:{port}");
    server.serve(host, port).await
}
