use actix_web::HttpServer;
use partner_mock_api::{AppContext, LoggingConfig, ServerConfig, create_app, telemetry};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    telemetry::init_logging(&LoggingConfig::from_env()).map_err(io::Error::other)?;

    let server_config = ServerConfig::from_env();
    let ctx = AppContext::from_env().map_err(io::Error::other)?;

    tracing::info!(
        bind_address = %server_config.bind_address,
        order_auth = ctx.auth.order_auth_enabled,
        product_auth = ctx.auth.product_auth_enabled,
        "Starting partner mock API"
    );

    let mut server = HttpServer::new(move || create_app(ctx.clone()));
    if let Some(workers) = server_config.workers {
        server = server.workers(workers);
    }

    server.bind(&server_config.bind_address)?.run().await
}
