// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

use actix_web::{middleware::Logger, web, App, HttpServer};
use board_game_reviews::config::{self, Config};
use board_game_reviews::handlers;
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            format!("{},actix_web=info,sqlx=warn", config.log_level)
        } else {
            "info,actix_web=info,sqlx=warn".to_string()
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    config.validate().map_err(anyhow::Error::msg)?;

    log::info!("Starting board game reviews API...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            .configure(handlers::routes)
            .default_service(web::to(handlers::endpoint_not_found))
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
