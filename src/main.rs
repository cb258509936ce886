use actix_cors::Cors;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::{error, info};

use car_price_api::config::Config;
use car_price_api::inference::LinearModel;
use car_price_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    let config = Config::from_env();

    // The predictor must be loaded before the first request is served.
    let model = match LinearModel::load(&config.model_path)
        .with_context(|| format!("loading model artifact from {}", config.model_path))
    {
        Ok(model) => {
            info!(
                "Model loaded: {} features from {}",
                model.input_dim(),
                config.model_path
            );
            model
        }
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    };

    let model_data = web::Data::new(model);
    let bind_address = config.bind_address();

    info!("Server listening on http://{}", bind_address);
    info!("  GET  /               - prediction form");
    info!("  POST /predict        - price prediction (form fields)");
    info!("  GET  /api/health     - health check");
    info!("  GET  /api/model-info - model metadata");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(cors)
            .app_data(model_data.clone())
            .configure(routes::configure)
    })
    .workers(config.workers)
    .bind(&bind_address)?
    .run()
    .await
}
