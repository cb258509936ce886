//! HTTP handlers and route registration.

use std::collections::HashMap;

use actix_files::{Files, NamedFile};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::info;

use crate::error::ApiError;
use crate::inference::LinearModel;
use crate::models::{ApiResponse, CarFeatures};

/// Serves the prediction form.
pub async fn index(req: HttpRequest) -> impl Responder {
    match NamedFile::open_async("./static/index.html").await {
        Ok(file) => file.into_response(&req),
        Err(_) => HttpResponse::InternalServerError().body("Failed to load interface"),
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success("car price prediction API"))
}

pub async fn model_info(model: web::Data<LinearModel>) -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(model.get_model_info()))
}

/// Parses the submitted form, runs the regression and returns the raw
/// scalar as plain text.
pub async fn predict(
    model: web::Data<LinearModel>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let features = CarFeatures::parse(&form)?;
    let input = features.to_array();
    info!("Input data: {:?}", input);

    let price = model.predict(&input)?;
    info!("Prediction: {}", price);

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(price.to_string()))
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ApiResponse::<String>::error("Endpoint not found"))
}

/// Registers every route the service exposes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/predict", web::post().to(predict))
        .route("/api/health", web::get().to(health))
        .route("/api/model-info", web::get().to(model_info))
        .service(Files::new("/static", "./static").prefer_utf8(true))
        .default_service(web::route().to(not_found));
}
