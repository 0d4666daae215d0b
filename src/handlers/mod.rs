use actix_web::web;
use crate::error::ApiError;

pub mod dictionary;
pub mod game;
pub mod report;

/// Register every API route plus extractor error handling
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .service(dictionary::valid_words)
    .service(game::new_game)
    .service(report::submit_report)
    .service(report::get_reports)
    .service(report::clear_reports);
}
