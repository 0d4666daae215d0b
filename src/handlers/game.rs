use actix_web::{get, web, HttpResponse};
use crate::error::ApiError;
use crate::models::{AppState, NewGameQuery};
use crate::services::generator::generate_puzzle;

#[get("/api/newgame")]
pub async fn new_game(
    data: web::Data<AppState>,
    query: web::Query<NewGameQuery>,
) -> Result<HttpResponse, ApiError> {
    let min_length = query.min_length.unwrap_or(data.default_min_length);
    if min_length == 0 {
        return Err(ApiError::Validation("minLength must be a positive number".to_string()));
    }

    let mut rng = data
        .rng
        .lock()
        .map_err(|_| ApiError::Internal("random source unavailable".to_string()))?;
    let puzzle = generate_puzzle(&data.dictionary, min_length, &mut *rng)
        .ok_or(ApiError::GenerationFailed)?;

    Ok(HttpResponse::Ok().json(puzzle))
}
