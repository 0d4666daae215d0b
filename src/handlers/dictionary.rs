use actix_web::{post, web, HttpResponse};
use crate::error::ApiError;
use crate::models::{AppState, DictionaryRequest, DictionaryResponse};
use crate::services::word_filter::{find_valid_words, LetterSet};
use crate::utils::normalize_letters;
use log::info;

#[post("/api/dictionary")]
pub async fn valid_words(
    data: web::Data<AppState>,
    body: web::Json<DictionaryRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    let letters = match request.letters {
        Some(l) if !l.is_empty() => normalize_letters(&l).map_err(ApiError::Validation)?,
        _ => return Err(ApiError::Validation("letters must be a non-empty array".to_string())),
    };
    let min_length = match request.min_length {
        Some(n) if n > 0 => n as usize,
        _ => return Err(ApiError::Validation("minLength must be a positive number".to_string())),
    };

    let valid_words = find_valid_words(&data.dictionary, &LetterSet::new(&letters), min_length);
    info!("Found {} words for letters {:?} (min {})", valid_words.len(), letters, min_length);

    Ok(HttpResponse::Ok().json(DictionaryResponse {
        count: valid_words.len(),
        valid_words,
    }))
}
