use actix_web::{web, App, HttpServer};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod config;
mod error;
mod handlers;
mod models;
mod services;
mod utils;

use config::Config;
use models::{build_dictionary, AppState};
use services::report_store::ReportStore;
use services::word_loader::load_dictionary;

// Logs go to the given file when set, otherwise stderr
fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(file) = log_file {
        let log_output = OpenOptions::new().create(true).append(true).open(file)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_output)));
    }

    builder.init();
    Ok(())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::load();
    init_logging(config.log_file.as_deref())?;

    let words = load_dictionary(
        &config.dict_file,
        config.insertions_file.as_deref(),
        config.deletions_file.as_deref(),
    );

    let reports = ReportStore::open(&config.report_dir, config.max_reports)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let rng = match config.seed {
        Some(seed) => {
            info!("Seeding puzzle generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let state = AppState {
        dictionary: build_dictionary(words),
        reports,
        rng: Mutex::new(rng),
        default_min_length: config.min_length,
    };
    let shared_state = web::Data::new(state);

    info!("Spelling Bee server listening on {}", config.listen_host);
    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .configure(handlers::configure)
    })
    .bind(&config.listen_host)?
    .run()
    .await
}
