use std::path::PathBuf;
use clap::{value_parser, Arg, ArgMatches, Command};
use crate::services::report_store::DEFAULT_MAX_REPORTS;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_host: String,
    pub log_file: Option<PathBuf>,
    pub dict_file: PathBuf,
    pub insertions_file: Option<PathBuf>,
    pub deletions_file: Option<PathBuf>,
    pub report_dir: PathBuf,
    pub max_reports: usize,
    pub min_length: usize,
    pub seed: Option<u64>,
}

pub fn command() -> Command {
    Command::new("beed")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ron Straight <straightre@gmail.com>")
        .about("Spelling Bee puzzle and word report service")
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("0.0.0.0:3000")
                .help("Specify the listen address (e.g., 0.0.0.0:3000)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .arg(
            Arg::new("dict-file")
                .long("dict-file")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .default_value("./data/dict.txt")
                .help("Newline-delimited word list"),
        )
        .arg(
            Arg::new("insertions-file")
                .long("insertions-file")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Extra words merged into the dictionary at startup"),
        )
        .arg(
            Arg::new("deletions-file")
                .long("deletions-file")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Words removed from the dictionary at startup"),
        )
        .arg(
            Arg::new("report-dir")
                .long("report-dir")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .default_value("./data")
                .help("Directory holding the reported word lists"),
        )
        .arg(
            Arg::new("max-reports")
                .long("max-reports")
                .num_args(1)
                .value_parser(value_parser!(u64).range(1..))
                .default_value("1000")
                .help("Maximum number of words kept per report list"),
        )
        .arg(
            Arg::new("min-length")
                .long("min-length")
                .num_args(1)
                .value_parser(value_parser!(u64).range(1..))
                .default_value("4")
                .help("Default minimum word length for new games"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .num_args(1)
                .value_parser(value_parser!(u64))
                .help("Seed the puzzle generator for reproducible games"),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let path = |name: &str| matches.get_one::<PathBuf>(name).cloned();
        let number = |name: &str, default: usize| {
            matches.get_one::<u64>(name).map(|&n| n as usize).unwrap_or(default)
        };

        Config {
            listen_host: matches
                .get_one::<String>("listen-host")
                .cloned()
                .unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            log_file: path("log-file"),
            dict_file: path("dict-file").unwrap_or_else(|| PathBuf::from("./data/dict.txt")),
            insertions_file: path("insertions-file"),
            deletions_file: path("deletions-file"),
            report_dir: path("report-dir").unwrap_or_else(|| PathBuf::from("./data")),
            max_reports: number("max-reports", DEFAULT_MAX_REPORTS),
            min_length: number("min-length", 4),
            seed: matches.get_one::<u64>("seed").copied(),
        }
    }

    pub fn load() -> Self {
        Self::from_matches(&command().get_matches())
    }
}
