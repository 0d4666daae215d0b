pub mod generator;
pub mod report_store;
pub mod word_filter;
pub mod word_loader;
