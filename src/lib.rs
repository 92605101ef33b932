pub mod app_state;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod middleware;
pub mod routes;
pub mod scrape;
