mod main;
mod config;

pub use main::App;
pub use config::AppConfig;
