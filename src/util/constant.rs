use once_cell::sync::Lazy;
use crate::core::configure::AppConfig;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().expect("Failed to load application config"));
