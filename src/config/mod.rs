mod app_config;

pub use app_config::{
    AppConfig, CacheConfig, LauncherConfig, LogFormat, LoggingConfig, MetricsConfig,
    ModelsConfig, ServerConfig, ValidationConfig,
};
