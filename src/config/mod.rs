mod config_loader;
pub use self::config_loader::ConfigLoader;
pub mod endpoint;
pub use self::endpoint::{Endpoint, EndpointKind};
pub mod integrator_config;
pub use self::integrator_config::{
    EmailConfig, IntegratorConfig, NotificationsConfig, RuntimeSettings, SmtpConfig,
};
