use lettre::address::AddressError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Invalid email address '{address}'")]
    Address {
        address: String,
        #[source]
        err: AddressError,
    },
    #[error("Could not build the notification email")]
    Message(#[from] lettre::error::Error),
    #[error("Could not send the notification email via {server}")]
    Smtp {
        server: String,
        #[source]
        err: lettre::transport::smtp::Error,
    },
}
