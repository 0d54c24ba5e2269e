mod email_notifier;
pub mod error;
mod notification;
pub mod traits;

pub use self::email_notifier::EmailNotifier;
pub use self::notification::Notification;
