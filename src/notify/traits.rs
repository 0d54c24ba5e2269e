use crate::notify::error::NotificationError;
use crate::notify::notification::Notification;
use std::fmt::Debug;

pub trait Notifier: Debug {
    fn send(&self, notification: &Notification) -> Result<(), NotificationError>;
}
