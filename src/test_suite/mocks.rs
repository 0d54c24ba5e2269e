use crate::notify::Notification;
use crate::notify::error::NotificationError;
use crate::notify::traits::Notifier;
use mockall::mock;
use std::fmt::Debug;

mock! {
    pub(crate) Notifier {}

    impl Notifier for Notifier {
        fn send(&self, notification: &Notification) -> Result<(), NotificationError>;
    }

    impl Debug for Notifier {
        fn fmt<'a>(&self, f: &mut std::fmt::Formatter<'a>) -> std::fmt::Result;
    }
}
