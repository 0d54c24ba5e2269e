/// A plaintext message that is sent once the integration is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

impl Notification {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    pub fn integration_complete() -> Self {
        Self::new("Integration Complete", "Integration complete!")
    }
}
