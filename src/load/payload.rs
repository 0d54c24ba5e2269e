use crate::config::Endpoint;
use crate::load::traits::PayloadProvider;

/// Pushes the same bytes to every data target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPayload {
    data: Vec<u8>,
}

impl StaticPayload {
    pub const DEFAULT: &'static str = "data";

    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

impl Default for StaticPayload {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl PayloadProvider for StaticPayload {
    fn payload(&self, _target: &Endpoint) -> Vec<u8> {
        self.data.clone()
    }
}
