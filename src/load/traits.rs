use crate::config::Endpoint;
use std::fmt::Debug;

pub trait PayloadProvider: Debug {
    /// Produces the bytes that are pushed to a data target.
    fn payload(&self, target: &Endpoint) -> Vec<u8>;
}
