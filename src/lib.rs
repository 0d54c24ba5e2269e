pub mod config;
pub mod error;
pub mod extract;
pub mod integrator;
pub mod load;
pub mod notify;
pub mod pipeline;
#[cfg(test)]
mod test_suite;

pub use pipeline::Pipeline;
