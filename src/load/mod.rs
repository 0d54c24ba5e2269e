pub mod error;
mod payload;
mod target_writer;
pub mod traits;

pub use self::payload::StaticPayload;
pub use self::target_writer::TargetWriter;
