pub mod error;
mod source_reader;
pub use self::source_reader::SourceReader;
