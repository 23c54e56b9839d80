//! Document sources and record sinks
//!
//! The pipeline reads through the `DocumentSource` trait and writes through
//! the `RecordSink` trait. `TextDirectory` and `ParsedTextsDir` are the
//! filesystem implementations; `MemorySource` and `MemorySink` keep everything
//! in memory. Document content and filenames travel as bytes end to end.

mod memory;
pub mod names;
mod parsed_dir;
mod text_dir;
mod traits;

pub use memory::{MemorySink, MemorySource};
pub use parsed_dir::ParsedTextsDir;
pub use text_dir::TextDirectory;
pub use traits::{
    render_record, DocumentRef, DocumentSource, InputDocument, RecordSink, StorageError,
    StorageResult,
};
