pub mod assemble;
pub mod entry;
pub mod error;
pub mod search;
pub mod store;

pub use assemble::{DisplayResult, FormattedEntry};
pub use entry::Entry;
pub use error::{LoadError, SearchError};
pub use search::{SearchHit, SearchOptions, rank};
pub use store::{EntryStore, LexiconSource};
