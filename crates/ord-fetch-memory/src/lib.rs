mod fetcher;

pub use fetcher::{MemoryFetcher, Response};
