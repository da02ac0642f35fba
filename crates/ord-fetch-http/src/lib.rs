mod error;
mod fetcher;

pub use fetcher::HttpFetcher;
