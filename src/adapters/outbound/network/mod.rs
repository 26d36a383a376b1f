/// Network adapters for external API calls
mod search_client;

pub use search_client::HttpSearchClient;
