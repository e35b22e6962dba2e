mod ratings_client;

pub use ratings_client::RatingsClient;
