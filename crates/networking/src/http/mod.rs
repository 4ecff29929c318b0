mod client;

pub use client::FantasixClient;
