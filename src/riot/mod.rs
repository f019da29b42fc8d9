pub mod client;
mod endpoints;
pub mod region;
pub mod types;

pub use client::RiotClient;
pub use region::Platform;
