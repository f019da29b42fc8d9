mod bot;
mod handler;
mod message_sender;

pub use bot::{Data, build_client};
