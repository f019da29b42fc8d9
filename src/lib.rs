//! Discord bot answering `!lolprofile name:region` with a League of Legends
//! summoner's level and solo/duo standing.

pub mod cache;
pub mod command;
pub mod config;
pub mod discord;
pub mod error;
pub mod handler;
pub mod logging;
pub mod profile;
pub mod riot;
