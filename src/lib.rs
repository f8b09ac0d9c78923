pub mod app;
pub mod chain;
pub mod config;
pub mod handoff;
pub mod host;
pub mod notify;
pub mod shared;
