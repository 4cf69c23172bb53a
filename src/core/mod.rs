pub mod config;
pub mod journal;
pub mod roster;
pub mod state;
pub mod store;
