pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod member;
pub mod roster;
pub mod sign;
pub mod task;
