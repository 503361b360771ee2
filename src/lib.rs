pub mod app;
pub mod auth;
pub mod config;
pub mod content;
pub mod daily;
pub mod dates;
pub mod error;
pub mod exercise;
pub mod extract;
pub mod habits;
pub mod nutrition;
pub mod plans;
pub mod state;
pub mod summary;
pub mod trial;
