pub mod app;
pub mod attributes;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod scores;
pub mod state;
