pub mod api;
pub mod client;
pub mod commands;
pub mod error;
pub mod model;
pub mod output;
pub mod service;
pub mod stats;
pub mod store;
