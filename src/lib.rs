pub mod cli;
pub mod controller;
pub mod database;
pub mod error;
pub mod persistence;
pub mod render;
pub mod store;
pub mod surfaces;
pub mod terminal;
pub mod types;
pub mod utils;
