pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod models;
pub mod schema;
pub mod store;

#[cfg(test)]
mod testing;
