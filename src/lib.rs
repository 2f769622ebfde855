pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod orders;
pub mod preferences;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;
