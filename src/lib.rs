pub mod error;
pub mod config;
pub mod validation;
pub mod model;
pub mod engine;
pub mod session;
pub mod ops;
pub mod queries;
pub mod store;
pub mod cli;
