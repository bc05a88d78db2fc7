pub mod config;
pub mod db;
pub mod domain;
pub mod models;
pub mod report;
pub mod seed;

pub use domain::BootstrapError;
