pub mod config;
pub mod db;
pub mod http;
pub mod jobs;
pub mod middleware;
pub mod repositories;
