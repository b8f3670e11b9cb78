pub mod config;
pub mod db;
pub mod dialog;
pub mod error;
pub mod handlers;
pub mod messenger;
pub mod migrations;
pub mod models;
pub mod parser;
pub mod repositories;
pub mod routes;
pub mod telegram;
pub mod version;
