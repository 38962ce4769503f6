// src/lib.rs
pub mod banner;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod payload;
pub mod presentation;
pub mod validator;
