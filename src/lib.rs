pub mod api;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod formatter;
pub mod gui;
pub mod messenger;
pub mod models;
pub mod renderer;
