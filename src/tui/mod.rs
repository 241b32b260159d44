pub mod app;
pub mod controller;
mod ui;
