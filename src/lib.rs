pub mod brcode;
pub mod models;
pub mod settings;
