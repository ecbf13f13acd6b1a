//! LeafScan browser client.
//!
//! Uploads a leaf photo to the prediction service and renders the verdict.

pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod files;
pub mod history;
pub mod pages;
pub mod report;
pub mod severity;
pub mod state;
pub mod view_model;
