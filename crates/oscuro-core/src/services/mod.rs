//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod settings_controller;
mod settings_service;

pub use settings_controller::SettingsController;
pub use settings_service::SettingsService;
