//! Application layer - Handlers, the per-session controller and the registry.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers make single collaborator calls; the controller decides when to
//! make them and applies their results to the session.

pub mod handlers;
mod wizard_controller;
mod wizard_registry;

pub use wizard_controller::{
    ControllerError, WizardController, WizardHandle, WizardIntent, WizardServices, WizardSettings,
};
pub use wizard_registry::WizardRegistry;
