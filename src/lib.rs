//! Campaign Brief - Client Intake Wizard
//!
//! This crate drives a multi-step intake wizard that collects a client's
//! identity, enriches it with brand metadata looked up from the company
//! website, gathers campaign details and turns the result into a generated
//! brief document.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
