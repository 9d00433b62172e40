//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `wizard` - Campaign brief wizard session, steps and brief assembly

pub mod foundation;
pub mod wizard;
