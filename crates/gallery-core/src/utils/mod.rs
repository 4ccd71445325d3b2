//! Utility functions shared across services.

pub mod validation;
