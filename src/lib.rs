//! invoice-fields - invoice field-schema compiler and validator
//!
//! Compiles a shop's invoice configuration (toggle switches or a restricted
//! JSON schema) into checkout form fields and validates submitted values.

pub mod cli;
pub mod invoice;
pub mod observability;
pub mod settings;
