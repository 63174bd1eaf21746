//! Electrochemical systems models.
//!
//! This module contains models for electrochemical conversion devices,
//! currently water electrolyzers for hydrogen production.

pub mod electrolyzer;
