//! # Electrolysis Models
//!
//! Closed-form electrochemical models of water electrolyzers for green
//! hydrogen production.
//!
//! Three technologies are covered: alkaline (AEL), proton-exchange-membrane
//! (PEMEL) and solid-oxide (SOEL) electrolysis.
//! Each model converts electrical input into hydrogen output and cell voltage
//! using Faraday's law, the Tafel equation and ohmic losses, and keeps a small
//! operating ledger for cumulative tracking.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific models, starting with
//!   [`Electrolyzer`](models::electrochemical::electrolyzer::Electrolyzer).
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models. Model-specific utility code
//! remains private.

pub mod models;
pub mod support;
