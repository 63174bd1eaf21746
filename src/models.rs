//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `electrochemical`)
//! based on an opinionated taxonomy. This organization may evolve as more
//! models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail and is **not** part of the public API; the types it
//! produces are re-exported by the model module.
//!
//! The public model type should be a thin adapter that owns any mutable state
//! and delegates all equations to the model-specific core.

pub mod electrochemical;
