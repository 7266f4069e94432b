//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by domain (currently only `thermal`). Each model lives in
//! its own module with an internal `core` submodule holding the computation;
//! the parts of `core` meant for callers are re-exported from the model module.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the model's core API.

pub mod thermal;
