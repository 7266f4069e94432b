//! Thermal systems models.
//!
//! This module contains models for thermal systems such as thermoelectric
//! coolers.

pub mod tec;
