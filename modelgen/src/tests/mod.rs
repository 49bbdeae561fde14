//! Test module for modelgen
//!
//! Behaviour tests for resolution, rendering and per-unit state, plus
//! property-based tests using proptest.


#[cfg(test)]
pub mod factory_tests;



#[cfg(test)]
pub mod config_tests;
