//! Candidate generator and benchmark utilities for `bicval-core`.
//!
//! Produces deterministic batches of BIC candidates, a configurable share of
//! which are structurally broken, for benchmarking and property tests.

pub mod generator;

pub use generator::{BatchSize, Candidate, GeneratorConfig, Mutation, generate_candidates};
