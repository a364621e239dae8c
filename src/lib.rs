//! Math Striker - Adaptive Math Content Engine
//!
//! Deterministic question-bank generation, content-addressed dedup,
//! constraint-relaxing selection, and learner progression. Everything
//! here is synchronous and side-effect-free with respect to explicit
//! inputs; storage and transport live with the caller.

pub mod bank;
pub mod core;
pub mod procedural;
pub mod progression;
pub mod rng;
pub mod selector;
pub mod session;
