//! Character-level Markov chain model.
//!
//! This module provides:
//! - The chain element type (`Symbol`) with its `NONWORD` boundary marker
//! - The sliding window used as table key and generation state (`Window`)
//! - Successor lists for a single window (`Successors`)
//! - The model itself, its transition table and lazy generation runs (`ChainModel`)
//! - Generation parameters (`GenerationInput`)

/// Model construction, transition table and generation runs.
///
/// Exposes `ChainModel`, `TransitionTable` and the `Generation` iterator.
pub mod chain_model;

/// Generation parameters (safety cap on emitted characters).
pub mod generation_input;

/// Ordered successor list of one window.
///
/// Supports uniform sampling with an injected random source.
pub mod state;

/// Chain element: an input character or the `NONWORD` marker.
pub mod symbol;

/// Fixed-size window of the most recent symbols.
pub mod window;
