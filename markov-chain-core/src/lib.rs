//! Character-level Markov chain text generation library.
//!
//! This crate provides:
//! - Construction of an order-`N` transition table from a text in one scan
//! - Lazy, independent generation runs with an injectable random source
//! - Read-only access to the table for inspection (serde serializable)
//! - A small helper to load training text from disk
//!
//! ```
//! use markov_chain_core::ChainModel;
//!
//! let model = ChainModel::new("a", 1);
//! assert_eq!(model.generate_string().unwrap(), "a");
//! ```

/// Markov chain model and generation logic.
pub mod model;

/// Library error type.
pub mod error;

/// Training text loading.
pub mod io;

pub use error::{ChainError, ChainResult};
pub use model::chain_model::{ChainModel, Generation, TransitionTable};
pub use model::generation_input::GenerationInput;
pub use model::state::Successors;
pub use model::symbol::Symbol;
pub use model::window::Window;
