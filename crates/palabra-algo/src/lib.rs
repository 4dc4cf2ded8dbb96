//! # palabra-algo - vocabulary drilling core
//!
//! Pure Rust implementation of the drilling logic:
//!
//! - **Mastery rule** - decides when a word drops out of rotation
//! - **Selection policy** - two-bucket active/new word picker
//! - **Answer evaluation** - normalization, matching, progress update
//!
//! No I/O and no async; persistence and HTTP live in the backend
//! crate. The selection RNG is injected so tests can seed it.
//!
//! ## Example
//!
//! ```rust
//! use palabra_algo::{check_answer, next_word, WordProgress};
//! use std::collections::HashMap;
//!
//! let mut progress = WordProgress::default();
//! progress.record_answer(check_answer("  Hola ", &["hola".to_string()]));
//! assert!(progress.mastered); // correct on first attempt
//!
//! let picked = next_word(&[], &HashMap::new(), &mut rand::thread_rng());
//! assert!(picked.is_none()); // empty catalog, nothing left to drill
//! ```

pub mod answer;
pub mod mastery;
pub mod selection;
pub mod types;

pub use answer::{check_answer, normalize_answer};
pub use mastery::is_mastered;
pub use selection::next_word;
pub use types::{WordEntry, WordProgress};
