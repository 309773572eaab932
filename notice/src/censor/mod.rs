//! Masking of forbidden words.
//!
//! - **`policy`**: how to mask (`CensorPolicy`, `PolicyError`)
//! - **`censorable`**: what gets masked (`Censorable`, `Censor`, `remove_profanity`)

mod censorable;
mod policy;

pub use censorable::{remove_profanity, Censor, Censorable};
pub use policy::{CensorPolicy, PolicyError, DEFAULT_MASK_CHAR, DEFAULT_WORDS};
