//! # tow_core - Tongue Weight Calculation Engine
//!
//! `tow_core` is the computational heart of Towcheck: given a trailer's load
//! layout and axle positions, it computes the tongue weight via a moment
//! balance about the hitch and classifies it against the recommended 10-15%
//! band. All inputs and outputs are JSON-serializable so any front-end (GUI,
//! CLI, automation) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Configuration**: The caller builds a full [`calculations::tongue::TrailerInput`];
//!   there is no ambient or session state
//!
//! ## Quick Start
//!
//! ```rust
//! use tow_core::calculations::tongue::{calculate, Axle, TrailerInput, TrailerLoad};
//!
//! let input = TrailerInput {
//!     label: "Skid steer haul".to_string(),
//!     loads: vec![TrailerLoad::new(7500.0, 180.0)],
//!     axles: vec![Axle::new(180.0), Axle::new(228.0)],
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Tongue weight: {:.0} lb ({:.1}%)", result.tongue_weight_lb, result.tongue_weight_pct);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Tongue weight calculation
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;

// Re-export commonly used types at crate root for convenience
pub use calculations::tongue::{Axle, RangeStatus, TongueResult, TrailerInput, TrailerLoad};
pub use errors::{TowError, TowResult};
