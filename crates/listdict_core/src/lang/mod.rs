//! listdict vocabulary registries.
//!
//! Callers work with stable ids ([`ErrorKind`](crate::errors::ErrorKind), [`containers::ContainerKind`],
//! [`kinds::ValueKind`]) and look up spellings/metadata via registry tables instead of scattering string literals.
//!
//! ## Notes
//! - Registries are pure: no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use listdict_core::errors::ErrorKind;
//! use listdict_core::lang::errors;
//!
//! assert_eq!(errors::from_str("NotFound"), Some(ErrorKind::NotFound));
//! assert_eq!(errors::as_str(ErrorKind::NegativeIndex), "NegativeIndex");
//! ```

pub mod containers;
pub mod errors;
pub mod kinds;
pub mod registry;
