//! Dependency injection infrastructure.
//!
//! - `FromRef<T>`: extract a value from a reference to `T`
//! - `#[derive(Context)]`: makes each field of the root extractable via `FromRef`
//! - `#[derive(FromContext)]`: builds a struct by resolving each field from the root
//!
//! ```ignore
//! #[derive(FromContext, Clone)]
//! pub struct AirportRepository {
//!     graph: AppGraph, // resolved via FromRef<Context>
//! }
//!
//! let airports = AirportRepository::from_ref(&ctx);
//! ```

/// Trait for extracting a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

// Re-export derive macros
pub use di_macros::{Context, FromContext};
