//! Table rotation scheduling for the U-Engine ecosystem.
//!
//! Seats N participants at T tables over several rounds so that nobody
//! shares a table with the same person twice (best effort), table sizes
//! differ by at most one, and the rounds fit in the session length.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Participants`, `Round`, `TableAssignment`,
//!   `GenerationResult`, `RotationMetadata`, `RotationResponse`
//! - **`rotation`**: `RotationScheduler`, `RotationPlan`, `RotationKpi`
//! - **`validation`**: Request checks and `RotationError`
//! - **`config`**: Heuristic constants (`RotationConfig`)
//!
//! # Architecture
//!
//! Pure and synchronous: no I/O, no shared state between calls. Every
//! generation owns its meeting history and random source, and a seed makes
//! the output reproducible. Storage, HTTP and rendering belong to callers.
//!
//! # Example
//!
//! ```
//! use u_rotation::rotation::{generate_rotations, RotationRequest};
//!
//! let request = RotationRequest::new(vec!["Ada", "Grace", "Linus", "Ken"], 2, 30, 10)
//!     .with_seed(7);
//! let plan = generate_rotations(&request).unwrap();
//! assert_eq!(plan.itinerary("Ada").len(), plan.round_count());
//! ```

pub mod config;
pub mod models;
pub mod rotation;
pub mod validation;

pub use config::RotationConfig;
pub use models::{GenerationResult, Participants, RotationResponse};
pub use rotation::{generate_rotations, RotationRequest, RotationScheduler};
pub use validation::RotationError;
