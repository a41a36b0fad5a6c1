//! Rotation domain models.
//!
//! Input participants and the generated seating plan. The plan is plain
//! data: it carries no history or randomness, only who sits where.
//!
//! # Domain Mappings
//!
//! | u-rotation | Speed meeting | Workshop | Dinner party |
//! |------------|---------------|----------|--------------|
//! | Participant | Attendee | Trainee | Guest |
//! | Round | Rotation | Session block | Course |
//! | TableAssignment | Table | Breakout group | Table |

mod participant;
mod rotation;

pub use participant::Participants;
pub use rotation::{GenerationResult, Round, RotationMetadata, RotationResponse, TableAssignment};
