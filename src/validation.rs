//! Input validation for rotation requests.
//!
//! Checks a [`RotationRequest`] before any seating is attempted. Detects:
//! - Non-positive table count or session duration
//! - Missing, blank or duplicate participant identifiers
//! - More participants than [`MAX_PARTICIPANTS`]
//! - More tables than participants
//! - A session too short to hold a single round
//!
//! Errors are data: they are returned to the caller, never raised.

use serde::{Serialize, Serializer};
use std::collections::HashSet;

use crate::rotation::RotationRequest;

/// Largest participant count accepted. Memory grows with the count, so a
/// head count deserialized from untrusted input is capped here.
pub const MAX_PARTICIPANTS: usize = 100_000;

/// Validation result: every detected error, in check order.
pub type ValidationResult = Result<(), Vec<RotationError>>;

/// A rejected rotation request.
///
/// The `Display` text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RotationError {
    #[error("table count must be positive")]
    NonPositiveTableCount,

    #[error("no participants supplied")]
    NoParticipants,

    #[error("too many participants (limit {})", MAX_PARTICIPANTS)]
    TooManyParticipants,

    /// Also raised for identifiers made only of whitespace.
    #[error("participant identifier must not be empty")]
    EmptyParticipantId,

    #[error("duplicate participant: {0}")]
    DuplicateParticipant(String),

    #[error("more tables than participants")]
    MoreTablesThanParticipants,

    #[error("session duration must be positive")]
    NonPositiveSessionDuration,

    #[error("time per round must not be negative")]
    NegativeTimePerRound,

    #[error("session shorter than one round")]
    SessionShorterThanRound,
}

impl Serialize for RotationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Validates a rotation request.
///
/// Checks, in order:
/// 1. Table count is positive
/// 2. At least one participant
/// 3. At most [`MAX_PARTICIPANTS`] participants
/// 4. No empty identifier (whitespace-only counts as empty)
/// 5. No duplicate identifier
/// 6. No more tables than participants
/// 7. Session duration is positive
/// 8. Time per round is not negative
/// 9. A fixed round length fits in the session
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &RotationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.table_count <= 0 {
        errors.push(RotationError::NonPositiveTableCount);
    }

    let participant_count = request.participants.len();
    if participant_count == 0 {
        errors.push(RotationError::NoParticipants);
    } else if participant_count > MAX_PARTICIPANTS {
        errors.push(RotationError::TooManyParticipants);
    }

    if let crate::models::Participants::Names(names) = &request.participants {
        if names.iter().any(|n| n.trim().is_empty()) {
            errors.push(RotationError::EmptyParticipantId);
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for name in names {
            if !seen.insert(name.as_str()) && reported.insert(name.as_str()) {
                errors.push(RotationError::DuplicateParticipant(name.clone()));
            }
        }
    }

    if request.table_count > 0
        && participant_count > 0
        && request.table_count as u64 > participant_count as u64
    {
        errors.push(RotationError::MoreTablesThanParticipants);
    }

    if request.session_duration_minutes <= 0 {
        errors.push(RotationError::NonPositiveSessionDuration);
    }

    if request.time_per_round_minutes < 0 {
        errors.push(RotationError::NegativeTimePerRound);
    } else if request.time_per_round_minutes > 0
        && request.session_duration_minutes < request.time_per_round_minutes
    {
        errors.push(RotationError::SessionShorterThanRound);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
