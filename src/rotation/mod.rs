//! Table rotation scheduling and plan quality metrics.
//!
//! # Algorithm
//!
//! `RotationScheduler` seats participants round by round with a greedy,
//! history-aware, proximity-biased heuristic. It does not guarantee an
//! optimal plan: when no table is free of past tablemates, a participant is
//! seated anyway (forced placement) and a repeat meeting is accepted.
//!
//! # Sizing
//!
//! `RotationPlan` derives table capacities and the round count from the
//! participant count, table count and session timing.
//!
//! # KPI
//!
//! `RotationKpi` measures pair coverage, repeat meetings and seat stability.
//!
//! # References
//!
//! - Lucas (1883), "Récréations mathématiques" (round-robin tables)
//! - Kirkman (1850), "Query VI" (schoolgirl problem, resolvable designs)

mod context;
mod kpi;
mod plan;
mod scheduler;

pub use context::{MeetingHistory, SeatingContext};
pub use kpi::RotationKpi;
pub use plan::RotationPlan;
pub use scheduler::{generate_rotations, RotationRequest, RotationScheduler};
