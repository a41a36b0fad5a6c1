//! Greedy round-by-round table rotation.
//!
//! # Algorithm
//!
//! For each round:
//! 1. Pick `extra` tables at random to hold one more seat this round.
//! 2. Visit participants in a random order.
//! 3. For each participant, walk their candidate tables (proximity window
//!    around last round's seat first) and take the first one with room
//!    whose occupants they have never met.
//! 4. If none qualifies, take the first candidate with room anyway
//!    (forced placement).
//! 5. Once the round is complete, record every co-occupant pair.
//!
//! History is only updated after a round is finalized, so placement
//! decisions see meetings from previous rounds only.
//!
//! # Complexity
//! O(r * n * t * c) where r=rounds, n=participants, t=tables, c=table size.

use tracing::{debug, info};

use super::context::SeatingContext;
use super::plan::RotationPlan;
use crate::config::RotationConfig;
use crate::models::{GenerationResult, Participants, Round, RotationMetadata, RotationResponse, TableAssignment};
use crate::validation::{validate_request, RotationError};

/// Input container for rotation generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct RotationRequest {
    /// Participants to seat (identifiers or a head count).
    pub participants: Participants,
    /// Number of tables.
    pub table_count: i64,
    /// Total session length (minutes).
    pub session_duration_minutes: i64,
    /// Fixed round length (minutes); 0 derives it from the session length.
    #[serde(default)]
    pub time_per_round_minutes: i64,
    /// Seed for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RotationRequest {
    /// Creates a new request without a seed.
    pub fn new(
        participants: impl Into<Participants>,
        table_count: i64,
        session_duration_minutes: i64,
        time_per_round_minutes: i64,
    ) -> Self {
        Self {
            participants: participants.into(),
            table_count,
            session_duration_minutes,
            time_per_round_minutes,
            seed: None,
        }
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Seats of one round, by 0-based participant and table index.
#[derive(Debug)]
struct RoundSeating {
    occupants: Vec<Vec<usize>>,
    forced: usize,
}

/// Greedy rotation scheduler.
///
/// Stateless between calls: every [`generate`](Self::generate) builds its
/// own history and random source.
///
/// # Example
///
/// ```
/// use u_rotation::rotation::{RotationRequest, RotationScheduler};
///
/// let request = RotationRequest::new(10usize, 4, 60, 10).with_seed(1);
/// let result = RotationScheduler::new().generate(&request).unwrap();
///
/// assert_eq!(result.metadata.participant_count, 10);
/// for round in &result.rounds {
///     assert_eq!(round.tables.len(), 4);
///     assert_eq!(round.seated_count(), 10);
/// }
/// assert!(result.table_for("Participant 3", 1).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RotationScheduler {
    config: RotationConfig,
}

impl RotationScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the heuristic configuration.
    pub fn with_config(mut self, config: RotationConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Generates a rotation plan.
    ///
    /// Returns the first validation error if the request is rejected; no
    /// rounds are produced in that case. Once validated, generation always
    /// seats every participant in every round.
    pub fn generate(&self, request: &RotationRequest) -> Result<GenerationResult, RotationError> {
        if let Some(error) = validate_request(request)
            .err()
            .and_then(|errors| errors.into_iter().next())
        {
            debug!(%error, "rotation request rejected");
            return Err(error);
        }

        let names = request.participants.to_names();
        let participant_count = names.len();
        let table_count = usize::try_from(request.table_count).unwrap_or(usize::MAX);
        let session_minutes = request.session_duration_minutes.unsigned_abs();
        let time_per_round = request.time_per_round_minutes.unsigned_abs();

        let plan = RotationPlan::derive(
            participant_count,
            table_count,
            session_minutes,
            time_per_round,
            &self.config,
        );
        let seed = request.seed.unwrap_or_else(rand::random);
        let mut ctx = SeatingContext::new(participant_count, seed);

        let mut rounds = Vec::with_capacity(plan.rounds);
        let mut forced_placements = 0;

        for number in 1..=plan.rounds {
            let seating = self.seat_round(&mut ctx, &plan);
            debug!(
                round = number,
                forced = seating.forced,
                "seated rotation round"
            );
            forced_placements += seating.forced;
            rounds.push(self.build_round(number, &seating, &names));
        }

        info!(
            participants = participant_count,
            tables = plan.table_count,
            rounds = plan.rounds,
            minutes_per_round = plan.minutes_per_round,
            forced_placements,
            seed,
            "generated rotation plan"
        );

        Ok(GenerationResult {
            metadata: RotationMetadata {
                participant_count,
                table_count: plan.table_count,
                rounds_generated: rounds.len(),
                minutes_per_round: plan.minutes_per_round,
                participants_per_table: plan.base_capacity,
                max_theoretical_rounds: plan.max_theoretical_rounds,
                seed,
                forced_placements,
            },
            rounds,
        })
    }

    /// Generates a plan and wraps the outcome in the caller-facing shape.
    pub fn respond(&self, request: &RotationRequest) -> RotationResponse {
        self.generate(request).into()
    }

    /// Seats every participant for one round.
    fn seat_round(&self, ctx: &mut SeatingContext, plan: &RotationPlan) -> RoundSeating {
        let table_count = plan.table_count;
        let capacities = ctx.round_capacities(table_count, plan.base_capacity, plan.extra_tables);
        let mut occupants: Vec<Vec<usize>> = vec![Vec::new(); table_count];
        let mut forced = 0;

        for p in ctx.visit_order() {
            let candidates = ctx.candidate_tables(p, table_count, self.config.proximity_radius);
            let has_room = |t: usize| occupants[t].len() < capacities[t];

            let fresh = candidates
                .iter()
                .copied()
                .find(|&t| has_room(t) && !ctx.history.has_met_any(p, &occupants[t]));

            let table = match fresh {
                Some(t) => t,
                None => {
                    forced += 1;
                    let Some(t) = candidates.iter().copied().find(|&t| has_room(t)) else {
                        unreachable!("seats per round equal the participant count");
                    };
                    t
                }
            };

            occupants[table].push(p);
            ctx.last_table[p] = Some(table);
        }

        for table in &occupants {
            ctx.history.record_table(table);
        }

        RoundSeating { occupants, forced }
    }

    fn build_round(&self, number: usize, seating: &RoundSeating, names: &[String]) -> Round {
        let tables = seating
            .occupants
            .iter()
            .enumerate()
            .map(|(idx, members)| {
                let table_id = idx + 1;
                TableAssignment::new(
                    table_id,
                    self.config.table_name(table_id),
                    members.iter().map(|&p| names[p].clone()).collect(),
                )
            })
            .collect();
        Round::new(number, tables)
    }
}

/// Generates a rotation plan with the default configuration.
pub fn generate_rotations(request: &RotationRequest) -> Result<GenerationResult, RotationError> {
    RotationScheduler::new().generate(request)
}
