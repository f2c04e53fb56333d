use crate::domain::exclusions::ExclusionSet;
use crate::domain::model::{Assignment, Participant};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Result of one pass over the givers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Complete(Assignment),
    /// Some giver found no valid recipient left in the pool.
    Incomplete,
}

/// Result of the bounded retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    Matched { assignment: Assignment, attempts: u32 },
    Exhausted { attempts: u32 },
}

pub struct Matcher {
    rng: StdRng,
    reseed_per_shuffle: bool,
    shuffles: u64,
}

impl Matcher {
    /// Re-seeds from the clock before every shuffle.
    pub fn time_seeded() -> Self {
        Self {
            rng: StdRng::seed_from_u64(time_seed(0)),
            reseed_per_shuffle: true,
            shuffles: 0,
        }
    }

    /// Deterministic sequence for reproducible draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            reseed_per_shuffle: false,
            shuffles: 0,
        }
    }

    /// Single matching attempt. Each giver, in order, takes the first
    /// acceptable recipient of a freshly shuffled pool.
    pub fn attempt_match(
        &mut self,
        givers: &[Participant],
        recipients: &[Participant],
        exclusions: &ExclusionSet,
    ) -> MatchOutcome {
        let mut pool = recipients.to_vec();
        let mut assignment = Assignment::new();

        for giver in givers {
            self.shuffle(&mut pool);

            let position = pool.iter().position(|recipient| {
                recipient.name != giver.name
                    && !assignment.contains_recipient(&recipient.name)
                    && !exclusions.is_excluded(&giver.name, &recipient.name)
            });

            match position {
                Some(index) => {
                    let recipient = pool.remove(index);
                    assignment.insert(giver.clone(), recipient);
                }
                None => {
                    tracing::debug!("No recipient left for {}", giver.name);
                    return MatchOutcome::Incomplete;
                }
            }
        }

        MatchOutcome::Complete(assignment)
    }

    /// Retries [`Matcher::attempt_match`] with the roster on both sides until
    /// one completes or `max_attempts` passes have failed.
    pub fn draw(
        &mut self,
        roster: &[Participant],
        exclusions: &ExclusionSet,
        max_attempts: u32,
    ) -> DrawOutcome {
        for attempt in 1..=max_attempts {
            match self.attempt_match(roster, roster, exclusions) {
                MatchOutcome::Complete(assignment) => {
                    tracing::debug!("Draw completed on attempt {}", attempt);
                    return DrawOutcome::Matched {
                        assignment,
                        attempts: attempt,
                    };
                }
                MatchOutcome::Incomplete => {
                    tracing::debug!(
                        "🔁 Someone ended up without a partner on attempt {}, trying again",
                        attempt
                    );
                }
            }
        }

        DrawOutcome::Exhausted {
            attempts: max_attempts,
        }
    }

    fn shuffle(&mut self, pool: &mut [Participant]) {
        if self.reseed_per_shuffle {
            self.rng = StdRng::seed_from_u64(time_seed(self.shuffles));
        }
        self.shuffles = self.shuffles.wrapping_add(1);
        pool.shuffle(&mut self.rng);
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::time_seeded()
    }
}

// Clock resolution can repeat between two quick shuffles, so the shuffle
// counter is mixed in.
fn time_seed(salt: u64) -> u64 {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    nanos ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
