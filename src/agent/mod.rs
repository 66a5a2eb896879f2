use rand::{rngs::StdRng, SeedableRng};

pub mod difficulty;
pub mod evaluate;
pub mod scores;
pub mod search;

pub use difficulty::*;
pub use evaluate::*;
pub use scores::*;
pub use search::*;

#[derive(Debug)]
/// The search agent: an injected randomness source plus node counters.
pub struct Agent
{
    /// Evaluator calls made by the current search.
    leaves: u64,

    /// The generator behind candidate shuffling and score jitter.
    ///
    /// Injected rather than ambient, so a seeded agent replays identical games.
    rng: StdRng,

    /// Interior nodes expanded by the current search.
    stems: u64,
}

impl Agent
{
    /// Creates an agent, seeding its generator when a seed is supplied.
    pub fn new(seed: Option<u64>) -> Self
    {
        let rng = match seed
        {
            | Some(seed) => StdRng::seed_from_u64(seed),
            | None => StdRng::from_entropy(),
        };

        Agent {
            leaves: 0,
            rng,
            stems: 0,
        }
    }
}
