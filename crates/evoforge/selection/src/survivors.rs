//! Survivor selection: elitism, then roulette without replacement.

use crate::by_fitness_desc;
use evoforge_genome::Component;
use rand::Rng;
use tracing::debug;

#[derive(Debug)]
pub struct SurvivorSelection {
    /// Exactly `target` components, unless the pool was empty.
    pub survivors: Vec<Component>,
    pub elites: usize,
    /// Fresh clones added because the pool was smaller than the target.
    pub padded: usize,
}

/// Elite slots for a population of `target`: `ceil(target * rate)`, at most `target`.
pub fn elite_count(target: usize, elitism_rate: f64) -> usize {
    ((target as f64 * elitism_rate).ceil() as usize).min(target)
}

/// Reduce `pool` to exactly `target` components.
///
/// The top [`elite_count`] survive unconditionally. Remaining slots are
/// filled by fitness-proportional draws without replacement, uniform when
/// the remaining fitness sums to zero. A pool smaller than `target` is
/// padded with fresh-id clones of its fittest members, born in `generation`.
pub fn select_survivors<R: Rng + ?Sized>(
    mut pool: Vec<Component>,
    target: usize,
    elitism_rate: f64,
    generation: u64,
    rng: &mut R,
) -> SurvivorSelection {
    pool.sort_by(by_fitness_desc);

    let elites = elite_count(target, elitism_rate).min(pool.len());
    let mut rest = pool.split_off(elites);
    let mut survivors = pool;

    while survivors.len() < target && !rest.is_empty() {
        let i = spin(&rest, rng);
        survivors.push(rest.swap_remove(i));
    }

    let mut padded = 0;
    if survivors.len() < target && !survivors.is_empty() {
        survivors.sort_by(by_fitness_desc);
        let originals = survivors.len();
        while survivors.len() < target {
            let clone = survivors[padded % originals].clone_fresh(rng, generation);
            survivors.push(clone);
            padded += 1;
        }
    }
    survivors.truncate(target);

    debug!(
        target,
        elites,
        padded,
        survivors = survivors.len(),
        "survivors selected"
    );

    SurvivorSelection {
        survivors,
        elites,
        padded,
    }
}

/// One roulette-wheel draw over `candidates`; must not be empty.
fn spin<R: Rng + ?Sized>(candidates: &[Component], rng: &mut R) -> usize {
    let total: f64 = candidates.iter().map(|c| c.fitness().value()).sum();
    if total <= 0.0 {
        return rng.gen_range(0..candidates.len());
    }

    let mut ball = rng.gen_range(0.0..total);
    for (i, candidate) in candidates.iter().enumerate() {
        let slot = candidate.fitness().value();
        if ball < slot {
            return i;
        }
        ball -= slot;
    }
    candidates.len() - 1
}
