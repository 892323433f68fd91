//! Cell creation: founders seeded from the environment and offspring copied
//! from a parent with per-parameter mutation.

use crate::environment::Environment;
use rand::Rng;
use soup_data::{Cell, Identity, Position, Scalars};
use uuid::Uuid;

fn next_id<R: Rng>(rng: &mut R) -> Uuid {
    Uuid::from_u128(rng.gen::<u128>())
}

/// Founder at `(x, y)` whose tolerances equal the current environment.
pub fn create_founder_at<R: Rng>(
    x: f64,
    y: f64,
    env: &Environment,
    tick: u64,
    rng: &mut R,
) -> Cell {
    Cell {
        identity: Identity {
            id: next_id(rng),
            parent_id: None,
        },
        position: Position { x, y },
        tolerances: *env.values(),
        generation: 0,
        birth_tick: tick,
        offspring_count: 0,
    }
}

/// Founder in the middle of a `window_size` soup.
pub fn create_founder<R: Rng>(window_size: f64, env: &Environment, tick: u64, rng: &mut R) -> Cell {
    let mid = window_size / 2.0;
    create_founder_at(mid, mid, env, tick, rng)
}

/// Inherited tolerances: the parent's plus an independent uniform change in
/// `[-bound, +bound]` per parameter. A zero bound copies the value exactly.
pub fn mutate_tolerances<R: Rng>(parent: &Scalars, bounds: &Scalars, rng: &mut R) -> Scalars {
    parent.map(|p, v| {
        let bound = bounds.get(p);
        if bound > 0.0 {
            v + rng.gen_range(-bound..=bound)
        } else {
            v
        }
    })
}

pub struct OffspringParams<'a> {
    pub window_size: f64,
    pub scatter: f64,
    /// `None` copies the parent's tolerances unchanged.
    pub mutation: Option<&'a Scalars>,
    pub tick: u64,
}

/// One offspring near `parent`. Does not touch the parent's counters.
pub fn create_offspring<R: Rng>(parent: &Cell, params: &OffspringParams, rng: &mut R) -> Cell {
    let jitter = |rng: &mut R| {
        if params.scatter > 0.0 {
            rng.gen_range(-params.scatter..=params.scatter)
        } else {
            0.0
        }
    };
    let dx = jitter(rng);
    let dy = jitter(rng);
    let position = Position {
        x: parent.position.x + dx,
        y: parent.position.y + dy,
    }
    .clamped(params.window_size);

    let tolerances = match params.mutation {
        Some(bounds) => mutate_tolerances(&parent.tolerances, bounds, rng),
        None => parent.tolerances,
    };

    Cell {
        identity: Identity {
            id: next_id(rng),
            parent_id: Some(parent.identity.id),
        },
        position,
        tolerances,
        generation: parent.generation + 1,
        birth_tick: params.tick,
        offspring_count: 0,
    }
}
