use super::environment::Scalars;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    pub id: Uuid,
    /// `None` for founders.
    pub parent_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Clamps both coordinates into `[0, size]`.
    #[must_use]
    pub fn clamped(self, size: f64) -> Self {
        Self {
            x: self.x.clamp(0.0, size),
            y: self.y.clamp(0.0, size),
        }
    }

    #[must_use]
    pub fn within(&self, size: f64) -> bool {
        (0.0..=size).contains(&self.x) && (0.0..=size).contains(&self.y)
    }
}

/// A single agent in the soup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cell {
    pub identity: Identity,
    pub position: Position,
    /// Environment values this cell is adapted to.
    pub tolerances: Scalars,
    /// Generational depth from the founder.
    pub generation: u32,
    pub birth_tick: u64,
    pub offspring_count: u32,
}

impl Cell {
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.identity.id
    }

    #[must_use]
    pub fn is_founder(&self) -> bool {
        self.identity.parent_id.is_none()
    }

    #[must_use]
    pub fn age(&self, tick: u64) -> u64 {
        tick.saturating_sub(self.birth_tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_clamped_into_window() {
        let p = Position { x: -3.0, y: 1003.0 }.clamped(1000.0);
        assert_eq!(p, Position { x: 0.0, y: 1000.0 });
        assert!(p.within(1000.0));
    }

    #[test]
    fn test_age_saturates() {
        let cell = Cell {
            identity: Identity {
                id: Uuid::nil(),
                parent_id: None,
            },
            position: Position::default(),
            tolerances: Scalars::default(),
            generation: 0,
            birth_tick: 10,
            offspring_count: 0,
        };
        assert_eq!(cell.age(4), 0);
        assert_eq!(cell.age(15), 5);
        assert!(cell.is_founder());
    }
}
