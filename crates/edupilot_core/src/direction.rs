//! Travel direction for cyclic motion

use serde::{Deserialize, Serialize};

/// Direction a looping row travels in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Content slides toward the leading edge (offset 0% → -50%)
    #[default]
    Forward,
    /// Content slides toward the trailing edge (offset -50% → 0%)
    Reverse,
}

impl Direction {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Alternate directions row by row, starting with `Forward` on row 0
    pub fn alternating(row: usize) -> Self {
        if row % 2 == 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_alternates() {
        assert_eq!(Direction::alternating(0), Direction::Forward);
        assert_eq!(Direction::alternating(1), Direction::Reverse);
        assert_eq!(Direction::alternating(2), Direction::Forward);
        assert_eq!(Direction::Forward.flipped(), Direction::Reverse);
    }
}
