use std::fmt;
use thiserror::Error;

pub const MIN_STEPS: i8 = -2;
pub const MAX_STEPS: i8 = 2;

const DEGREES_PER_STEP: u32 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LatticeError {
    #[error("Invalid bend angle {0}°: only 60° and 120° bends are allowed")]
    InvalidAngle(u32),
    #[error("A {0}° bend requires a turn sense")]
    MissingTurnSense(u32),
    #[error("Fold state {0} is outside the supported range {MIN_STEPS}..={MAX_STEPS}")]
    StepsOutOfRange(i8),
    #[error("Direction index {0} is outside 0..6")]
    InvalidDirection(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, LatticeError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(LatticeError::InvalidDirection(index))
    }

    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::SouthEast => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (0, -1),
            Direction::NorthEast => (1, -1),
        }
    }

    #[inline]
    pub fn rotate(self, k: i32) -> Self {
        Self::ALL[(self.index() as i32 + k).rem_euclid(6) as usize]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
            Direction::NorthEast => "NE",
        };
        f.write_str(label)
    }
}

/// Rotational sense of a bend. `Left` maps to positive steps, `Right` to negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnSense {
    Left,
    Right,
}

impl TurnSense {
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            TurnSense::Left => 1,
            TurnSense::Right => -1,
        }
    }
}

/// Axial hex coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    #[inline]
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dq, dr) = direction.offset();
        Self {
            q: self.q + dq,
            r: self.r + dr,
        }
    }

    pub fn neighbors(self) -> [(Direction, HexCoord); 6] {
        Direction::ALL.map(|direction| (direction, self.neighbor(direction)))
    }

    /// Hex (cube Manhattan) distance in lattice steps.
    #[inline]
    pub fn distance(self, other: HexCoord) -> u32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        ((dq.abs() + dr.abs() + (dq + dr).abs()) / 2) as u32
    }

    /// Planar embedding with unit spacing between neighboring cells.
    pub fn to_cartesian(self) -> (f64, f64) {
        let q = self.q as f64;
        let r = self.r as f64;
        (q + r / 2.0, r * 3f64.sqrt() / 2.0)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

pub fn bend(
    direction: Direction,
    angle_degrees: u32,
    sense: TurnSense,
) -> Result<Direction, LatticeError> {
    let k = match angle_degrees {
        60 => 1,
        120 => 2,
        other => return Err(LatticeError::InvalidAngle(other)),
    };
    Ok(direction.rotate(k * sense.sign()))
}

pub fn angle_to_steps(angle_degrees: u32, sense: Option<TurnSense>) -> Result<i8, LatticeError> {
    let magnitude = match angle_degrees {
        0 => return Ok(0),
        60 => 1,
        120 => 2,
        other => return Err(LatticeError::InvalidAngle(other)),
    };
    let sense = sense.ok_or(LatticeError::MissingTurnSense(angle_degrees))?;
    Ok(magnitude * sense.sign() as i8)
}

pub fn steps_to_angle(steps: i8) -> Result<(u32, Option<TurnSense>), LatticeError> {
    if !(MIN_STEPS..=MAX_STEPS).contains(&steps) {
        return Err(LatticeError::StepsOutOfRange(steps));
    }
    let angle = steps.unsigned_abs() as u32 * DEGREES_PER_STEP;
    let sense = match steps.signum() {
        1 => Some(TurnSense::Left),
        -1 => Some(TurnSense::Right),
        _ => None,
    };
    Ok((angle, sense))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_in_canonical_order_and_one_step_away() {
        let center = HexCoord::new(2, -3);
        let neighbors = center.neighbors();
        for (i, (direction, coord)) in neighbors.iter().enumerate() {
            assert_eq!(direction.index(), i);
            assert_eq!(center.distance(*coord), 1);
        }
        assert_eq!(neighbors[0].1, HexCoord::new(3, -3));
        assert_eq!(neighbors[3].1, HexCoord::new(1, -3));
    }

    #[test]
    fn neighbor_moves_along_direction_offset() {
        let start = HexCoord::ORIGIN;
        assert_eq!(start.neighbor(Direction::East), HexCoord::new(1, 0));
        assert_eq!(start.neighbor(Direction::SouthWest), HexCoord::new(-1, 1));
        assert_eq!(start.neighbor(Direction::NorthEast), HexCoord::new(1, -1));
    }

    #[test]
    fn opposite_directions_cancel() {
        for direction in Direction::ALL {
            let back = direction.rotate(3);
            let there = HexCoord::ORIGIN.neighbor(direction);
            assert_eq!(there.neighbor(back), HexCoord::ORIGIN);
        }
    }

    #[test]
    fn rotate_wraps_modulo_six() {
        assert_eq!(Direction::NorthEast.rotate(1), Direction::East);
        assert_eq!(Direction::East.rotate(-1), Direction::NorthEast);
        assert_eq!(Direction::East.rotate(-8), Direction::NorthWest);
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(Direction::from_index(4), Ok(Direction::NorthWest));
        assert_eq!(
            Direction::from_index(6),
            Err(LatticeError::InvalidDirection(6))
        );
    }

    #[test]
    fn bend_applies_signed_rotation() {
        let cases = [
            (60, TurnSense::Left, Direction::SouthEast),
            (120, TurnSense::Left, Direction::SouthWest),
            (60, TurnSense::Right, Direction::NorthEast),
            (120, TurnSense::Right, Direction::NorthWest),
        ];
        for (angle, sense, expected) in cases {
            assert_eq!(bend(Direction::East, angle, sense), Ok(expected));
        }
    }

    #[test]
    fn bend_rejects_unsupported_angles() {
        for angle in [0, 45, 90, 180] {
            assert_eq!(
                bend(Direction::East, angle, TurnSense::Left),
                Err(LatticeError::InvalidAngle(angle))
            );
        }
    }

    #[test]
    fn distance_is_zero_only_for_identical_coordinates() {
        let a = HexCoord::new(1, 2);
        assert_eq!(a.distance(a), 0);
        assert!(a.distance(HexCoord::new(1, 3)) > 0);
    }

    #[test]
    fn distance_is_symmetric_and_satisfies_triangle_inequality() {
        let points = [
            HexCoord::new(0, 0),
            HexCoord::new(3, -1),
            HexCoord::new(-2, 4),
            HexCoord::new(5, 5),
        ];
        for &a in &points {
            for &b in &points {
                assert_eq!(a.distance(b), b.distance(a));
                for &c in &points {
                    assert!(a.distance(c) <= a.distance(b) + b.distance(c));
                }
            }
        }
        assert_eq!(HexCoord::new(0, 0).distance(HexCoord::new(1, 1)), 2);
        assert_eq!(HexCoord::new(0, 0).distance(HexCoord::new(-2, 4)), 4);
    }

    #[test]
    fn angle_to_steps_matches_table() {
        assert_eq!(angle_to_steps(0, None), Ok(0));
        assert_eq!(angle_to_steps(60, Some(TurnSense::Left)), Ok(1));
        assert_eq!(angle_to_steps(60, Some(TurnSense::Right)), Ok(-1));
        assert_eq!(angle_to_steps(120, Some(TurnSense::Left)), Ok(2));
        assert_eq!(angle_to_steps(120, Some(TurnSense::Right)), Ok(-2));
    }

    #[test]
    fn angle_to_steps_rejects_missing_sense_and_bad_angle() {
        assert_eq!(
            angle_to_steps(60, None),
            Err(LatticeError::MissingTurnSense(60))
        );
        assert_eq!(
            angle_to_steps(45, Some(TurnSense::Left)),
            Err(LatticeError::InvalidAngle(45))
        );
    }

    #[test]
    fn steps_and_angles_round_trip_over_full_range() {
        for steps in MIN_STEPS..=MAX_STEPS {
            let (angle, sense) = steps_to_angle(steps).unwrap();
            assert_eq!(angle_to_steps(angle, sense), Ok(steps));
        }
    }

    #[test]
    fn steps_to_angle_rejects_out_of_range() {
        assert_eq!(steps_to_angle(3), Err(LatticeError::StepsOutOfRange(3)));
        assert_eq!(steps_to_angle(-3), Err(LatticeError::StepsOutOfRange(-3)));
    }

    #[test]
    fn cartesian_embedding_keeps_neighbors_at_unit_spacing() {
        let (x0, y0) = HexCoord::ORIGIN.to_cartesian();
        for (_, coord) in HexCoord::ORIGIN.neighbors() {
            let (x, y) = coord.to_cartesian();
            let d = ((x - x0).powi(2) + (y - y0).powi(2)).sqrt();
            assert!((d - 1.0).abs() < 1e-12);
        }
    }
}
