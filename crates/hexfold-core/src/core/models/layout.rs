use super::chain::Chain;
use crate::core::lattice::{self, Direction, HexCoord, LatticeError};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error(
        "Monomer {second} ({second_code}) overlaps monomer {first} ({first_code}) at {coord}"
    )]
    Overlap {
        first: usize,
        first_code: String,
        second: usize,
        second_code: String,
        coord: HexCoord,
    },
    #[error("Invalid bend at position {index}: {source}")]
    InvalidBend {
        index: usize,
        #[source]
        source: LatticeError,
    },
}

/// Lattice positions of a chain, one per monomer, in sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    positions: Vec<HexCoord>,
    occupancy: HashMap<HexCoord, usize>,
}

impl Layout {
    /// Places the chain starting at the origin heading east, bending after
    /// every monomer with a nonzero fold state.
    pub fn build(chain: &Chain) -> Result<Self, LayoutError> {
        let positions = Self::trace(chain)?;
        let mut occupancy = HashMap::with_capacity(positions.len());

        for (placed, &coord) in positions.iter().enumerate() {
            if let Some(&existing) = occupancy.get(&coord) {
                if existing + 1 != placed {
                    return Err(LayoutError::Overlap {
                        first: existing,
                        first_code: chain.monomers()[existing].code().to_string(),
                        second: placed,
                        second_code: chain.monomers()[placed].code().to_string(),
                        coord,
                    });
                }
            }
            occupancy.insert(coord, placed);
        }

        Ok(Self {
            positions,
            occupancy,
        })
    }

    /// Walks the chain and returns every monomer's coordinate without
    /// checking for overlap.
    pub fn trace(chain: &Chain) -> Result<Vec<HexCoord>, LayoutError> {
        let mut positions = Vec::with_capacity(chain.len());
        let mut current = HexCoord::ORIGIN;
        let mut heading = Direction::East;
        positions.push(current);

        let segments = chain.fold_states().iter().enumerate();
        for (i, &steps) in segments.take(chain.len().saturating_sub(1)) {
            if steps != 0 {
                heading = Self::turn(heading, steps)
                    .map_err(|source| LayoutError::InvalidBend { index: i, source })?;
            }
            current = current.neighbor(heading);
            positions.push(current);
        }
        Ok(positions)
    }

    fn turn(heading: Direction, steps: i8) -> Result<Direction, LatticeError> {
        let (angle, sense) = lattice::steps_to_angle(steps)?;
        let sense = sense.ok_or(LatticeError::MissingTurnSense(angle))?;
        lattice::bend(heading, angle, sense)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[HexCoord] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<HexCoord> {
        self.positions.get(index).copied()
    }

    pub fn occupant(&self, coord: HexCoord) -> Option<usize> {
        self.occupancy.get(&coord).copied()
    }

    /// Number of the six lattice neighbors of `index` that hold a monomer.
    pub fn occupied_neighbor_count(&self, index: usize) -> usize {
        self.positions.get(index).map_or(0, |coord| {
            coord
                .neighbors()
                .iter()
                .filter(|(_, n)| self.occupancy.contains_key(n))
                .count()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(sequence: &str, folds: &str) -> Chain {
        Chain::parse(sequence, Some(folds)).unwrap()
    }

    #[test]
    fn straight_chain_runs_east_from_origin() {
        let layout = Layout::build(&chain("FLX-FLX-FLX-FLX", "0,0,0,0")).unwrap();
        assert_eq!(
            layout.positions(),
            &[
                HexCoord::new(0, 0),
                HexCoord::new(1, 0),
                HexCoord::new(2, 0),
                HexCoord::new(3, 0)
            ]
        );
    }

    #[test]
    fn fold_state_bends_the_following_segment() {
        let layout = Layout::build(&chain("FLX-L60-FLX", "0,1,0")).unwrap();
        assert_eq!(layout.position(2), Some(HexCoord::new(1, 1)));

        let layout = Layout::build(&chain("FLX-FLX-FLX", "0,-1,0")).unwrap();
        assert_eq!(layout.position(2), Some(HexCoord::new(2, -1)));
    }

    #[test]
    fn last_fold_state_does_not_move_anything() {
        let a = Layout::build(&chain("FLX-FLX-FLX", "0,1,0")).unwrap();
        let b = Layout::build(&chain("FLX-FLX-FLX", "0,1,-2")).unwrap();
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn first_fold_state_only_rotates_the_whole_chain() {
        let a = Layout::build(&chain("FLX-FLX-FLX-FLX", "0,1,-1,0")).unwrap();
        let b = Layout::build(&chain("FLX-FLX-FLX-FLX", "2,1,-1,0")).unwrap();
        assert_eq!(b.position(1), Some(HexCoord::new(-1, 1)));
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(
                    a.positions()[i].distance(a.positions()[j]),
                    b.positions()[i].distance(b.positions()[j])
                );
            }
        }
    }

    #[test]
    fn consecutive_monomers_are_one_step_apart() {
        let zigzag = chain("FLX-FLX-FLX-FLX-FLX-FLX", "0,2,-1,1,-2,0");
        let layout = Layout::build(&zigzag).unwrap();
        for pair in layout.positions().windows(2) {
            assert_eq!(pair[0].distance(pair[1]), 1);
        }
    }

    #[test]
    fn five_same_sense_bends_close_the_ring_and_overlap() {
        let ring = chain("FLX-FLX-FLX-FLX-FLX-FLX-POS", "0,1,1,1,1,1,0");
        let result = Layout::build(&ring);
        assert_eq!(
            result,
            Err(LayoutError::Overlap {
                first: 0,
                first_code: "FLX".to_string(),
                second: 6,
                second_code: "POS".to_string(),
                coord: HexCoord::ORIGIN,
            })
        );
    }

    #[test]
    fn six_same_sense_bends_overlap_at_the_same_point() {
        let result = Layout::build(&chain(
            "FLX-FLX-FLX-FLX-FLX-FLX-FLX-FLX",
            "0,-1,-1,-1,-1,-1,-1,0",
        ));
        assert!(matches!(
            result,
            Err(LayoutError::Overlap {
                first: 0,
                second: 6,
                ..
            })
        ));
    }

    #[test]
    fn overlap_detection_handles_many_bends() {
        // zig-zag that stays open, then a tight hairpin back onto itself
        let layout = Layout::build(&chain(
            "FLX-FLX-FLX-FLX-FLX-FLX-FLX-FLX-FLX",
            "0,1,-1,1,-1,1,-1,1,0",
        ));
        assert!(layout.is_ok());

        let result = Layout::build(&chain("FLX-FLX-FLX-FLX-FLX", "0,0,2,2,0"));
        assert!(matches!(
            result,
            Err(LayoutError::Overlap {
                first: 1,
                second: 4,
                ..
            })
        ));
    }

    #[test]
    fn trace_places_overlapping_chains_without_failing() {
        let ring = chain("FLX-FLX-FLX-FLX-FLX-FLX-FLX", "0,1,1,1,1,1,0");
        let positions = Layout::trace(&ring).unwrap();
        assert_eq!(positions.len(), 7);
        assert_eq!(positions[0], positions[6]);
    }

    #[test]
    fn occupied_neighbor_count_sees_non_sequence_contacts() {
        let spiral = chain("HPB-FLX-FLX-FLX-FLX-FLX-FLX", "0,2,1,1,1,1,0");
        let spiral = Layout::build(&spiral).unwrap();
        assert_eq!(spiral.occupied_neighbor_count(0), 6);
        assert_eq!(spiral.occupant(HexCoord::new(1, -1)), Some(6));

        let line = Layout::build(&chain("FLX-FLX-FLX", "0,0,0")).unwrap();
        assert_eq!(line.occupied_neighbor_count(0), 1);
        assert_eq!(line.occupied_neighbor_count(1), 2);
        assert_eq!(line.occupied_neighbor_count(7), 0);
    }
}
