//! Closed tours over every node of a graph.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A closed walk stored as `n + 1` node ids, first and last equal.
///
/// The ids are shared: cloning a cycle, as every scored route does, only
/// bumps a reference count.
///
/// # Examples
///
/// ```
/// use u_circuit::models::Cycle;
///
/// let c = Cycle::new(vec![0, 1, 2, 3, 0]);
/// assert_eq!(c.start(), Some(0));
/// assert_eq!(c.num_stops(), 4);
/// assert_eq!(c.legs().count(), 4);
/// assert_eq!(c.to_string(), "0 → 1 → 2 → 3 → 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cycle(Arc<[usize]>);

impl Cycle {
    pub fn new(ids: Vec<usize>) -> Self {
        Self(ids.into())
    }

    /// Node ids in visit order, including the closing return to start.
    pub fn ids(&self) -> &[usize] {
        &self.0
    }

    pub fn start(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Number of distinct stops (the closing id is not counted).
    pub fn num_stops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs, including the closing leg.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns `true` if first and last ids are equal.
    pub fn is_closed(&self) -> bool {
        self.0.len() >= 2 && self.0.first() == self.0.last()
    }

    /// The same tour traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Open tour rotated so that it begins at its smallest id.
    ///
    /// Two cycles with equal rotation keys are the same tour started from a
    /// different node. Mirror images keep distinct keys.
    pub fn rotation_key(&self) -> Vec<usize> {
        let open = &self.0[..self.num_stops()];
        let Some(min_pos) = open
            .iter()
            .enumerate()
            .min_by_key(|&(_, id)| *id)
            .map(|(pos, _)| pos)
        else {
            return Vec::new();
        };
        open[min_pos..]
            .iter()
            .chain(open[..min_pos].iter())
            .copied()
            .collect()
    }
}

impl From<Vec<usize>> for Cycle {
    fn from(ids: Vec<usize>) -> Self {
        Self::new(ids)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
