use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// selection-rule branch of a v = 0 -> 1 transition, by the change in J
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// ΔJ = -1
    P,
    /// ΔJ = 0
    Q,
    /// ΔJ = +1
    R,
}

impl Branch {
    /// rotational quantum number of the upper state for a transition out of
    /// lower state `j`. panics for a P transition out of J = 0
    pub fn upper(&self, j: usize) -> usize {
        match self {
            Branch::P => {
                assert!(j > 0, "no P transition out of J = 0");
                j - 1
            }
            Branch::Q => j,
            Branch::R => j + 1,
        }
    }

    /// the lower-state J values spanned by this branch for `jmax`, in
    /// increasing order
    pub fn lower_js(&self, jmax: usize) -> std::ops::RangeInclusive<usize> {
        match self {
            Branch::P => 1..=jmax,
            Branch::Q => 0..=0,
            Branch::R => 0..=jmax,
        }
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Branch::P => "P",
            Branch::Q => "Q",
            Branch::R => "R",
        })
    }
}
