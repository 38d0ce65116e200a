use crate::{transition, Branch, Dvec, Rovib};

impl Rovib {
    /// unnormalized Boltzmann population of rotational level `j`, including
    /// its 2J + 1 degeneracy
    pub fn nj(&self, j: usize) -> f64 {
        (2.0 * j as f64 + 1.0) * f64::exp(-self.frot(j) / self.kt())
    }

    /// rotational partition function summed over J = 0..=jmax
    pub fn qrot(&self) -> f64 {
        (0..=self.jmax).map(|j| self.nj(j)).sum()
    }

    /// population weight of the `branch` transition out of lower state `j`,
    /// normalized by `qrot`. the Q line carries no weight
    pub fn weight(&self, branch: Branch, j: usize, qrot: f64) -> f64 {
        match branch {
            Branch::Q => 0.0,
            Branch::P | Branch::R => self.nj(j) / qrot,
        }
    }

    /// the population weights in the packed layout of [Rovib::transitions]
    pub fn weights(&self) -> Dvec {
        transition::weights(&self.transitions())
    }
}
