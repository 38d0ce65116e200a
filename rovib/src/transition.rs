use std::fmt::Display;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Branch, Dvec, Rovib};

/// a single v = 0 -> 1 absorption line
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub branch: Branch,

    /// rotational quantum number of the lower (v = 0) state
    pub j: usize,

    /// transition wavenumber (cm-1)
    pub freq: f64,

    /// Boltzmann population weight of the lower state
    pub weight: f64,
}

impl Transition {
    pub fn new(branch: Branch, j: usize, freq: f64, weight: f64) -> Self {
        Self {
            branch,
            j,
            freq,
            weight,
        }
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>6}{:5}{:14.4}{:12.6}",
            self.branch, self.j, self.freq, self.weight
        )
    }
}

impl Rovib {
    /// wavenumber of the `branch` transition out of lower state `j`. callers
    /// must keep `j` inside [Branch::lower_js], there is no P line out of
    /// J = 0
    pub(crate) fn nu(&self, branch: Branch, j: usize) -> f64 {
        self.srovib(1, branch.upper(j)) - self.srovib(0, j)
    }

    /// the transition wavenumbers of `branch`, in increasing order of lower
    /// state J
    pub fn branch(&self, branch: Branch) -> Vec<f64> {
        branch
            .lower_js(self.jmax)
            .map(|j| self.nu(branch, j))
            .collect()
    }

    /// generate every transition in the packed layout: the P branch with
    /// decreasing J, the single Q line, then the R branch with increasing J.
    /// there are 2 * jmax + 2 of them
    pub fn transitions(&self) -> Vec<Transition> {
        let qrot = self.qrot();
        let p = Branch::P.lower_js(self.jmax).rev().map(|j| (Branch::P, j));
        let q = Branch::Q.lower_js(self.jmax).map(|j| (Branch::Q, j));
        let r = Branch::R.lower_js(self.jmax).map(|j| (Branch::R, j));
        let ret: Vec<_> = p
            .chain(q)
            .chain(r)
            .map(|(branch, j)| {
                let t = Transition::new(
                    branch,
                    j,
                    self.nu(branch, j),
                    self.weight(branch, j, qrot),
                );
                debug!("nu{}: {:5} {}", t.branch, t.j, t.freq);
                t
            })
            .collect();
        debug_assert_eq!(ret.len(), 2 * self.jmax + 2);
        ret
    }

    /// the transition wavenumbers in the packed layout of
    /// [Rovib::transitions]
    pub fn nu_rovib(&self) -> Dvec {
        freqs(&self.transitions())
    }
}

/// project the frequencies out of `transitions`
pub fn freqs(transitions: &[Transition]) -> Dvec {
    Dvec::from_iterator(transitions.len(), transitions.iter().map(|t| t.freq))
}

/// project the weights out of `transitions`
pub fn weights(transitions: &[Transition]) -> Dvec {
    Dvec::from_iterator(
        transitions.len(),
        transitions.iter().map(|t| t.weight),
    )
}
