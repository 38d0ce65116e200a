use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Rovib, Spectrum, Transition};

/// contains all of the output data from running Rovib
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Output {
    /// the molecule the spectrum was computed for
    pub input: Rovib,

    /// rotational partition function
    pub qrot: f64,

    /// the lines of the spectrum in P, Q, R order
    pub transitions: Vec<Transition>,

    pub spectrum: Spectrum,
}

impl Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rotation-vibration spectrum of {}", self.input.label)?;
        writeln!(f, "\nSpectroscopic Constants:\n{}", self.input.annotation())?;
        writeln!(f, "Jmax = {}", self.input.jmax)?;
        writeln!(f, "T = {} K", self.input.temp)?;

        writeln!(
            f,
            "\nTransitions (cm-1):\n{:>6}{:>5}{:>14}{:>12}",
            "Branch", "J", "Freq", "Weight"
        )?;
        for t in &self.transitions {
            writeln!(f, "{t}")?;
        }

        writeln!(f, "\nqRot = {:.8}", self.qrot)?;

        if let (Some(first), Some(last)) =
            (self.spectrum.freqs.first(), self.spectrum.freqs.last())
        {
            writeln!(
                f,
                "\nSpectrum: {} points from {first:.4} to {last:.4} cm-1",
                self.spectrum.len()
            )?;
        }
        if let Some((freq, fw)) = self.spectrum.peak() {
            writeln!(f, "Peak intensity {fw:.6} at {freq:.4} cm-1")?;
        }

        Ok(())
    }
}
