use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    consts::{NPUNTOS, PAD, SIGMA, WA},
    transition::{freqs, weights},
    Transition,
};

/// how sample frequencies are laid out across the spectrum window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sampling {
    /// advance by step * (1 - wa/2) and then sample, so the first point
    /// already lies above the bottom of the window
    #[default]
    Stepped,

    /// evenly spaced points covering both ends of the window
    Uniform,
}

impl Sampling {
    /// frequency of sample `i` in a window starting at `numin` with step
    /// size `step`
    fn freq(&self, numin: f64, step: f64, i: usize) -> f64 {
        match self {
            Sampling::Stepped => {
                numin + (i + 1) as f64 * step * (1.0 - WA / 2.0)
            }
            Sampling::Uniform => numin + i as f64 * step,
        }
    }
}

/// a sampled spectrum of superposed Lorentzian lines
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    pub freqs: Vec<f64>,
    pub intensities: Vec<f64>,
}

impl Spectrum {
    /// synthesize a spectrum from the line positions `nu` and their weights
    /// `w`. panics if the two are different lengths or empty
    pub fn new(nu: &[f64], w: &[f64], sampling: Sampling) -> Self {
        assert_eq!(nu.len(), w.len(), "mismatched frequencies and weights");
        assert!(!nu.is_empty(), "no transitions to synthesize");

        let numin = nu.iter().cloned().fold(f64::INFINITY, f64::min) - PAD;
        let numax = nu.iter().cloned().fold(f64::NEG_INFINITY, f64::max) + PAD;
        let rango = numax - numin;
        let paso = rango / NPUNTOS as f64;
        info!("sampling {numin:.4} to {numax:.4} cm-1 with step {paso:.6}");

        let mut freqs = Vec::with_capacity(NPUNTOS + 1);
        let mut intensities = Vec::with_capacity(NPUNTOS + 1);
        for i in 0..=NPUNTOS {
            let freq = sampling.freq(numin, paso, i);
            freqs.push(freq);
            intensities.push(lorentz(freq, nu, w));
        }
        Self { freqs, intensities }
    }

    pub fn from_transitions(
        transitions: &[Transition],
        sampling: Sampling,
    ) -> Self {
        let nu = freqs(transitions);
        let w = weights(transitions);
        Self::new(nu.as_slice(), w.as_slice(), sampling)
    }

    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// iterate over the (frequency, intensity) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.freqs.iter().cloned().zip(self.intensities.iter().cloned())
    }

    /// the sample with the highest intensity, if any
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.iter().fold(None, |acc, (f, i)| match acc {
            Some((_, best)) if best >= i => acc,
            _ => Some((f, i)),
        })
    }

    /// write one `freq intensity` line per sample to `w`
    pub fn write_data<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        for (freq, fw) in self.iter() {
            writeln!(w, "{freq} {fw}")?;
        }
        Ok(())
    }

    /// write the spectrum to `path` in the format of [Spectrum::write_data],
    /// replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut f = BufWriter::new(File::create(path)?);
        self.write_data(&mut f)?;
        f.flush()
    }
}

/// intensity at `freq` of the Lorentzian lines centered at `nu` and scaled by
/// `w`
pub fn lorentz(freq: f64, nu: &[f64], w: &[f64]) -> f64 {
    nu.iter()
        .zip(w)
        .map(|(nu, w)| {
            let d = freq - nu;
            w / (1.0 + 4.0 * d * d / (SIGMA * SIGMA))
        })
        .sum()
}
