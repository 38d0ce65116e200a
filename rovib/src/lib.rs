use serde::{Deserialize, Serialize};

pub mod branch;
pub mod consts;
mod default;
pub mod load;
pub mod output;
mod population;
mod run;
pub mod spectrum;
mod terms;
pub mod transition;

pub use branch::Branch;
pub use load::LoadError;
pub use output::Output;
pub use spectrum::{Sampling, Spectrum};
pub use transition::Transition;


pub type Dvec = nalgebra::DVector<f64>;

/// struct containing the fields to describe a diatomic molecule input:
/// ```text
/// label: String: the name of the molecule
/// b: f64: rotational constant (cm-1)
/// d: f64: centrifugal distortion constant (cm-1)
/// nue: f64: vibrational frequency (cm-1)
/// xe: f64: anharmonicity constant
/// alfae: f64: rotation-vibration coupling constant (cm-1)
/// jmax: usize: maximum rotational quantum number
/// temp: f64: temperature (K)
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rovib {
    pub label: String,
    pub b: f64,
    pub d: f64,
    pub nue: f64,
    pub xe: f64,
    pub alfae: f64,
    pub jmax: usize,
    #[serde(default = "default::temp")]
    pub temp: f64,
}

impl Rovib {
    /// construct a `Rovib` at the default temperature. the result is not
    /// validated, see [Rovib::validate]
    pub fn new(
        label: impl Into<String>,
        b: f64,
        d: f64,
        nue: f64,
        xe: f64,
        alfae: f64,
        jmax: usize,
    ) -> Self {
        Self {
            label: label.into(),
            b,
            d,
            nue,
            xe,
            alfae,
            jmax,
            ..Self::default()
        }
    }

    /// return a copy of `self` at temperature `temp` in K
    pub fn with_temp(self, temp: f64) -> Self {
        Self { temp, ..self }
    }

    /// kT in cm-1
    pub fn kt(&self) -> f64 {
        consts::KB * self.temp
    }

    /// the block of spectroscopic constants used to annotate a plot of the
    /// spectrum
    pub fn annotation(&self) -> String {
        format!(
            "B = {} cm-1\nD = {} cm-1\nnue = {} cm-1\nxe = {}\nalfae = {} cm-1",
            self.b, self.d, self.nue, self.xe, self.alfae
        )
    }
}
