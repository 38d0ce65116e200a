/// boltzmann's constant in cm-1/K
pub const KB: f64 = 0.69503;

/// temperature in K
pub const TEMP: f64 = 10.0;

/// full width at half maximum of each Lorentzian line (cm-1)
pub const SIGMA: f64 = 1.0;

/// number of sampling steps across the spectrum window. one more sample than
/// this is emitted
pub const NPUNTOS: usize = 10000;

/// fractional correction applied to each step of the stepped sampling rule
pub const WA: f64 = 0.01;

/// padding added below the lowest and above the highest transition (cm-1)
pub const PAD: f64 = 20.0;

/// default name of the file the spectrum is written to
pub const DATA_FILE: &str = "data";
