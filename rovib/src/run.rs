use log::info;

use crate::{Output, Rovib, Sampling, Spectrum};

impl Rovib {
    /// run the full pipeline with the default stepped sampling
    pub fn run(&self) -> Output {
        self.run_with(Sampling::default())
    }

    /// generate the transitions and their weights, then synthesize the
    /// spectrum with `sampling`
    pub fn run_with(&self, sampling: Sampling) -> Output {
        let qrot = self.qrot();
        let transitions = self.transitions();
        info!(
            "generated {} transitions for {} with qrot = {qrot:.8}",
            transitions.len(),
            self.label
        );
        let spectrum = Spectrum::from_transitions(&transitions, sampling);
        Output {
            input: self.clone(),
            qrot,
            transitions,
            spectrum,
        }
    }
}
