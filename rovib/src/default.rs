use crate::{consts::TEMP, Rovib};

impl Default for Rovib {
    fn default() -> Self {
        Self {
            label: Default::default(),
            b: Default::default(),
            d: Default::default(),
            nue: Default::default(),
            xe: Default::default(),
            alfae: Default::default(),
            jmax: 1,
            temp: TEMP,
        }
    }
}

pub(crate) fn temp() -> f64 {
    TEMP
}
