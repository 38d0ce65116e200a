use std::{
    fmt::Debug,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use log::warn;
use thiserror::Error;

use crate::{consts::TEMP, Rovib};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing {0} section")]
    MissingSection(&'static str),

    #[error("wrong number of constants. found {found} expected 5")]
    ConstantCount { found: usize },

    #[error("failed to parse '{value}' in {section} section")]
    Parse {
        section: &'static str,
        value: String,
    },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("jmax must be at least 1, got {0}")]
    JMax(usize),

    #[error("temperature must be positive, got {0}")]
    Temp(f64),

    #[error("rotational term of J = {j} is negative ({frot} cm-1), lower jmax")]
    NegativeFrot { j: usize, frot: f64 },
}

impl Rovib {
    /// load a keyword-sectioned input file like
    /// ```text
    /// # MOLECULE #############
    /// HCl
    /// # CONSTANTS #############
    /// 10.59341 5.3194e-4 2990.9463 0.01741 0.307181
    /// # JMAX #############
    /// 20
    /// ```
    /// with an optional `TEMP` section. section headers are lines starting
    /// with `#` and containing the section name. the constants are B, D, nue, xe, and
    /// alfae, in that order
    pub fn load<P>(filename: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path> + Debug,
    {
        let f = File::open(filename)?;
        let ret = read(BufReader::new(f))?;
        ret.validate()?;
        Ok(ret)
    }

    /// load a JSON input file with the same field names as [Rovib]
    pub fn load_json<P>(filename: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path> + Debug,
    {
        let f = File::open(filename)?;
        let ret: Self = serde_json::from_reader(BufReader::new(f))?;
        ret.validate()?;
        Ok(ret)
    }

    /// check that `self` describes a usable molecule: every constant finite,
    /// at least one P and R line, a positive temperature, and rotational
    /// levels up to jmax whose term values stay non-negative so the partition
    /// function stays finite
    pub fn validate(&self) -> Result<(), LoadError> {
        for (name, value) in [
            ("B", self.b),
            ("D", self.d),
            ("nue", self.nue),
            ("xe", self.xe),
            ("alfae", self.alfae),
            ("temp", self.temp),
        ] {
            if !value.is_finite() {
                return Err(LoadError::NonFinite { name, value });
            }
        }
        if self.jmax < 1 {
            return Err(LoadError::JMax(self.jmax));
        }
        if self.temp <= 0.0 {
            return Err(LoadError::Temp(self.temp));
        }
        // large D flips the distortion term negative at high J
        if let Some(j) = (0..=self.jmax).find(|&j| self.frot(j) < 0.0) {
            return Err(LoadError::NegativeFrot {
                j,
                frot: self.frot(j),
            });
        }
        if self.temp != TEMP {
            warn!("using non-default temperature of {} K", self.temp);
        }
        Ok(())
    }
}

fn parse<T: FromStr>(section: &'static str, s: &str) -> Result<T, LoadError> {
    s.parse().map_err(|_| LoadError::Parse {
        section,
        value: s.to_owned(),
    })
}

/// read the sections of an input file into a `Rovib`, without validating
/// the values
pub(crate) fn read<R: BufRead>(reader: R) -> Result<Rovib, LoadError> {
    enum State {
        Molecule,
        Constants,
        JMax,
        Temp,
        None,
    }
    let mut state = State::None;
    let mut label: Option<String> = None;
    let mut constants = Vec::new();
    let mut jmax: Option<usize> = None;
    let mut ret = Rovib::default();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        } else if trimmed.starts_with('#') {
            // section headers start with #, anything else is data
            if line.contains("MOLECULE") {
                state = State::Molecule;
            } else if line.contains("CONSTANTS") {
                state = State::Constants;
            } else if line.contains("JMAX") {
                state = State::JMax;
            } else if line.contains("TEMP") {
                state = State::Temp;
            } else {
                state = State::None;
            }
        } else {
            match state {
                State::Molecule => label = Some(trimmed.to_owned()),
                State::Constants => {
                    for s in trimmed.split_whitespace() {
                        constants.push(parse::<f64>("CONSTANTS", s)?);
                    }
                }
                State::JMax => jmax = Some(parse("JMAX", trimmed)?),
                State::Temp => ret.temp = parse("TEMP", trimmed)?,
                State::None => (),
            }
        }
    }
    ret.label = label.ok_or(LoadError::MissingSection("MOLECULE"))?;
    ret.jmax = jmax.ok_or(LoadError::MissingSection("JMAX"))?;
    match constants.as_slice() {
        [] => return Err(LoadError::MissingSection("CONSTANTS")),
        &[b, d, nue, xe, alfae] => {
            ret.b = b;
            ret.d = d;
            ret.nue = nue;
            ret.xe = xe;
            ret.alfae = alfae;
        }
        _ => {
            return Err(LoadError::ConstantCount {
                found: constants.len(),
            })
        }
    }
    Ok(ret)
}
