use crate::{error::CampaignError, sampler::SamplingMethod, Real};
use getset::{CopyGetters, Getters, Setters};
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default name of the optional configuration file read by the `campaign`
/// binary.
pub const CONFIG_FILE: &str = "campaign.toml";

/// Parameters of a simulated vaccination campaign.
///
/// Every field has a compiled-in default, so an empty (or missing) TOML file
/// reproduces the reference run: 500 citizens, 75 doses of each brand, 60% of
/// vaccinated citizens completing the scheme and seed 12345.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, CopyGetters, Getters, Setters)]
#[serde(default)]
pub struct Config {
    #[getset(get_copy = "pub", set = "pub")]
    pop_size: usize,
    #[getset(get_copy = "pub", set = "pub")]
    pfizer_count: usize,
    #[getset(get_copy = "pub", set = "pub")]
    astrazeneca_count: usize,
    /// Probability that a vaccinated citizen received both doses.
    #[getset(get_copy = "pub", set = "pub")]
    prob_complete: Real,
    /// Maximum number of members shown for each derived set in the console.
    #[getset(get_copy = "pub", set = "pub")]
    print_limit: usize,
    #[getset(get_copy = "pub", set = "pub")]
    seed: u64,
    #[getset(get_copy = "pub", set = "pub")]
    sampling: SamplingMethod,
    #[getset(get = "pub", set = "pub")]
    output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pop_size: 500,
            pfizer_count: 75,
            astrazeneca_count: 75,
            prob_complete: 0.6,
            print_limit: 20,
            seed: 12345,
            sampling: SamplingMethod::Rejection,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string. Missing keys take their
    /// default values.
    pub fn from_toml_str(data: &str) -> Result<Self, CampaignError> {
        let cfg: Config = toml::from_str(data)?;
        cfg.validate()?;
        return Ok(cfg);
    }

    /// Read configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CampaignError> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// Read configuration from path if the file exists, otherwise fall back to
    /// the compiled-in defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, CampaignError> {
        let path = path.as_ref();
        if path.exists() {
            info!("reading configuration from {}", path.display());
            Self::load(path)
        } else {
            debug!("{} not found, using default configuration", path.display());
            Ok(Self::default())
        }
    }

    /// Check values that deserialization alone cannot rule out.
    ///
    /// Sample sizes are checked by the sampler itself, since they only make
    /// sense against a concrete population.
    pub fn validate(&self) -> Result<(), CampaignError> {
        if !(0.0..=1.0).contains(&self.prob_complete) {
            return Err(CampaignError::InvalidArgument(format!(
                "prob_complete must be in [0, 1], got {}",
                self.prob_complete
            )));
        }
        Ok(())
    }
}
