use crate::{
    config::Config,
    doses::{assign_doses, Brand, DoseTable},
    error::CampaignError,
    population::new_population,
    sampler::{AnySampler, Sampler},
    sets::DerivedSets,
    Identity,
};
use getset::Getters;
use log::*;
use rand::prelude::{Rng, SeedableRng, SmallRng};
use std::collections::BTreeSet;

/// Result of a simulated vaccination campaign: who received each brand and
/// how many doses every vaccinated citizen got.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Campaign {
    population: Vec<Identity>,
    pfizer: BTreeSet<Identity>,
    astrazeneca: BTreeSet<Identity>,
    doses: DoseTable,
}

impl Campaign {
    /// Run campaign from configuration, drawing all randomness from rng.
    ///
    /// Randomness is consumed in a fixed order: Pfizer sample, AstraZeneca
    /// sample, then one dose draw per vaccinated citizen in ascending label
    /// order. Results are therefore reproducible for a given seed.
    pub fn run(cfg: &Config, rng: &mut impl Rng) -> Result<Self, CampaignError> {
        cfg.validate()?;
        let population = new_population(cfg.pop_size());
        let sampler = AnySampler::from(cfg.sampling());

        let pfizer = sampler.sample(&population, cfg.pfizer_count(), rng)?;
        let astrazeneca = sampler.sample(&population, cfg.astrazeneca_count(), rng)?;
        debug!(
            "sampled {} Pfizer and {} AstraZeneca recipients out of {}",
            pfizer.len(),
            astrazeneca.len(),
            population.len()
        );

        let doses = assign_doses(pfizer.union(&astrazeneca), cfg.prob_complete(), rng);
        debug!("assigned doses to {} vaccinated citizens", doses.len());

        return Ok(Campaign {
            population,
            pfizer,
            astrazeneca,
            doses,
        });
    }

    /// Run campaign with a fresh generator seeded from the configuration.
    pub fn from_seed(cfg: &Config) -> Result<Self, CampaignError> {
        let mut rng = SmallRng::seed_from_u64(cfg.seed());
        Self::run(cfg, &mut rng)
    }

    /// Citizens that received at least one dose of the given brand.
    pub fn recipients(&self, brand: Brand) -> &BTreeSet<Identity> {
        match brand {
            Brand::Pfizer => &self.pfizer,
            Brand::AstraZeneca => &self.astrazeneca,
        }
    }

    pub fn derive(&self) -> DerivedSets {
        DerivedSets::derive(&self.population, &self.pfizer, &self.astrazeneca, &self.doses)
    }
}
