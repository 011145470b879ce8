use crate::{error::CampaignError, Identity};
use log::*;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// The sampler trait defines how the citizens that received a given vaccine
/// brand are selected from the population.
pub trait Sampler {
    /// Return a set of k distinct citizens drawn uniformly from population.
    ///
    /// Fails with an invalid argument error if k is larger than the
    /// population. Labels in population are assumed to be unique.
    fn sample(
        &self,
        population: &[Identity],
        k: usize,
        rng: &mut impl Rng,
    ) -> Result<BTreeSet<Identity>, CampaignError>;
}

/// Draw k distinct citizens using the default rejection strategy.
pub fn sample(
    population: &[Identity],
    k: usize,
    rng: &mut impl Rng,
) -> Result<BTreeSet<Identity>, CampaignError> {
    RejectionSampler.sample(population, k, rng)
}

fn check_request(population: &[Identity], k: usize) -> Result<(), CampaignError> {
    if k > population.len() {
        return Err(CampaignError::InvalidArgument(format!(
            "sample size must be between 0 and the population size ({}), got {}",
            population.len(),
            k
        )));
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// CONCRETE IMPLEMENTATIONS
////////////////////////////////////////////////////////////////////////////////

/// Draws uniform indexes and rejects repeats until k distinct citizens were
/// selected.
///
/// Needs about k draws when k is much smaller than the population, but
/// degrades quickly as k approaches the population size.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RejectionSampler;

impl Sampler for RejectionSampler {
    fn sample(
        &self,
        population: &[Identity],
        k: usize,
        rng: &mut impl Rng,
    ) -> Result<BTreeSet<Identity>, CampaignError> {
        check_request(population, k)?;
        let n = population.len();
        let mut ids = HashSet::with_capacity(k);
        let mut draws = 0;

        while ids.len() < k {
            ids.insert(rng.gen_range(0..n));
            draws += 1;
        }
        trace!("rejection sampler: {} draws for k={}, n={}", draws, k, n);
        return Ok(ids.into_iter().map(|i| population[i].clone()).collect());
    }
}

/// Selects k distinct indexes in a single pass with `rand::seq::index`.
///
/// Cost does not depend on how close k is to the population size. It
/// consumes the random stream differently from `RejectionSampler`, so the
/// same seed selects different citizens.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct IndexSampler;

impl Sampler for IndexSampler {
    fn sample(
        &self,
        population: &[Identity],
        k: usize,
        rng: &mut impl Rng,
    ) -> Result<BTreeSet<Identity>, CampaignError> {
        check_request(population, k)?;
        let ids = rand::seq::index::sample(rng, population.len(), k);
        return Ok(ids.into_iter().map(|i| population[i].clone()).collect());
    }
}

/// Sampling strategy names accepted in configuration files.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMethod {
    Rejection,
    Index,
}

impl Default for SamplingMethod {
    fn default() -> Self {
        SamplingMethod::Rejection
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnySampler {
    Rejection(RejectionSampler),
    Index(IndexSampler),
}

impl Default for AnySampler {
    fn default() -> Self {
        AnySampler::Rejection(RejectionSampler)
    }
}

impl Sampler for AnySampler {
    fn sample(
        &self,
        population: &[Identity],
        k: usize,
        rng: &mut impl Rng,
    ) -> Result<BTreeSet<Identity>, CampaignError> {
        match self {
            AnySampler::Rejection(s) => s.sample(population, k, rng),
            AnySampler::Index(s) => s.sample(population, k, rng),
        }
    }
}

impl From<RejectionSampler> for AnySampler {
    fn from(sampler: RejectionSampler) -> AnySampler {
        AnySampler::Rejection(sampler)
    }
}

impl From<IndexSampler> for AnySampler {
    fn from(sampler: IndexSampler) -> AnySampler {
        AnySampler::Index(sampler)
    }
}

impl From<SamplingMethod> for AnySampler {
    fn from(method: SamplingMethod) -> AnySampler {
        match method {
            SamplingMethod::Rejection => RejectionSampler.into(),
            SamplingMethod::Index => IndexSampler.into(),
        }
    }
}
