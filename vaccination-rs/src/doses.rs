use crate::{Dose, Identity, Real};
use rand::Rng;
use std::{collections::BTreeMap, fmt};

/// Doses needed to complete the vaccination scheme.
pub const FULL_SCHEME: Dose = 2;

/// Vaccine brand applied to a citizen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Brand {
    Pfizer,
    AstraZeneca,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::Pfizer, Brand::AstraZeneca];

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Brand::Pfizer => "Pfizer",
            Brand::AstraZeneca => "AstraZeneca",
        }
    }

    /// Lowercase name used to build file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Brand::Pfizer => "pfizer",
            Brand::AstraZeneca => "astrazeneca",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of doses received by each vaccinated citizen.
pub type DoseTable = BTreeMap<Identity, Dose>;

/// Assign 1 or 2 doses to each vaccinated citizen.
///
/// One uniform value in [0, 1) is drawn per citizen, in iteration order, and
/// the citizen completes the scheme if it falls below prob_complete.
pub fn assign_doses<'a, I>(vaccinated: I, prob_complete: Real, rng: &mut impl Rng) -> DoseTable
where
    I: IntoIterator<Item = &'a Identity>,
{
    vaccinated
        .into_iter()
        .map(|id| {
            let dose = if rng.gen::<Real>() < prob_complete {
                FULL_SCHEME
            } else {
                1
            };
            (id.clone(), dose)
        })
        .collect()
}
