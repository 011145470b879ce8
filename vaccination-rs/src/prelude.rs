pub use crate::{
    campaign::Campaign,
    config::{Config, CONFIG_FILE},
    doses::{assign_doses, Brand, DoseTable, FULL_SCHEME},
    error::CampaignError,
    population::new_population,
    reporter::{simple_campaign, write_csv, Report},
    sampler::{sample, AnySampler, IndexSampler, RejectionSampler, Sampler, SamplingMethod},
    sets::{DerivedSets, SetKind},
    Dose, Identity, Real,
};
pub use rand::prelude::{Rng, SeedableRng, SmallRng};
