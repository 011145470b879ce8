pub mod campaign;
pub mod config;
pub mod doses;
pub mod error;
pub mod population;
pub mod prelude;
pub mod reporter;
pub mod sampler;
pub mod sets;
pub use crate::campaign::Campaign;
pub use crate::config::Config;
pub use crate::error::CampaignError;
pub use crate::sampler::{AnySampler, IndexSampler, RejectionSampler, Sampler};
pub use crate::sets::DerivedSets;

/// Opaque label of a single member of the population, e.g. "Citizen 42".
pub type Identity = String;

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;

/// Number of doses received by a vaccinated citizen. Only 1 and 2 are used.
pub type Dose = u8;
