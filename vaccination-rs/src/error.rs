use std::fmt::{self, Display};
use std::io;

/// Errors raised while configuring, running or exporting a campaign.
#[derive(Debug)]
pub enum CampaignError {
    Io(io::Error),
    Csv(csv::Error),
    Toml(toml::de::Error),
    /// A request that can never be satisfied, like sampling more citizens
    /// than the population holds.
    InvalidArgument(String),
}

impl From<io::Error> for CampaignError {
    fn from(error: io::Error) -> Self {
        CampaignError::Io(error)
    }
}

impl From<csv::Error> for CampaignError {
    fn from(error: csv::Error) -> Self {
        CampaignError::Csv(error)
    }
}

impl From<toml::de::Error> for CampaignError {
    fn from(error: toml::de::Error) -> Self {
        CampaignError::Toml(error)
    }
}

impl std::error::Error for CampaignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CampaignError::Io(e) => Some(e),
            CampaignError::Csv(e) => Some(e),
            CampaignError::Toml(e) => Some(e),
            CampaignError::InvalidArgument(_) => None,
        }
    }
}

impl Display for CampaignError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CampaignError::Io(e) => write!(f, "{}", e),
            CampaignError::Csv(e) => write!(f, "{}", e),
            CampaignError::Toml(e) => write!(f, "invalid configuration: {}", e),
            CampaignError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}
