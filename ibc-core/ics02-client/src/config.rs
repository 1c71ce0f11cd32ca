use core::time::Duration;

use typed_builder::TypedBuilder;

/// Two weeks, the trusting period ceiling most Cosmos SDK hosts run with.
pub const DEFAULT_MAX_TRUSTING_PERIOD: Duration = Duration::from_secs(14 * 24 * 60 * 60);

pub const DEFAULT_PRUNE_LIMIT: usize = 16;

/// Host-chosen parameters of the registry.
///
/// ```
/// # use core::time::Duration;
/// # use ibc_core_client::RegistryConfig;
/// let config = RegistryConfig::builder()
///     .max_trusting_period(Duration::from_secs(3600))
///     .build();
/// assert_eq!(config.prune_limit, 16);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct RegistryConfig {
    /// Upper bound on the trusting period a new client may declare.
    #[builder(default = DEFAULT_MAX_TRUSTING_PERIOD)]
    pub max_trusting_period: Duration,
    /// Maximum number of heights one prune call removes.
    #[builder(default = DEFAULT_PRUNE_LIMIT)]
    pub prune_limit: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
