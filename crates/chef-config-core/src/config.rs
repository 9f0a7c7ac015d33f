//! Options for chef config generation.

use serde::{Deserialize, Serialize};

/// Prefix prepended to every derived environment key.
pub const DEFAULT_ENV_PREFIX: &str = "TRAVIS_";

/// The single recipe the worker node runs.
pub const DEFAULT_RECIPE: &str = "recipe[travis_go_worker]";

/// Options for [`crate::generate`].
///
/// Fields are serialized in `kebab-case` (`env-prefix`, `recipe`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GenerateOptions {
    /// Prepended to each upper-cased input key. Default: `TRAVIS_`.
    pub env_prefix: String,
    /// Sole entry of the emitted `run_list`.
    pub recipe: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            recipe: DEFAULT_RECIPE.to_string(),
        }
    }
}
