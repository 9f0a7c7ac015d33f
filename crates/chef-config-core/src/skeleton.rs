//! The fixed chef document that wraps the worker environment.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Derived key to original value.
pub type Environment = Map<String, Value>;

/// Chef node configuration: `{ run_list, travis: { worker: { environment } } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChefConfig {
    pub run_list: Vec<String>,
    pub travis: TravisAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravisAttributes {
    pub worker: WorkerAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerAttributes {
    pub environment: Environment,
}

impl ChefConfig {
    pub fn new(recipe: impl Into<String>, environment: Environment) -> Self {
        Self {
            run_list: vec![recipe.into()],
            travis: TravisAttributes {
                worker: WorkerAttributes { environment },
            },
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.travis.worker.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skeleton_shape() {
        let config = ChefConfig::new("recipe[travis_go_worker]", Map::new());
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(
            value,
            json!({
                "run_list": ["recipe[travis_go_worker]"],
                "travis": { "worker": { "environment": {} } }
            })
        );
    }

    #[test]
    fn test_run_list_serialized_first() {
        let config = ChefConfig::new("recipe[travis_go_worker]", Map::new());
        let text = serde_json::to_string(&config).unwrap();
        assert!(text.starts_with("{\"run_list\":"));
    }
}
