//! Derivation of environment keys from worker setting names.

use serde_json::{Map, Value};
use tracing::debug;

/// Upper-case `key` and prepend `prefix`.
///
/// Upper-casing is Unicode-aware, so a key may grow (`ß` becomes `SS`).
pub fn derive_key(prefix: &str, key: &str) -> String {
    let upper = key.to_uppercase();
    let mut derived = String::with_capacity(prefix.len() + upper.len());
    derived.push_str(prefix);
    derived.push_str(&upper);
    derived
}

/// Build the environment map for `input`, values copied unchanged.
///
/// Keys that collide after upper-casing resolve last-write-wins: the later
/// value replaces the earlier one, which keeps its original position.
pub fn environment_from(input: &Map<String, Value>, prefix: &str) -> Map<String, Value> {
    let mut environment = Map::with_capacity(input.len());

    for (key, value) in input {
        let derived = derive_key(prefix, key);
        debug!(key = %key, derived = %derived, "derived environment key");

        if environment.insert(derived, value.clone()).is_some() {
            debug!(key = %key, "environment key collision, keeping later value");
        }
    }

    environment
}
