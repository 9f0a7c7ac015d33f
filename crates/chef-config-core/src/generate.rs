//! Worker settings in, chef config out.

use crate::config::GenerateOptions;
use crate::error::GenerateError;
use crate::keys::environment_from;
use crate::skeleton::ChefConfig;
use serde_json::Value;
use tracing::debug;

/// Build the chef config for a parsed settings document.
///
/// `input` must be a JSON object; anything else is rejected before any
/// output is built.
pub fn generate(input: &Value, options: &GenerateOptions) -> Result<ChefConfig, GenerateError> {
    let settings = input.as_object().ok_or(GenerateError::NotAnObject {
        found: json_kind(input),
    })?;

    let environment = environment_from(settings, &options.env_prefix);
    debug!(
        settings = settings.len(),
        environment = environment.len(),
        "built worker environment"
    );

    Ok(ChefConfig::new(options.recipe.clone(), environment))
}

/// Parse `input` as JSON, then [`generate`].
pub fn generate_from_str(
    input: &str,
    options: &GenerateOptions,
) -> Result<ChefConfig, GenerateError> {
    let value: Value = serde_json::from_str(input)?;
    generate(&value, options)
}

/// Render `config` as 2-space indented JSON, without a trailing newline.
pub fn to_pretty_json(config: &ChefConfig) -> Result<String, GenerateError> {
    Ok(serde_json::to_string_pretty(config)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
