mod settings;

use config::{Config, ConfigError, Environment, File};

pub use settings::Settings;

#[cfg(test)]
mod tests;

/// Loads the configuration from the environment (plus an optional
/// `config/default` file, which the environment overrides).
///
/// All five run parameters are required; a missing or unparsable value is
/// reported as a `ConfigError` so the process can fail fast before touching
/// the broker. The indefinite-run flag in particular is parsed as a strict
/// boolean — the literal string `"false"` disables it, and anything that is
/// not a boolean is a configuration error rather than silently truthy.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().try_parsing(true));

    let config = builder.build()?;

    // Deserialization alone would coerce values like "yes" or "1" into a
    // bool, so the flag is checked against the literal strings first.
    let raw_flag = config.get_string("producer_produce_indefinitely")?;
    if raw_flag != "true" && raw_flag != "false" {
        return Err(ConfigError::Message(format!(
            "PRODUCER_PRODUCE_INDEFINITELY must be \"true\" or \"false\", got {raw_flag:?}"
        )));
    }

    let settings: Settings = config.try_deserialize()?;

    if settings.producer_batch_size == 0 {
        return Err(ConfigError::Message(
            "PRODUCER_BATCH_SIZE must be greater than zero".into(),
        ));
    }

    Ok(settings)
}
