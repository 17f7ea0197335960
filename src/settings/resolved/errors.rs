use thiserror::Error;

use super::SettingSource;
use crate::settings::sources::env_var_for;

/// A setting that parsed but cannot be used, with where it came from and how
/// to override it.
#[derive(Debug, Error)]
#[error(
	"invalid value for {key} from {origin}: {reason} (value: {value}); override with `{}` or `--{}`",
	env_var_for(.key),
	flag_for(.key)
)]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid<K, V, R>(key: K, value: V, origin: SettingSource, reason: R) -> Self
	where
		K: Into<&'static str>,
		V: Into<String>,
		R: Into<String>,
	{
		Self {
			key: key.into(),
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

/// CLI flag for a dotted key: the last segment, kebab-cased.
fn flag_for(key: &str) -> String {
	key.rsplit('.').next().unwrap_or(key).replace('_', "-")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_every_way_to_fix_the_value() {
		let err = ConfigError::invalid(
			"search.timeout_ms",
			"0",
			SettingSource::ConfigKey("search.timeout_ms"),
			"must be greater than zero",
		);
		assert_eq!(
			err.to_string(),
			"invalid value for search.timeout_ms from configuration key `search.timeout_ms`: \
			 must be greater than zero (value: 0); override with \
			 `DATALAB_SEARCH__SEARCH__TIMEOUT_MS` or `--timeout-ms`"
		);
	}
}
