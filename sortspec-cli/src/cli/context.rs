//! Merging profiles with command line flags

use indexmap::IndexMap;
use sortspec_core::{Flavor, ParseOptions, ValueKind};

use crate::config::{ConfigLoadError, SortConfig};

/// Command line overrides applied on top of a profile.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--flavor`
    pub flavor: Option<Flavor>,
    /// `--allow`, replacing the profile's allow-list
    pub allow: Option<Vec<String>>,
    /// `--kind` assignments, applied after the profile's kinds
    pub kinds: Vec<(String, ValueKind)>,
}

/// Everything a command needs to parse and sort: parse options plus the
/// value kind of each field.
#[derive(Debug, Clone, Default)]
pub struct SortContext {
    /// Options handed to the parser
    pub options: ParseOptions,
    /// Declared kind per field
    pub kinds: IndexMap<String, ValueKind>,
}

impl SortContext {
    /// Merge an optional config profile with command line overrides.
    /// Flags win over the profile, the profile wins over the file level
    /// flavor.
    pub fn resolve(
        config: Option<&SortConfig>,
        profile: Option<&str>,
        overrides: Overrides,
    ) -> Result<Self, ConfigLoadError> {
        let profile = match (config, profile) {
            (Some(config), Some(name)) => Some(config.profile(name)?),
            (None, Some(name)) => {
                return Err(ConfigLoadError::Invalid(format!(
                    "profile `{name}` requested but no config file was given"
                )));
            }
            (_, None) => None,
        };

        let flavor = overrides.flavor.unwrap_or_else(|| match config {
            Some(config) => config.flavor_for(profile),
            None => Flavor::default(),
        });

        let (mut options, mut kinds) = match profile {
            Some(profile) => {
                (profile.parse_options(flavor), profile.kinds.clone())
            }
            None => (ParseOptions::new().flavor(flavor), IndexMap::new()),
        };

        if let Some(allow) = overrides.allow {
            options = options.allow(allow);
        }
        kinds.extend(overrides.kinds);

        Ok(Self { options, kinds })
    }

    /// Declared kind of `field`, `string` when undeclared
    pub fn kind_of(&self, field: &str) -> ValueKind {
        self.kinds.get(field).copied().unwrap_or_default()
    }
}

/// Parse a `field=kind` flag value.
pub fn parse_kind_assignment(raw: &str) -> Result<(String, ValueKind), String> {
    let (field, kind) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=KIND, got `{raw}`"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in `{raw}`"));
    }
    let kind = kind.trim().parse::<ValueKind>().map_err(|err| err.to_string())?;
    Ok((field.to_string(), kind))
}
