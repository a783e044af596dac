//! Profile file models

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sortspec_core::{
    AllowFields, Flavor, ParseOptions, ValueKind, parse_sort,
};

use super::error::ConfigLoadError;

/// Top level of a sort profile file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    /// Flavor used by profiles that do not set their own.
    pub flavor: Option<Flavor>,
    /// Profiles by name
    pub profiles: BTreeMap<String, Profile>,
}

impl SortConfig {
    /// Profile called `name`
    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigLoadError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigLoadError::UnknownProfile(name.to_string()))
    }

    /// Flavor for `profile`, falling back to the file level flavor and
    /// then to mongo.
    pub fn flavor_for(&self, profile: Option<&Profile>) -> Flavor {
        profile
            .and_then(|p| p.flavor)
            .or(self.flavor)
            .unwrap_or_default()
    }

    /// Reject profiles whose default sort names fields outside their
    /// allow-list.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        for (name, profile) in &self.profiles {
            profile.validate().map_err(|field| {
                ConfigLoadError::Invalid(format!(
                    "profile `{name}` default sort uses disallowed `{field}`"
                ))
            })?;
        }
        Ok(())
    }
}

/// Named sorting setup for one kind of resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Overrides the file level flavor
    pub flavor: Option<Flavor>,
    /// Fields a sort string may use; every field when unset
    pub allow_fields: Option<Vec<String>>,
    /// Sort string used when the caller gives none
    pub default_sort: Option<String>,
    /// Value kind per field for in-memory sorting
    pub kinds: IndexMap<String, ValueKind>,
}

impl Profile {
    /// The allow-list as a lookup set
    pub fn allow_list(&self) -> Option<AllowFields> {
        self.allow_fields
            .as_ref()
            .map(|fields| fields.iter().cloned().collect())
    }

    /// Parse options for this profile. The default sort is parsed without
    /// an allow-list so that it is kept as written.
    pub fn parse_options(&self, flavor: Flavor) -> ParseOptions {
        let mut options = ParseOptions::new().flavor(flavor);
        options.allow_fields = self.allow_list();
        if let Some(default_sort) = self.default_sort.as_deref() {
            let defaults = parse_sort(
                Some(default_sort),
                &ParseOptions::new().flavor(flavor),
            );
            options = options.defaults(defaults);
        }
        options
    }

    /// Declared kind of `field`, `string` when undeclared
    pub fn kind_of(&self, field: &str) -> ValueKind {
        self.kinds.get(field).copied().unwrap_or_default()
    }

    fn validate(&self) -> Result<(), String> {
        let (Some(allow), Some(default_sort)) =
            (self.allow_list(), self.default_sort.as_deref())
        else {
            return Ok(());
        };
        let defaults = parse_sort(Some(default_sort), &ParseOptions::new());
        match defaults.fields().find(|field| !allow.allows(field)) {
            Some(field) => Err(field.to_string()),
            None => Ok(()),
        }
    }
}
