use std::env;
use std::str::FromStr;

use anyhow::anyhow;

/// What `GET /animals/{id}` answers when no row matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingAnimalPolicy {
    /// `200` with `{"Id":0,"Name":""}`.
    #[default]
    ZeroValue,
    /// `404` with an error message.
    NotFound,
}

impl FromStr for MissingAnimalPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero-value" | "zero_value" => Ok(Self::ZeroValue),
            "not-found" | "not_found" => Ok(Self::NotFound),
            other => Err(anyhow!(
                "MISSING_ANIMAL_POLICY must be `zero-value` or `not-found`, got `{other}`"
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AnimalsConfig {
    pub missing: MissingAnimalPolicy,
}

impl AnimalsConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing = lookup("MISSING_ANIMAL_POLICY")
            .map(|raw| raw.parse::<MissingAnimalPolicy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { missing })
    }
}
