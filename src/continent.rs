//! Continent selection and factory dispatch.

use crate::factory::{AfricaFactory, AmericaFactory, ContinentFactory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The supported continents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Continent {
    Africa,
    America,
}

impl Continent {
    /// All supported continents, in canonical demonstration order
    pub fn all() -> [Continent; 2] {
        [Continent::Africa, Continent::America]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::America => "America",
        }
    }

    /// Build this continent's animal factory.
    ///
    /// This is the single point where an abstract continent becomes a
    /// concrete factory; everything downstream depends only on the
    /// [`ContinentFactory`] trait.
    pub fn factory(&self) -> Box<dyn ContinentFactory> {
        match self {
            Continent::Africa => Box::new(AfricaFactory),
            Continent::America => Box::new(AmericaFactory),
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown continent name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContinentError {
    /// The name that failed to parse
    pub name: String,
}

impl fmt::Display for ParseContinentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown continent '{}', expected one of: africa, america",
            self.name
        )
    }
}

impl std::error::Error for ParseContinentError {}

impl FromStr for Continent {
    type Err = ParseContinentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "africa" => Ok(Continent::Africa),
            "america" => Ok(Continent::America),
            _ => Err(ParseContinentError {
                name: s.to_string(),
            }),
        }
    }
}
