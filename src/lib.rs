//! # FAUNA
//!
//! Textbook Abstract Factory demonstration: continent factories produce
//! matched herbivore/carnivore pairs, and an animal world runs the food
//! chain between them.
//!
//! ## Features
//!
//! - **Family-consistent**: each factory hardcodes one continent's
//!   herbivore/carnivore pair
//! - **Polymorphic**: the world depends only on capability traits, never
//!   on concrete species
//! - **Deterministic**: no randomness, no state; the same scenario always
//!   reports the same line
//! - **Configurable runs**: YAML configuration selects which continents
//!   to demonstrate
//!
//! ## Quick Start
//!
//! ```rust
//! use fauna::{AnimalWorld, Continent};
//!
//! let factory = Continent::Africa.factory();
//! let world = AnimalWorld::new(factory.as_ref());
//! assert_eq!(world.run_food_chain(), "Lion eats Wildebeest");
//! ```
//!
//! ## Scenario selection
//!
//! ```rust
//! use fauna::Config;
//!
//! let mut config = Config::default();
//! config.scenarios.truncate(1); // Africa only
//! assert!(config.validate().is_ok());
//! ```

pub mod animals;
pub mod config;
pub mod continent;
pub mod factory;
pub mod world;

// Re-export main types
pub use config::Config;
pub use continent::Continent;
pub use factory::ContinentFactory;
pub use world::AnimalWorld;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one continent's food chain scenario and return the report line
pub fn run_scenario(continent: Continent) -> String {
    let factory = continent.factory();
    let world = AnimalWorld::new(factory.as_ref());
    world.run_food_chain()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_run_scenario() {
        assert_eq!(run_scenario(Continent::Africa), "Lion eats Wildebeest");
        assert_eq!(run_scenario(Continent::America), "Wolf eats Bison");
    }

    #[test]
    fn test_scenario_per_default_config() {
        let lines: Vec<String> = Config::default()
            .scenarios
            .into_iter()
            .map(run_scenario)
            .collect();

        assert_eq!(lines, vec!["Lion eats Wildebeest", "Wolf eats Bison"]);
    }
}
