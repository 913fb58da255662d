//! Carnivore capability and its concrete species.

use super::herbivore::Herbivore;

/// A predator - the consumer side of the food chain.
///
/// Eating is a pure reporting action: it cannot fail and mutates nothing,
/// it only describes which species consumed which.
pub trait Carnivore {
    /// Species name used in food-chain reports
    fn species(&self) -> &'static str;

    /// Consume the prey, returning the report line (e.g. "Lion eats Wildebeest")
    fn eat(&self, prey: &dyn Herbivore) -> String;
}

/// The African carnivore
#[derive(Clone, Copy, Debug, Default)]
pub struct Lion;

impl Carnivore for Lion {
    fn species(&self) -> &'static str {
        "Lion"
    }

    fn eat(&self, prey: &dyn Herbivore) -> String {
        format!("{} eats {}", self.species(), prey.species())
    }
}

/// The American carnivore
#[derive(Clone, Copy, Debug, Default)]
pub struct Wolf;

impl Carnivore for Wolf {
    fn species(&self) -> &'static str {
        "Wolf"
    }

    fn eat(&self, prey: &dyn Herbivore) -> String {
        format!("{} eats {}", self.species(), prey.species())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animals::herbivore::{Bison, Wildebeest};

    #[test]
    fn test_species_names() {
        assert_eq!(Lion.species(), "Lion");
        assert_eq!(Wolf.species(), "Wolf");
    }

    #[test]
    fn test_eat_reports_both_species() {
        assert_eq!(Lion.eat(&Wildebeest), "Lion eats Wildebeest");
        assert_eq!(Wolf.eat(&Bison), "Wolf eats Bison");
    }

    #[test]
    fn test_eat_is_repeatable() {
        // Eating mutates nothing, so the report never changes
        let lion = Lion;
        let first = lion.eat(&Wildebeest);
        let second = lion.eat(&Wildebeest);
        assert_eq!(first, second);
    }

    #[test]
    fn test_eat_accepts_any_herbivore() {
        // The capability couples predator to the Herbivore trait, not to a
        // continent; pairing is the factories' contract, not the type system's
        assert_eq!(Lion.eat(&Bison), "Lion eats Bison");
        assert_eq!(Wolf.eat(&Wildebeest), "Wolf eats Wildebeest");
    }
}
