//! Continent factories - family-consistent animal construction.

use crate::animals::{Bison, Carnivore, Herbivore, Lion, Wildebeest, Wolf};
use crate::continent::Continent;

/// Family-consistency contract for animal construction.
///
/// A factory always produces the matched herbivore/carnivore pair of a
/// single continent, so the ecological pairing stays consistent. Both
/// creation operations are total and deterministic: the same factory
/// returns the same species pair on every call. The guarantee is
/// structural - each concrete factory hardcodes its pair - and is never
/// checked at runtime.
pub trait ContinentFactory {
    /// Which continent this factory builds for
    fn continent(&self) -> Continent;

    /// Create the continent's herbivore
    fn create_herbivore(&self) -> Box<dyn Herbivore>;

    /// Create the continent's carnivore
    fn create_carnivore(&self) -> Box<dyn Carnivore>;
}

/// Factory for the African family: Wildebeest and Lion
#[derive(Clone, Copy, Debug, Default)]
pub struct AfricaFactory;

impl ContinentFactory for AfricaFactory {
    fn continent(&self) -> Continent {
        Continent::Africa
    }

    fn create_herbivore(&self) -> Box<dyn Herbivore> {
        Box::new(Wildebeest)
    }

    fn create_carnivore(&self) -> Box<dyn Carnivore> {
        Box::new(Lion)
    }
}

/// Factory for the American family: Bison and Wolf
#[derive(Clone, Copy, Debug, Default)]
pub struct AmericaFactory;

impl ContinentFactory for AmericaFactory {
    fn continent(&self) -> Continent {
        Continent::America
    }

    fn create_herbivore(&self) -> Box<dyn Herbivore> {
        Box::new(Bison)
    }

    fn create_carnivore(&self) -> Box<dyn Carnivore> {
        Box::new(Wolf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_africa_family() {
        let factory = AfricaFactory;
        assert_eq!(factory.continent(), Continent::Africa);
        assert_eq!(factory.create_herbivore().species(), "Wildebeest");
        assert_eq!(factory.create_carnivore().species(), "Lion");
    }

    #[test]
    fn test_america_family() {
        let factory = AmericaFactory;
        assert_eq!(factory.continent(), Continent::America);
        assert_eq!(factory.create_herbivore().species(), "Bison");
        assert_eq!(factory.create_carnivore().species(), "Wolf");
    }

    #[test]
    fn test_creation_is_deterministic() {
        // The same factory yields the same species pair on every call
        for continent in Continent::all() {
            let factory = continent.factory();
            for _ in 0..3 {
                assert_eq!(
                    factory.create_herbivore().species(),
                    factory.create_herbivore().species()
                );
                assert_eq!(
                    factory.create_carnivore().species(),
                    factory.create_carnivore().species()
                );
            }
        }
    }

    #[test]
    fn test_factories_are_independent() {
        // Creating through one factory never affects another
        let africa = AfricaFactory;
        let america = AmericaFactory;

        let _ = america.create_carnivore();
        assert_eq!(africa.create_carnivore().species(), "Lion");
        assert_eq!(america.create_herbivore().species(), "Bison");
    }

    #[test]
    fn test_usable_as_trait_objects() {
        let factories: Vec<Box<dyn ContinentFactory>> =
            vec![Box::new(AfricaFactory), Box::new(AmericaFactory)];

        let pairs: Vec<_> = factories
            .iter()
            .map(|f| (f.create_carnivore().species(), f.create_herbivore().species()))
            .collect();

        assert_eq!(pairs, vec![("Lion", "Wildebeest"), ("Wolf", "Bison")]);
    }
}
