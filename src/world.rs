//! Animal world orchestrator - runs the food chain demonstration.

use crate::animals::{Carnivore, Herbivore};
use crate::factory::ContinentFactory;

/// One continent's animal world.
///
/// Holds exactly one herbivore and one carnivore, both created from the
/// factory supplied at construction and never reassigned; the constructor
/// contract is what keeps the pair same-continent. The world depends only
/// on the abstract capabilities and never learns which concrete family it
/// is exercising.
pub struct AnimalWorld {
    herbivore: Box<dyn Herbivore>,
    carnivore: Box<dyn Carnivore>,
}

impl AnimalWorld {
    /// Create a world populated from the given factory
    pub fn new(factory: &dyn ContinentFactory) -> Self {
        let carnivore = factory.create_carnivore();
        let herbivore = factory.create_herbivore();
        log::debug!(
            "World populated from {} factory: {} hunts {}",
            factory.continent().name(),
            carnivore.species(),
            herbivore.species()
        );

        Self {
            herbivore,
            carnivore,
        }
    }

    /// Run the food chain: the carnivore consumes the herbivore.
    ///
    /// Returns the report line (e.g. "Lion eats Wildebeest"). Callable any
    /// number of times; nothing mutates between calls, so the line is
    /// always the same.
    pub fn run_food_chain(&self) -> String {
        self.carnivore.eat(self.herbivore.as_ref())
    }
}
