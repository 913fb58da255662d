//! Animal product hierarchy.
//!
//! This module contains:
//! - Herbivore capability (prey: Wildebeest, Bison)
//! - Carnivore capability (predators: Lion, Wolf)
//!
//! Each species is an independent stateless type satisfying its capability
//! trait; continent pairing lives in [`crate::factory`], not here.

pub mod carnivore;
pub mod herbivore;

pub use carnivore::{Carnivore, Lion, Wolf};
pub use herbivore::{Bison, Herbivore, Wildebeest};
