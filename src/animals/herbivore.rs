//! Herbivore capability and its concrete species.

/// A grazing animal - the prey side of the food chain.
///
/// Herbivores exist to be consumed: beyond naming their own species they
/// have no behavior. Identity is purely the concrete type.
pub trait Herbivore {
    /// Species name used in food-chain reports
    fn species(&self) -> &'static str;
}

/// The African herbivore
#[derive(Clone, Copy, Debug, Default)]
pub struct Wildebeest;

impl Herbivore for Wildebeest {
    fn species(&self) -> &'static str {
        "Wildebeest"
    }
}

/// The American herbivore
#[derive(Clone, Copy, Debug, Default)]
pub struct Bison;

impl Herbivore for Bison {
    fn species(&self) -> &'static str {
        "Bison"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_names() {
        assert_eq!(Wildebeest.species(), "Wildebeest");
        assert_eq!(Bison.species(), "Bison");
    }

    #[test]
    fn test_species_name_is_stable() {
        // Repeated reads never change - herbivores carry no state
        let grazer = Wildebeest;
        assert_eq!(grazer.species(), grazer.species());
    }

    #[test]
    fn test_usable_as_trait_object() {
        let herd: Vec<Box<dyn Herbivore>> = vec![Box::new(Wildebeest), Box::new(Bison)];
        let names: Vec<_> = herd.iter().map(|h| h.species()).collect();
        assert_eq!(names, vec!["Wildebeest", "Bison"]);
    }
}
