//! The animal population model.
//!
//! A closed set of kinds stands in for the usual subclass zoo: the three
//! built-in species answer their economics from a fixed defaults table,
//! while a custom animal carries whatever the player typed in. The numbers
//! behind an animal never change after construction; only its age moves.

/// Base feeding unit cost in dollars. Species scale this by their multiplier.
pub const BASE_FOOD_COST: f64 = 10.0;

/// Age in days at which an animal can parent a birth event.
pub const ADULT_AGE: u32 = 3;

/// Exhibit tag. `Custom` covers every player-defined species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Tiger,
    Penguin,
    Turtle,
    Custom,
}

impl Species {
    pub const ALL: [Species; 4] = [
        Species::Tiger,
        Species::Penguin,
        Species::Turtle,
        Species::Custom,
    ];

    /// The three species that can be purchased off the shelf.
    pub const BUILTIN: [Species; 3] = [Species::Tiger, Species::Penguin, Species::Turtle];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Exhibit heading shown in the end-of-day report.
    pub fn label(self) -> &'static str {
        match self {
            Species::Tiger => "Tiger",
            Species::Penguin => "Penguin",
            Species::Turtle => "Turtle",
            Species::Custom => "New animals",
        }
    }
}

/// Default attributes for one built-in species.
pub struct SpeciesDefaults {
    pub name: &'static str,
    pub cost: f64,
    pub litter_size: u32,
    pub food_multiplier: f64,
    pub payoff_fraction: f64,
}

const TIGER: SpeciesDefaults = SpeciesDefaults {
    name: "Tiger",
    cost: 10_000.0,
    litter_size: 1,
    food_multiplier: 5.0,
    payoff_fraction: 0.2,
};

const PENGUIN: SpeciesDefaults = SpeciesDefaults {
    name: "Penguin",
    cost: 1_000.0,
    litter_size: 5,
    food_multiplier: 1.0,
    payoff_fraction: 0.1,
};

const TURTLE: SpeciesDefaults = SpeciesDefaults {
    name: "Turtle",
    cost: 100.0,
    litter_size: 10,
    food_multiplier: 0.5,
    payoff_fraction: 0.05,
};

/// Player-supplied economics for a custom animal. Newborns replicate their
/// parent's traits verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomTraits {
    pub name: String,
    pub cost: f64,
    pub litter_size: u32,
    pub feeding_cost: f64,
    pub payoff: f64,
}

#[derive(Debug, Clone)]
enum AnimalKind {
    Tiger,
    Penguin,
    Turtle,
    Custom(CustomTraits),
}

/// One animal owned by the zoo.
///
/// Age is the only mutable attribute, and it only ever goes up by one.
#[derive(Debug, Clone)]
pub struct Animal {
    kind: AnimalKind,
    age: u32,
}

impl Animal {
    pub fn tiger(age: u32) -> Self {
        Self {
            kind: AnimalKind::Tiger,
            age,
        }
    }

    pub fn penguin(age: u32) -> Self {
        Self {
            kind: AnimalKind::Penguin,
            age,
        }
    }

    pub fn turtle(age: u32) -> Self {
        Self {
            kind: AnimalKind::Turtle,
            age,
        }
    }

    /// Construct a built-in species at the given age. `None` for
    /// [`Species::Custom`], which needs player-supplied traits.
    pub fn of_species(species: Species, age: u32) -> Option<Self> {
        match species {
            Species::Tiger => Some(Self::tiger(age)),
            Species::Penguin => Some(Self::penguin(age)),
            Species::Turtle => Some(Self::turtle(age)),
            Species::Custom => None,
        }
    }

    pub fn custom(traits: CustomTraits, age: u32) -> Self {
        Self {
            kind: AnimalKind::Custom(traits),
            age,
        }
    }

    /// A newborn of the same kind, traits and all.
    pub fn offspring(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            age: 0,
        }
    }

    pub fn species(&self) -> Species {
        match self.kind {
            AnimalKind::Tiger => Species::Tiger,
            AnimalKind::Penguin => Species::Penguin,
            AnimalKind::Turtle => Species::Turtle,
            AnimalKind::Custom(_) => Species::Custom,
        }
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            AnimalKind::Tiger => TIGER.name,
            AnimalKind::Penguin => PENGUIN.name,
            AnimalKind::Turtle => TURTLE.name,
            AnimalKind::Custom(traits) => &traits.name,
        }
    }

    pub fn cost(&self) -> f64 {
        match &self.kind {
            AnimalKind::Tiger => TIGER.cost,
            AnimalKind::Penguin => PENGUIN.cost,
            AnimalKind::Turtle => TURTLE.cost,
            AnimalKind::Custom(traits) => traits.cost,
        }
    }

    pub fn litter_size(&self) -> u32 {
        match &self.kind {
            AnimalKind::Tiger => TIGER.litter_size,
            AnimalKind::Penguin => PENGUIN.litter_size,
            AnimalKind::Turtle => TURTLE.litter_size,
            AnimalKind::Custom(traits) => traits.litter_size,
        }
    }

    /// Built-ins pay their feed multiplier times the base unit cost; customs
    /// pay whatever the player set.
    pub fn feeding_cost(&self) -> f64 {
        match &self.kind {
            AnimalKind::Tiger => TIGER.food_multiplier * BASE_FOOD_COST,
            AnimalKind::Penguin => PENGUIN.food_multiplier * BASE_FOOD_COST,
            AnimalKind::Turtle => TURTLE.food_multiplier * BASE_FOOD_COST,
            AnimalKind::Custom(traits) => traits.feeding_cost,
        }
    }

    /// Daily earnings. A fixed fraction of purchase cost for built-ins,
    /// stored directly for customs; in both cases frozen for life.
    pub fn payoff(&self) -> f64 {
        match &self.kind {
            AnimalKind::Tiger => TIGER.cost * TIGER.payoff_fraction,
            AnimalKind::Penguin => PENGUIN.cost * PENGUIN.payoff_fraction,
            AnimalKind::Turtle => TURTLE.cost * TURTLE.payoff_fraction,
            AnimalKind::Custom(traits) => traits.payoff,
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Age goes up by exactly 1; there is no other mutation after birth.
    pub fn grow_older(&mut self) {
        self.age += 1;
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}
