//! Zoo state: the four exhibits, the bank account, and day bookkeeping.

use crate::animal::{Animal, Species};

/// Default opening balance.
pub const START_BANK: f64 = 100_000.0;

/// Exhibit capacity grows in blocks of this many slots.
pub const EXHIBIT_BLOCK: usize = 10;

/// Daily feed choice. Scales the food bill and the odds of sickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedType {
    Cheap,
    Generic,
    Premium,
}

impl FeedType {
    pub const ALL: [FeedType; 3] = [FeedType::Cheap, FeedType::Generic, FeedType::Premium];

    pub fn multiplier(self) -> f64 {
        match self {
            FeedType::Cheap => 0.5,
            FeedType::Generic => 1.0,
            FeedType::Premium => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedType::Cheap => "Cheap",
            FeedType::Generic => "Generic",
            FeedType::Premium => "Premium",
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    Bankrupt,
}

/// The animals of one species, plus a display capacity that grows in
/// fixed blocks as the population does.
///
/// The capacity number is shown in the end-of-day report; the backing
/// storage is just a `Vec`.
#[derive(Debug)]
pub struct Exhibit {
    animals: Vec<Animal>,
    capacity: usize,
}

impl Default for Exhibit {
    fn default() -> Self {
        Self::new()
    }
}

impl Exhibit {
    pub fn new() -> Self {
        Self {
            animals: Vec::with_capacity(EXHIBIT_BLOCK),
            capacity: EXHIBIT_BLOCK,
        }
    }

    pub fn count(&self) -> usize {
        self.animals.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Animal> {
        self.animals.iter_mut()
    }

    /// Append an animal, bumping capacity by one block when full.
    /// Existing members keep their order.
    pub fn push(&mut self, animal: Animal) {
        if self.animals.len() == self.capacity {
            self.capacity += EXHIBIT_BLOCK;
            self.animals.reserve(self.capacity - self.animals.len());
        }
        self.animals.push(animal);
    }

    /// Remove and return the animal at `index`, preserving the order of
    /// the rest.
    pub fn remove(&mut self, index: usize) -> Animal {
        self.animals.remove(index)
    }
}

/// The whole game state outside of the console session itself.
pub struct Zoo {
    exhibits: [Exhibit; 4],
    bank: f64,
    day: u32,
    feed: FeedType,
    tiger_bonus: f64,
}

impl Zoo {
    pub fn new(starting_bank: f64) -> Self {
        Self {
            exhibits: [Exhibit::new(), Exhibit::new(), Exhibit::new(), Exhibit::new()],
            bank: starting_bank,
            day: 0,
            feed: FeedType::Generic,
            tiger_bonus: 0.0,
        }
    }

    pub fn bank(&self) -> f64 {
        self.bank
    }

    pub fn deposit(&mut self, amount: f64) {
        self.bank += amount;
    }

    pub fn withdraw(&mut self, amount: f64) {
        self.bank -= amount;
    }

    /// Bankrupt below one dollar; the balance may dip negative transiently
    /// within a day.
    pub fn is_bankrupt(&self) -> bool {
        self.bank < 1.0
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Advance to the next day: bump the counter and clear the per-day
    /// tiger bonus. Returns the new day number.
    pub fn begin_day(&mut self) -> u32 {
        self.day += 1;
        self.tiger_bonus = 0.0;
        self.day
    }

    pub fn feed(&self) -> FeedType {
        self.feed
    }

    pub fn set_feed(&mut self, feed: FeedType) {
        self.feed = feed;
    }

    pub fn tiger_bonus(&self) -> f64 {
        self.tiger_bonus
    }

    pub fn set_tiger_bonus(&mut self, bonus: f64) {
        self.tiger_bonus = bonus;
    }

    pub fn exhibit(&self, species: Species) -> &Exhibit {
        &self.exhibits[species.index()]
    }

    pub fn exhibit_mut(&mut self, species: Species) -> &mut Exhibit {
        &mut self.exhibits[species.index()]
    }

    pub fn tiger_count(&self) -> usize {
        self.exhibit(Species::Tiger).count()
    }

    pub fn total_animals(&self) -> usize {
        self.exhibits.iter().map(Exhibit::count).sum()
    }

    pub fn populations(&self) -> [usize; 4] {
        [
            self.exhibits[0].count(),
            self.exhibits[1].count(),
            self.exhibits[2].count(),
            self.exhibits[3].count(),
        ]
    }

    /// Add an animal to its exhibit. Purchases pay the animal's cost;
    /// births do not.
    pub fn add_animal(&mut self, animal: Animal, paid: bool) {
        if paid {
            self.bank -= animal.cost();
        }
        self.exhibits[animal.species().index()].push(animal);
    }

    pub fn age_animals(&mut self) {
        for exhibit in &mut self.exhibits {
            for animal in exhibit.iter_mut() {
                animal.grow_older();
            }
        }
    }

    /// Today's food bill: each animal's feeding cost scaled by the feed
    /// multiplier.
    pub fn feeding_bill(&self) -> f64 {
        let multiplier = self.feed.multiplier();
        self.exhibits
            .iter()
            .flat_map(Exhibit::iter)
            .map(|animal| animal.feeding_cost() * multiplier)
            .sum()
    }

    pub fn feed_animals(&mut self) {
        let bill = self.feeding_bill();
        self.withdraw(bill);
    }

    pub fn total_payoff(&self) -> f64 {
        self.exhibits
            .iter()
            .flat_map(Exhibit::iter)
            .map(Animal::payoff)
            .sum()
    }

    /// Bank the day's earnings: every animal's payoff plus any tiger bonus.
    /// Returns the total deposited.
    pub fn collect_profits(&mut self) -> f64 {
        let profit = self.total_payoff() + self.tiger_bonus;
        self.deposit(profit);
        profit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhibit_grows_without_losing_members() {
        let mut exhibit = Exhibit::new();
        assert_eq!(exhibit.capacity(), EXHIBIT_BLOCK);

        for age in 0..EXHIBIT_BLOCK as u32 {
            exhibit.push(Animal::turtle(age));
        }
        assert_eq!(exhibit.count(), EXHIBIT_BLOCK);
        assert_eq!(exhibit.capacity(), EXHIBIT_BLOCK);

        let before: Vec<u32> = exhibit.iter().map(Animal::age).collect();
        exhibit.push(Animal::turtle(99));
        assert_eq!(exhibit.count(), EXHIBIT_BLOCK + 1);
        assert_eq!(exhibit.capacity(), 2 * EXHIBIT_BLOCK);

        let after: Vec<u32> = exhibit.iter().map(Animal::age).collect();
        assert_eq!(&after[..EXHIBIT_BLOCK], &before[..]);
        assert_eq!(after[EXHIBIT_BLOCK], 99);
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut exhibit = Exhibit::new();
        for age in 0..5 {
            exhibit.push(Animal::penguin(age));
        }
        let removed = exhibit.remove(2);
        assert_eq!(removed.age(), 2);
        let ages: Vec<u32> = exhibit.iter().map(Animal::age).collect();
        assert_eq!(ages, vec![0, 1, 3, 4]);
    }

    #[test]
    fn purchases_pay_and_births_do_not() {
        let mut zoo = Zoo::new(START_BANK);
        zoo.add_animal(Animal::tiger(1), true);
        assert_eq!(zoo.bank(), START_BANK - 10_000.0);

        zoo.add_animal(Animal::tiger(0), false);
        assert_eq!(zoo.bank(), START_BANK - 10_000.0);
        assert_eq!(zoo.tiger_count(), 2);
    }

    #[test]
    fn feeding_bill_scales_with_feed_type() {
        let mut zoo = Zoo::new(START_BANK);
        zoo.add_animal(Animal::tiger(1), false);
        zoo.add_animal(Animal::penguin(1), false);
        zoo.add_animal(Animal::turtle(1), false);

        zoo.set_feed(FeedType::Generic);
        assert_eq!(zoo.feeding_bill(), 50.0 + 10.0 + 5.0);
        zoo.set_feed(FeedType::Cheap);
        assert_eq!(zoo.feeding_bill(), 32.5);
        zoo.set_feed(FeedType::Premium);
        assert_eq!(zoo.feeding_bill(), 130.0);
    }

    #[test]
    fn bankrupt_strictly_below_one_dollar() {
        let mut zoo = Zoo::new(1.0);
        assert!(!zoo.is_bankrupt());
        zoo.withdraw(0.01);
        assert!(zoo.is_bankrupt());
    }

    #[test]
    fn begin_day_resets_the_tiger_bonus() {
        let mut zoo = Zoo::new(START_BANK);
        zoo.set_tiger_bonus(750.0);
        assert_eq!(zoo.begin_day(), 1);
        assert_eq!(zoo.tiger_bonus(), 0.0);
        assert_eq!(zoo.begin_day(), 2);
    }

    #[test]
    fn profits_include_the_tiger_bonus() {
        let mut zoo = Zoo::new(0.0);
        zoo.add_animal(Animal::tiger(1), false);
        zoo.add_animal(Animal::penguin(1), false);
        zoo.set_tiger_bonus(300.0);

        let profit = zoo.collect_profits();
        assert_eq!(profit, 2_000.0 + 100.0 + 300.0);
        assert_eq!(zoo.bank(), profit);
    }
}
