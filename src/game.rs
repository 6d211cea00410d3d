//! The interactive session: startup purchases, the day loop, and game over.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{
    animal::{Animal, CustomTraits, Species},
    events,
    input::ConsoleError,
    menu::Menu,
    rng::RandomSource,
    zoo::{ExitReason, FeedType, Zoo},
};

/// Animals bought during startup are one day old.
const START_AGE: u32 = 1;
/// Animals bought mid-game arrive as adults.
const PURCHASE_AGE: u32 = 3;

/// Final state of a finished session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub days: u32,
    pub final_bank: f64,
    pub reason: ExitReason,
    /// Animal counts per exhibit, in [`Species::ALL`] order.
    pub populations: [usize; 4],
}

/// One interactive game over a console-like reader/writer pair.
pub struct Game<R, W, S> {
    menu: Menu<R, W>,
    zoo: Zoo,
    rng: S,
}

impl<R: BufRead, W: Write, S: RandomSource> Game<R, W, S> {
    pub fn new(input: R, output: W, rng: S, starting_bank: f64) -> Self {
        Self {
            menu: Menu::new(input, output),
            zoo: Zoo::new(starting_bank),
            rng,
        }
    }

    /// Run the session to completion and report how it ended.
    pub fn run(mut self) -> Result<GameSummary, ConsoleError> {
        info!(starting_bank = self.zoo.bank(), "session start");
        self.startup()?;

        let reason = loop {
            let day = self.zoo.begin_day();
            self.menu.banner(&format!("Day # {day}"))?;
            self.begin_of_day()?;
            self.midday()?;
            if let Some(reason) = self.end_of_day()? {
                break reason;
            }
        };

        self.game_over(reason)?;
        self.menu.blank()?;
        self.menu.line("Goodbye!")?;
        self.menu.blank()?;

        let summary = GameSummary {
            days: self.zoo.day(),
            final_bank: self.zoo.bank(),
            reason,
            populations: self.zoo.populations(),
        };
        info!(days = summary.days, final_bank = summary.final_bank, "session over");
        Ok(summary)
    }

    /// Welcome the player and sell them one or two of each built-in species
    /// before the first day opens.
    fn startup(&mut self) -> Result<(), ConsoleError> {
        let welcome = format!("{}Welcome To Your Brand New Zoo!", " ".repeat(20));
        self.menu.banner(&welcome)?;
        self.show_bank()?;

        self.menu.blank()?;
        self.menu
            .line("Please buy your 3 animals to start, you can buy 1 or 2 of each:")?;
        self.menu.blank()?;

        let tigers = self.menu.ask("How many Tigers do you want? ", 1, 2)?;
        let penguins = self.menu.ask("How many Penguins do you want? ", 1, 2)?;
        let turtles = self.menu.ask("How many Turtles do you want? ", 1, 2)?;

        for _ in 0..tigers {
            self.acquire(Animal::tiger(START_AGE), true)?;
        }
        for _ in 0..penguins {
            self.acquire(Animal::penguin(START_AGE), true)?;
        }
        for _ in 0..turtles {
            self.acquire(Animal::turtle(START_AGE), true)?;
        }
        Ok(())
    }

    /// Age the animals, then pick a feed type and pay the food bill.
    fn begin_of_day(&mut self) -> Result<(), ConsoleError> {
        self.zoo.age_animals();
        self.menu.banner("All animals are one day older.")?;
        self.show_bank()?;

        let labels = [
            FeedType::Cheap.label(),
            FeedType::Generic.label(),
            FeedType::Premium.label(),
        ];
        let pick = self
            .menu
            .choose_one("What type of feed do you want to use today?", &labels)?;
        self.zoo.set_feed(FeedType::ALL[pick - 1]);
        self.zoo.feed_animals();
        self.menu.banner("All animals have been fed!")?;
        self.show_bank()
    }

    /// Resolve the day's random event, collect the profits, and offer one
    /// extra purchase.
    fn midday(&mut self) -> Result<(), ConsoleError> {
        let outcome = events::daily_event(&mut self.zoo, &mut self.rng);
        self.menu.banner(&outcome.narration())?;

        let profit = self.zoo.collect_profits();
        self.menu.banner(&format!(
            "Your zoo made a killing today.. you earned ${profit:.0} in total profit.."
        ))?;
        self.show_bank()?;

        if self.menu.confirm("Do you want to buy a new animal?")? {
            let pick = self.menu.choose_one(
                "Choose an animal",
                &["Tiger", "Penguin", "Turtle", "New animal"],
            )?;
            match Animal::of_species(Species::ALL[pick - 1], PURCHASE_AGE) {
                Some(animal) => self.acquire(animal, true)?,
                None => self.buy_custom_animal()?,
            }
        }
        Ok(())
    }

    /// Report the exhibits and the balance, then decide whether the game
    /// continues. Bankruptcy skips the keep-playing prompt.
    fn end_of_day(&mut self) -> Result<Option<ExitReason>, ConsoleError> {
        self.exhibit_report()?;
        self.show_bank()?;

        if self.zoo.is_bankrupt() {
            return Ok(Some(ExitReason::Bankrupt));
        }
        if !self.menu.confirm("Do you want to keep playing?")? {
            return Ok(Some(ExitReason::Quit));
        }
        Ok(None)
    }

    /// Prompt for a player-defined species and buy one as an adult.
    fn buy_custom_animal(&mut self) -> Result<(), ConsoleError> {
        let name = self
            .menu
            .prompt_line("What is the name of your new animal? ")?;
        let cost = self
            .menu
            .prompt_integer("What is the cost of your new animal? ", 100, 10_000)?;
        let litter_size = self.menu.prompt_integer(
            "What is the number of babies your new animal produces? ",
            1,
            10,
        )?;
        let feeding_cost = self
            .menu
            .prompt_integer("What is the feeding cost of your new animal? ", 10, 100)?;
        let payoff = self
            .menu
            .prompt_integer("What is the payoff of your new animal? ", 100, 2_000)?;

        let traits = CustomTraits {
            name,
            cost: cost as f64,
            litter_size: litter_size as u32,
            feeding_cost: feeding_cost as f64,
            payoff: payoff as f64,
        };
        self.acquire(Animal::custom(traits, PURCHASE_AGE), true)
    }

    /// Add an animal to its exhibit and announce it.
    fn acquire(&mut self, animal: Animal, paid: bool) -> Result<(), ConsoleError> {
        let added = format!(
            "A new {} was added to the exhibit. It is only {} days old.",
            animal.name(),
            animal.age()
        );
        debug!(species = ?animal.species(), age = animal.age(), paid, "animal added");
        self.zoo.add_animal(animal, paid);
        self.menu.banner(&added)
    }

    fn show_bank(&mut self) -> Result<(), ConsoleError> {
        let bank = self.zoo.bank();
        self.menu.banner(&format!("Bank account: ${bank:.2}"))
    }

    fn exhibit_report(&mut self) -> Result<(), ConsoleError> {
        self.menu.border()?;
        self.menu.blank()?;
        self.menu.line("Animal exhibit count")?;
        self.menu.blank()?;
        for species in Species::ALL {
            let (capacity, count) = {
                let exhibit = self.zoo.exhibit(species);
                (exhibit.capacity(), exhibit.count())
            };
            self.menu.line(&format!("{} exhibit:", species.label()))?;
            self.menu.line(&format!("Capacity: {capacity}"))?;
            self.menu.line(&format!("Count: {count}"))?;
            if species != Species::Custom {
                self.menu.blank()?;
            }
        }
        self.menu.border()
    }

    fn game_over(&mut self, reason: ExitReason) -> Result<(), ConsoleError> {
        self.menu.border()?;
        self.menu.blank()?;
        self.menu.line("Game Over")?;
        self.menu
            .line(&format!("Number of days opened: {}", self.zoo.day()))?;
        self.menu.border()?;

        self.exhibit_report()?;
        self.show_bank()?;

        self.menu.border()?;
        self.menu.blank()?;
        self.menu
            .line("All the animals were released and went on a rampage in the city.")?;
        self.menu.line(match reason {
            ExitReason::Bankrupt => "Because you went bankrupt.",
            ExitReason::Quit => "Because you gave up.",
        })?;
        self.menu.border()
    }
}
