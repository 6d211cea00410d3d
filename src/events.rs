//! Daily random-event resolution.
//!
//! One event resolves per day: nothing, an attendance boom, a birth, or a
//! sickness death. Birth and sickness need an eligible species; when none
//! exists the day falls through to a fresh draw rather than recursing.

use tracing::debug;

use crate::{
    animal::{Animal, Species},
    rng::RandomSource,
    zoo::{Exhibit, FeedType, Zoo},
};

/// What actually happened today, with the figures needed for narration.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Nothing,
    Boom { per_tiger: i64, total: f64 },
    Birth { name: String, litter_size: u32 },
    Death { name: String, age: u32 },
}

impl EventOutcome {
    /// The one-sentence report shown to the player.
    pub fn narration(&self) -> String {
        match self {
            EventOutcome::Nothing => "Today.. nothing happened at the zoo..".to_string(),
            EventOutcome::Boom { per_tiger, total } => {
                if *total > 0.0 {
                    format!(
                        "Today.. a boom in zoo attendance occurred.. you earned ${per_tiger} \
                         per tiger for a total of ${total:.0} extra profit.."
                    )
                } else {
                    "Today.. a boom in zoo attendance occurred.. too bad you dont have any \
                     tigers.."
                        .to_string()
                }
            }
            EventOutcome::Birth { name, litter_size } => {
                format!("Today.. a(n) {name} had {litter_size} babies..")
            }
            EventOutcome::Death { name, age } => {
                format!("Today.. a(n) {name} died from illness at the age of {age}..")
            }
        }
    }
}

/// Resolve today's event, mutating the zoo as a side effect.
///
/// The draw is uniform in [1,4], widened to [1,6] under Cheap feed so that
/// sickness comes up more often. Premium feed gives a sick animal a coin
/// flip to survive, which re-draws the whole event.
pub fn daily_event(zoo: &mut Zoo, rng: &mut dyn RandomSource) -> EventOutcome {
    loop {
        let hi = if zoo.feed() == FeedType::Cheap { 6 } else { 4 };
        let lottery = rng.uniform(1, hi);
        debug!(lottery, "event draw");

        match lottery {
            1 => return EventOutcome::Nothing,
            2 => return boom_in_attendance(zoo, rng),
            3 => {
                if let Some(outcome) = baby_is_born(zoo, rng) {
                    return outcome;
                }
                // No species had an adult; draw again.
            }
            _ => {
                if zoo.feed() == FeedType::Premium && rng.uniform(1, 2) == 1 {
                    // Lucky day: the animal pulls through, draw again.
                    continue;
                }
                if let Some(outcome) = animal_dies(zoo, rng) {
                    return outcome;
                }
                // The zoo is empty; draw again.
            }
        }
    }
}

/// The bonus accumulates per tiger; with no tigers it is exactly zero.
fn boom_in_attendance(zoo: &mut Zoo, rng: &mut dyn RandomSource) -> EventOutcome {
    let per_tiger = rng.uniform(250, 500);
    let total = (per_tiger * zoo.tiger_count() as i64) as f64;
    zoo.set_tiger_bonus(total);
    debug!(per_tiger, total, "attendance boom");
    EventOutcome::Boom { per_tiger, total }
}

/// The first adult in scan order of a randomly selected species parents a
/// full litter of age-0 newborns. `None` when no species has an adult.
fn baby_is_born(zoo: &mut Zoo, rng: &mut dyn RandomSource) -> Option<EventOutcome> {
    let species = pick_species(zoo, rng, |exhibit| {
        exhibit.iter().any(Animal::is_adult)
    })?;
    let parent = zoo.exhibit(species).iter().find(|a| a.is_adult())?.clone();

    for _ in 0..parent.litter_size() {
        zoo.add_animal(parent.offspring(), false);
    }
    debug!(species = ?species, litter_size = parent.litter_size(), "birth");
    Some(EventOutcome::Birth {
        name: parent.name().to_string(),
        litter_size: parent.litter_size(),
    })
}

/// A uniformly random individual of a randomly selected populated species
/// dies. `None` when the zoo has no animals at all.
fn animal_dies(zoo: &mut Zoo, rng: &mut dyn RandomSource) -> Option<EventOutcome> {
    let species = pick_species(zoo, rng, |exhibit| !exhibit.is_empty())?;
    let count = zoo.exhibit(species).count();
    let index = rng.uniform(0, count as i64 - 1) as usize;
    let victim = zoo.exhibit_mut(species).remove(index);
    debug!(species = ?species, age = victim.age(), "death by sickness");
    Some(EventOutcome::Death {
        name: victim.name().to_string(),
        age: victim.age(),
    })
}

/// Draw uniformly among the species not yet tried until one passes
/// `eligible`, ruling each miss out. At most four draws, one per species.
fn pick_species(
    zoo: &Zoo,
    rng: &mut dyn RandomSource,
    eligible: impl Fn(&Exhibit) -> bool,
) -> Option<Species> {
    let mut remaining: Vec<Species> = Species::ALL.to_vec();
    while !remaining.is_empty() {
        let pick = rng.uniform(0, remaining.len() as i64 - 1) as usize;
        let species = remaining.swap_remove(pick);
        if eligible(zoo.exhibit(species)) {
            return Some(species);
        }
    }
    None
}
