//! Whole games driven over in-memory consoles.

use std::io::Cursor;

use menagerie::{
    game::Game,
    rng::{ChaChaSource, ScriptedSource},
    zoo::{ExitReason, START_BANK},
};

fn play(
    input: &str,
    rng: ScriptedSource,
    starting_bank: f64,
) -> (menagerie::GameSummary, String) {
    let mut output = Vec::new();
    let game = Game::new(Cursor::new(input.to_string()), &mut output, rng, starting_bank);
    let summary = game.run().expect("session should finish");
    (summary, String::from_utf8(output).expect("utf8 transcript"))
}

#[test]
fn one_quiet_day_then_quit() {
    // Startup: 1 of each. Day 1: Generic feed, no purchase, stop playing.
    let input = "1\n1\n1\n2\n2\n2\n";
    let (summary, transcript) = play(input, ScriptedSource::new([1]), START_BANK);

    assert_eq!(summary.reason, ExitReason::Quit);
    assert_eq!(summary.days, 1);
    assert_eq!(summary.populations, [1, 1, 1, 0]);
    // 100000 - 11100 purchases - 65 feeding + 2105 payoffs.
    assert_eq!(summary.final_bank, 90_940.0);

    assert!(transcript.contains("Welcome To Your Brand New Zoo!"));
    assert!(transcript.contains("Day # 1"));
    assert!(transcript.contains("Today.. nothing happened at the zoo.."));
    assert!(transcript.contains("Bank account: $90940.00"));
    assert!(transcript.contains("Game Over"));
    assert!(transcript.contains("Number of days opened: 1"));
    assert!(transcript.contains("Because you gave up."));
    assert!(transcript.contains("Goodbye!"));
}

#[test]
fn bankruptcy_ends_the_day_without_the_keep_playing_prompt() {
    // A $2 bankroll cannot cover 2 of each animal; the balance goes deeply
    // negative and the day ends in bankruptcy before any keep-playing prompt.
    let input = "2\n2\n2\n2\n2\n";
    let (summary, transcript) = play(input, ScriptedSource::new([1]), 2.0);

    assert_eq!(summary.reason, ExitReason::Bankrupt);
    assert_eq!(summary.days, 1);
    assert_eq!(summary.populations, [2, 2, 2, 0]);
    assert!(summary.final_bank < 1.0);

    assert!(transcript.contains("Because you went bankrupt."));
    assert!(!transcript.contains("Do you want to keep playing?"));
}

#[test]
fn buying_a_tiger_at_midday() {
    // Day 1: Generic feed, buy a Tiger (option 1), then quit.
    let input = "1\n1\n1\n2\n1\n1\n2\n";
    let (summary, transcript) = play(input, ScriptedSource::new([1]), START_BANK);

    assert_eq!(summary.populations, [2, 1, 1, 0]);
    assert_eq!(summary.final_bank, 90_940.0 - 10_000.0);
    assert!(transcript.contains("A new Tiger was added to the exhibit. It is only 3 days old."));
}

#[test]
fn buying_a_custom_animal_at_midday() {
    // Day 1: Generic feed, buy option 4 and define a Dragon, then quit.
    let input = "1\n1\n1\n2\n1\n4\nDragon\n5000\n2\n50\n1500\n2\n";
    let (summary, transcript) = play(input, ScriptedSource::new([1]), START_BANK);

    assert_eq!(summary.populations, [1, 1, 1, 1]);
    assert_eq!(summary.final_bank, 90_940.0 - 5_000.0);
    assert!(transcript.contains("What is the name of your new animal? "));
    assert!(transcript.contains("A new Dragon was added to the exhibit. It is only 3 days old."));
}

#[test]
fn malformed_input_only_ever_re_prompts() {
    // Startup tiger count takes three bad answers before a valid one.
    let input = "5\n12abc\n\n2\n1\n1\n2\n2\n2\n";
    let (summary, transcript) = play(input, ScriptedSource::new([1]), START_BANK);

    assert_eq!(summary.reason, ExitReason::Quit);
    assert_eq!(summary.populations, [2, 1, 1, 0]);
    // 100000 - 21100 purchases - 115 feeding + 4105 payoffs.
    assert_eq!(summary.final_bank, 82_890.0);

    // One prompt per rejected line plus the accepted one.
    let prompts = transcript.matches("Enter a number between 1 and 2: ").count();
    assert!(prompts >= 4);
}

#[test]
fn closed_stdin_aborts_the_session() {
    let mut output = Vec::new();
    let game = Game::new(
        Cursor::new("1\n1\n"),
        &mut output,
        ScriptedSource::new([]),
        START_BANK,
    );
    assert!(game.run().is_err());
}

#[test]
fn same_seed_same_transcript() {
    // Three days with fixed answers; events come from the seeded source.
    let input = "1\n1\n1\n2\n2\n1\n2\n2\n1\n2\n2\n2\n";

    let run = |seed: u64| {
        let mut output = Vec::new();
        let game = Game::new(
            Cursor::new(input.to_string()),
            &mut output,
            ChaChaSource::seeded(seed),
            START_BANK,
        );
        let summary = game.run().expect("session should finish");
        (summary, output)
    };

    let (summary_a, transcript_a) = run(7);
    let (summary_b, transcript_b) = run(7);
    assert_eq!(summary_a, summary_b);
    assert_eq!(transcript_a, transcript_b);
    assert_eq!(summary_a.days, 3);
}
