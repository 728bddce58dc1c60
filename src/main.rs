//! Cabezadura entry point
//!
//! Headless exhibition runner: plays one AI-driven friendly, then takes an
//! entrant through a full cup draw, printing results as they come in. Pass a
//! number as the first argument to fix the seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::time::{SystemTime, UNIX_EPOCH};

use cabezadura::cues::{CueTable, GoalCue};
use cabezadura::roster::{Character, Roster};
use cabezadura::settings::MatchRules;
use cabezadura::sim::{MatchEvent, MatchState, Mode, Side, TickInput, ai, tick};
use cabezadura::tournament::{Phase, Tournament};

fn main() {
    env_logger::init();
    log::info!("Cabezadura (headless) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(wall_clock_seed);
    log::info!("session seed: {seed}");

    let roster = builtin_roster();
    let cues = CueTable::with_default_chants();

    println!("\nFriendly: Messi vs Maradona, 30 seconds");
    let rules = match MatchRules::timed(30) {
        Ok(rules) => rules,
        Err(err) => {
            log::warn!("{err}");
            return;
        }
    };
    let (Some(messi), Some(maradona)) = (roster.get("messi"), roster.get("maradona")) else {
        log::error!("catalog is missing its headliners");
        return;
    };
    let mut friendly = MatchState::new(messi, maradona, rules, seed);
    friendly.start();
    let score = run_match(&mut friendly, &cues);
    println!(
        "Full time: {} {} - {} {}",
        messi.name, score[0], score[1], maradona.name
    );

    println!("\nCup run: Maradona enters the draw");
    let mut draw_rng = Pcg32::seed_from_u64(seed);
    let mut cup = match Tournament::new(&roster, "maradona", &mut draw_rng) {
        Ok(cup) => cup,
        Err(err) => {
            log::warn!("{err}");
            return;
        }
    };
    let mut stage_seed = seed;
    while !cup.is_over() {
        let stage = cup.stage();
        let opponent = cup.start_match().clone();
        println!(
            "{}: {} vs {}",
            stage.label(),
            cup.entrant().name,
            opponent.name
        );

        stage_seed = stage_seed.wrapping_add(1);
        let mut stage_match = MatchState::tournament_match(cup.entrant(), &opponent, stage_seed);
        stage_match.start();
        let score = run_match(&mut stage_match, &cues);
        println!("  {} - {}", score[0], score[1]);
        cup.report_result(score[0], score[1]);
    }
    match cup.phase() {
        Phase::Champion => println!("{} takes the cup!", cup.entrant().name),
        Phase::Eliminated { stage } => {
            println!("{} goes out at {}", cup.entrant().name, stage.label());
        }
        other => log::error!("cup ended in phase {other:?}"),
    }
}

/// Drive a started match with AI on both sides until the clock decides it.
fn run_match(state: &mut MatchState, cues: &CueTable) -> [u32; 2] {
    // The engine only steers the right slot; the left gets its own brain here.
    let mut left_brain = Pcg32::seed_from_u64(state.seed ^ 0x5EED);
    while state.mode == Mode::Playing {
        let input = TickInput {
            left: ai::decide(&state.players[0], &state.ball, &mut left_brain),
            right: None,
        };
        tick(state, &input);
        for event in &state.events {
            match event {
                MatchEvent::Goal { scorer, .. } => {
                    match cues.resolve(scorer) {
                        GoalCue::Chant(clip) => log::info!("cue: {clip}"),
                        GoalCue::CrowdCheer => log::info!("cue: crowd cheer"),
                    }
                    println!(
                        "  GOAL {} ({} {} - {} {})",
                        scorer,
                        state.players[0].id,
                        state.score_for(Side::Left),
                        state.score_for(Side::Right),
                        state.players[1].id,
                    );
                }
                MatchEvent::MatchEnded { winner, score } => match winner {
                    Some(side) => log::info!("full time, {side:?} wins {} - {}", score[0], score[1]),
                    None => log::info!("full time, {} - {} draw", score[0], score[1]),
                },
            }
        }
    }
    state.score
}

/// The shipped character catalog
fn builtin_roster() -> Roster {
    let catalog = vec![
        Character::new("messi", "Messi", "https://i.imgur.com/ubk9HaK.png"),
        Character::new("maradona", "Maradona", "https://i.imgur.com/Opq6zxl.png"),
        Character::new("mirtha", "Mirtha", "https://i.imgur.com/OPnw7g0.png"),
        Character::new("francisco", "Francisco", "/francisco-head.png"),
        Character::new("charly", "Charly", "https://i.imgur.com/Ik6tgCi.png"),
        Character::new("rickyfort", "Ricky Fort", "https://i.imgur.com/40eMUrh.png"),
        Character::new("francella", "Francella", "https://i.imgur.com/wGf4Sno.png"),
        Character::new("darin", "Darín", "https://i.imgur.com/lhjvy3V.png"),
    ];
    match Roster::new(catalog) {
        Ok(roster) => roster,
        Err(err) => unreachable!("catalog ids are distinct: {err}"),
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
