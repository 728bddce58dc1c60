//! Knockout cup bracket
//!
//! A three-stage single-elimination run for one entrant: quarterfinal,
//! semifinal, final. All three opponents are drawn when the cup is created
//! and never change. The entrant must win outright to advance; a draw counts
//! as a loss. Matches themselves are played elsewhere; this type only tracks
//! where the entrant stands.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::roster::{Character, Roster};

/// Bracket stages in playing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Quarterfinal,
    Semifinal,
    Final,
}

impl Stage {
    /// The stage after this one, `None` past the final
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Quarterfinal => Some(Stage::Semifinal),
            Stage::Semifinal => Some(Stage::Final),
            Stage::Final => None,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Stage::Quarterfinal => 0,
            Stage::Semifinal => 1,
            Stage::Final => 2,
        }
    }

    /// Display name for bracket screens
    pub fn label(self) -> &'static str {
        match self {
            Stage::Quarterfinal => "Cuartos de Final",
            Stage::Semifinal => "Semifinal",
            Stage::Final => "Final",
        }
    }
}

/// Where the entrant currently stands in the cup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Between matches, looking at the bracket
    BracketView,
    /// The current stage's match is underway
    MatchInProgress,
    /// Knocked out; carries the stage that ended the run
    Eliminated { stage: Stage },
    /// Won the final
    Champion,
}

/// One entrant's run through the cup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    entrant: Character,
    /// Opponents indexed by [`Stage::index`], fixed at the draw
    opponents: [Character; 3],
    stage: Stage,
    phase: Phase,
    champion: Option<String>,
}

impl Tournament {
    /// Draw a bracket for `entrant_id`: three distinct opponents are picked
    /// at random from the rest of the roster, one per stage.
    pub fn new(
        roster: &Roster,
        entrant_id: &str,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        let entrant = roster
            .get(entrant_id)
            .ok_or_else(|| ConfigError::UnknownCharacter {
                id: entrant_id.to_string(),
            })?
            .clone();

        let mut candidates: Vec<Character> = roster
            .iter()
            .filter(|c| c.id != entrant.id)
            .cloned()
            .collect();
        if candidates.len() < 3 {
            return Err(ConfigError::RosterTooSmall {
                have: roster.len(),
                need: 4,
            });
        }
        candidates.shuffle(rng);
        candidates.truncate(3);
        let opponents: [Character; 3] = match candidates.try_into() {
            Ok(opponents) => opponents,
            Err(_) => unreachable!("candidate list was truncated to three"),
        };

        log::info!(
            "cup draw for {}: {} / {} / {}",
            entrant.name,
            opponents[0].name,
            opponents[1].name,
            opponents[2].name
        );

        Ok(Self {
            entrant,
            opponents,
            stage: Stage::Quarterfinal,
            phase: Phase::BracketView,
            champion: None,
        })
    }

    #[inline]
    pub fn entrant(&self) -> &Character {
        &self.entrant
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The opponent assigned to the current stage
    pub fn current_opponent(&self) -> &Character {
        &self.opponents[self.stage.index()]
    }

    /// Roster id of the cup winner, set only after a final win
    pub fn champion(&self) -> Option<&str> {
        self.champion.as_deref()
    }

    /// Terminal once eliminated or crowned
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Eliminated { .. } | Phase::Champion)
    }

    /// Move from the bracket view into the current stage's match and hand
    /// back the opponent to build it with.
    ///
    /// # Panics
    /// Panics when called outside the bracket view; stages cannot be
    /// replayed or skipped.
    pub fn start_match(&mut self) -> &Character {
        if self.phase != Phase::BracketView {
            panic!("start_match in phase {:?}", self.phase);
        }
        self.phase = Phase::MatchInProgress;
        log::info!(
            "{}: {} vs {}",
            self.stage.label(),
            self.entrant.name,
            self.current_opponent().name
        );
        self.current_opponent()
    }

    /// Feed back the final score of the stage match. The entrant advances
    /// only on a strict win; a draw ends the run.
    ///
    /// # Panics
    /// Panics when no match is in progress.
    pub fn report_result(&mut self, entrant_score: u32, opponent_score: u32) {
        if self.phase != Phase::MatchInProgress {
            panic!("report_result in phase {:?}", self.phase);
        }

        if entrant_score <= opponent_score {
            log::info!(
                "{} knocked out at {} ({entrant_score} - {opponent_score})",
                self.entrant.name,
                self.stage.label()
            );
            self.phase = Phase::Eliminated { stage: self.stage };
            return;
        }

        match self.stage.next() {
            Some(next) => {
                log::info!("{} advances to {}", self.entrant.name, next.label());
                self.stage = next;
                self.phase = Phase::BracketView;
            }
            None => {
                log::info!("{} wins the cup", self.entrant.name);
                self.champion = Some(self.entrant.id.clone());
                self.phase = Phase::Champion;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    fn roster_of(n: usize) -> Roster {
        let characters = (0..n)
            .map(|i| Character::new(format!("c{i}"), format!("C{i}"), format!("c{i}.png")))
            .collect();
        Roster::new(characters).unwrap()
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(Stage::Quarterfinal.next(), Some(Stage::Semifinal));
        assert_eq!(Stage::Semifinal.next(), Some(Stage::Final));
        assert_eq!(Stage::Final.next(), None);
    }

    #[test]
    fn test_draw_excludes_entrant_and_is_distinct() {
        let roster = roster_of(8);
        let mut rng = Pcg32::seed_from_u64(3);
        let cup = Tournament::new(&roster, "c2", &mut rng).unwrap();

        assert_eq!(cup.stage(), Stage::Quarterfinal);
        assert_eq!(*cup.phase(), Phase::BracketView);

        let ids: Vec<&str> = cup.opponents.iter().map(|c| c.id.as_str()).collect();
        assert!(!ids.contains(&"c2"));
        assert_eq!(ids.len(), 3);
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[..i].contains(id), "duplicate opponent {id}");
        }
    }

    #[test]
    fn test_same_seed_same_draw() {
        let roster = roster_of(8);
        let a = Tournament::new(&roster, "c0", &mut Pcg32::seed_from_u64(11)).unwrap();
        let b = Tournament::new(&roster, "c0", &mut Pcg32::seed_from_u64(11)).unwrap();

        for (x, y) in a.opponents.iter().zip(&b.opponents) {
            assert_eq!(x.id, y.id);
        }
    }

    #[test]
    fn test_unknown_entrant_rejected() {
        let roster = roster_of(8);
        let mut rng = Pcg32::seed_from_u64(3);
        let err = Tournament::new(&roster, "nobody", &mut rng).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCharacter { id } if id == "nobody"));
    }

    #[test]
    fn test_small_roster_rejected() {
        let roster = roster_of(3);
        let mut rng = Pcg32::seed_from_u64(3);
        let err = Tournament::new(&roster, "c0", &mut rng).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RosterTooSmall { have: 3, need: 4 }
        ));
    }

    #[test]
    fn test_run_to_the_title() {
        let roster = roster_of(8);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut cup = Tournament::new(&roster, "c0", &mut rng).unwrap();

        for expected in [Stage::Quarterfinal, Stage::Semifinal, Stage::Final] {
            assert_eq!(cup.stage(), expected);
            cup.start_match();
            cup.report_result(2, 1);
        }

        assert_eq!(*cup.phase(), Phase::Champion);
        assert_eq!(cup.champion(), Some("c0"));
        assert!(cup.is_over());
    }

    #[test]
    fn test_loss_eliminates_at_current_stage() {
        let roster = roster_of(8);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut cup = Tournament::new(&roster, "c0", &mut rng).unwrap();

        cup.start_match();
        cup.report_result(2, 1);
        cup.start_match();
        cup.report_result(0, 1);

        assert_eq!(
            *cup.phase(),
            Phase::Eliminated {
                stage: Stage::Semifinal
            }
        );
        assert_eq!(cup.champion(), None);
        assert!(cup.is_over());
    }

    #[test]
    fn test_draw_counts_as_a_loss() {
        let roster = roster_of(8);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut cup = Tournament::new(&roster, "c0", &mut rng).unwrap();

        cup.start_match();
        cup.report_result(1, 1);

        assert_eq!(
            *cup.phase(),
            Phase::Eliminated {
                stage: Stage::Quarterfinal
            }
        );
    }

    #[test]
    #[should_panic(expected = "report_result")]
    fn test_result_without_match_panics() {
        let roster = roster_of(8);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut cup = Tournament::new(&roster, "c0", &mut rng).unwrap();
        cup.report_result(1, 0);
    }

    #[test]
    #[should_panic(expected = "start_match")]
    fn test_stage_cannot_be_started_twice() {
        let roster = roster_of(8);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut cup = Tournament::new(&roster, "c0", &mut rng).unwrap();
        cup.start_match();
        cup.start_match();
    }
}
