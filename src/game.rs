//! Match controller: alternates turns, loops on extra shots, detects the
//! winner.

use crate::board::Board;
use crate::common::{GameError, ShotOutcome};
use crate::player::Player;

/// Read-only snapshot handed to the input and rendering collaborators.
pub struct PlayerView<'a> {
    pub name: &'a str,
    pub score: u32,
    /// The active player's own board, ships revealed.
    pub own: &'a Board,
    /// The active player's view of the opponent: hits and misses only.
    pub observed: &'a Board,
    /// Outcome of the shot just resolved, if any.
    pub last: Option<ShotOutcome>,
}

/// Supplies one coordinate attempt per request. Blocking from the
/// controller's perspective; the resolver re-validates whatever comes back.
pub trait ShotSource {
    fn next_shot(&mut self, view: &PlayerView<'_>) -> (u8, u8);
}

/// Receives a snapshot after every board mutation.
pub trait ViewSink {
    fn render(&mut self, view: &PlayerView<'_>);
}

/// Headless sink for driving matches without output.
impl ViewSink for () {
    fn render(&mut self, _view: &PlayerView<'_>) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    PlayerOneWon,
    PlayerTwoWon,
}

/// How a call to [`Match::play_turn`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The active player missed; play passes to the opponent.
    TurnEnded,
    /// The active player reached the win threshold.
    MatchWon,
}

pub struct Match {
    players: [Player; 2],
    active: usize,
    status: MatchStatus,
}

impl Match {
    /// Start a match between two players with their fleets already placed.
    /// Player one moves first.
    pub fn new(player_one: Player, player_two: Player) -> Self {
        Match {
            players: [player_one, player_two],
            active: 0,
            status: MatchStatus::InProgress,
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Index of the player whose turn it is.
    pub fn active_player(&self) -> usize {
        self.active
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            MatchStatus::InProgress => None,
            MatchStatus::PlayerOneWon => Some(&self.players[0]),
            MatchStatus::PlayerTwoWon => Some(&self.players[1]),
        }
    }

    fn split_active(&mut self) -> (&mut Player, &Player) {
        let (left, right) = self.players.split_at_mut(1);
        if self.active == 0 {
            (&mut left[0], &right[0])
        } else {
            (&mut right[0], &left[0])
        }
    }

    fn active_view(&self, last: Option<ShotOutcome>) -> PlayerView<'_> {
        let attacker = &self.players[self.active];
        PlayerView {
            name: attacker.name(),
            score: attacker.score(),
            own: attacker.board(),
            observed: attacker.observed(),
            last,
        }
    }

    /// Play out one turn for the active player. A hit earns another shot,
    /// a used coordinate is re-prompted, a miss ends the turn. Returns
    /// immediately when the match is already decided.
    pub fn play_turn<S, V>(&mut self, source: &mut S, sink: &mut V) -> Result<TurnResult, GameError>
    where
        S: ShotSource,
        V: ViewSink,
    {
        if self.status != MatchStatus::InProgress {
            return Ok(TurnResult::MatchWon);
        }
        loop {
            let (x, y) = {
                let view = self.active_view(None);
                source.next_shot(&view)
            };
            let report = {
                let (attacker, defender) = self.split_active();
                attacker.fire_at(defender.board(), x, y)?
            };
            sink.render(&self.active_view(Some(report.outcome)));
            match report.outcome {
                ShotOutcome::Miss => return Ok(TurnResult::TurnEnded),
                // A used coordinate does not consume the turn; ask again.
                ShotOutcome::AlreadyHit => continue,
                ShotOutcome::Hit(_) => {
                    if report.match_won {
                        self.status = if self.active == 0 {
                            MatchStatus::PlayerOneWon
                        } else {
                            MatchStatus::PlayerTwoWon
                        };
                        log::info!(
                            "{} wins with score {}",
                            self.players[self.active].name(),
                            self.players[self.active].score()
                        );
                        return Ok(TurnResult::MatchWon);
                    }
                    debug_assert!(report.grants_extra_shot);
                }
            }
        }
    }

    /// Alternate turns starting with player one until the match is won.
    pub fn run<S, V>(&mut self, source: &mut S, sink: &mut V) -> Result<MatchStatus, GameError>
    where
        S: ShotSource,
        V: ViewSink,
    {
        while self.play_turn(source, sink)? == TurnResult::TurnEnded {
            self.active = 1 - self.active;
        }
        Ok(self.status)
    }
}
