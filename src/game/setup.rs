//! Starting a new game.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::state::Game;
use crate::board::Board;
use crate::core::{Player, PlayerId, RulesConfig, MAX_SEATS};
use crate::error::{EngineError, EngineResult};

/// Roster for a new game, in seating order.
///
/// ```
/// use acquire_engine::core::RulesConfig;
/// use acquire_engine::game::Setup;
///
/// let game = Setup::new(["Jake", "James", "Nic"]).build(RulesConfig::default(), 42).unwrap();
/// assert_eq!(game.player_count(), 3);
/// assert_eq!(game.pool_size(), 108 - 3 * 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    pub players: Vec<String>,
}

impl Setup {
    pub fn new<S: Into<String>>(players: impl IntoIterator<Item = S>) -> Self {
        Self {
            players: players.into_iter().map(Into::into).collect(),
        }
    }

    /// Seat everyone with the starting cash and deal each rack from a pool
    /// shuffled with `seed`.
    pub fn build(&self, config: RulesConfig, seed: u64) -> EngineResult<Game> {
        let count = self.players.len();
        let limit = config.max_players.min(MAX_SEATS);
        if count == 0 || count > limit {
            return Err(EngineError::InvalidPlayer(format!(
                "{count} players, expected 1 to {limit}"
            )));
        }

        let players = self
            .players
            .iter()
            .zip(PlayerId::all(count))
            .map(|(name, id)| Player::new(id, name.as_str(), config.starting_cash))
            .collect();
        let mut game = Game::from_parts(Board::new(), players, config, seed)?;

        for id in PlayerId::all(count) {
            for _ in 0..config.hand_size {
                game.draw(id)?;
            }
        }
        info!(players = count, seed, pool = game.pool_size(), "game set up");
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_deals_racks() {
        let game = Setup::new(["Jake", "James"]).build(RulesConfig::default(), 7).unwrap();

        for (_, player) in game.players().iter() {
            assert_eq!(player.hand_size(), 6);
            assert_eq!(player.cash(), 6000);
        }
        assert_eq!(game.pool_size(), 96);
        assert_eq!(game.board().tile_count(), 0);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let setup = Setup::new(["Jake", "James"]);
        let a = setup.build(RulesConfig::default(), 99).unwrap();
        let b = setup.build(RulesConfig::default(), 99).unwrap();
        assert_eq!(a, b);

        let c = setup.build(RulesConfig::default(), 100).unwrap();
        assert_ne!(a.players(), c.players());
    }

    #[test]
    fn test_roster_checks() {
        let config = RulesConfig::default();
        assert!(matches!(
            Setup::new(Vec::<String>::new()).build(config, 0),
            Err(EngineError::InvalidPlayer(_))
        ));
        assert!(Setup::new(["a", "b", "c", "d", "e", "f", "g"]).build(config, 0).is_err());
        assert!(Setup::new(["a", "b", "c", "d", "e", "f", "g"])
            .build(config.with_max_players(7), 0)
            .is_ok());
        assert!(Setup::new(["Jake", "Jake"]).build(config, 0).is_err());
        assert!(Setup::new(["Jake", ""]).build(config, 0).is_err());
    }

    #[test]
    fn test_roster_beyond_seat_ids() {
        let config = RulesConfig::default().with_max_players(300).with_hand_size(0);
        let names: Vec<String> = (0..=MAX_SEATS).map(|i| format!("seat {i}")).collect();

        match Setup::new(names).build(config, 0) {
            Err(EngineError::InvalidPlayer(message)) => {
                assert_eq!(message, "256 players, expected 1 to 255");
            }
            other => panic!("expected InvalidPlayer, got {other:?}"),
        }

        let names: Vec<String> = (0..MAX_SEATS).map(|i| format!("seat {i}")).collect();
        let game = Setup::new(names).build(config, 0).unwrap();
        assert_eq!(game.player_count(), MAX_SEATS);
    }

    #[test]
    fn test_custom_config() {
        let config = RulesConfig::default().with_starting_cash(100).with_hand_size(1);
        let game = Setup::new(["Jake"]).build(config, 1).unwrap();
        let jake = game.player(PlayerId::new(0)).unwrap();
        assert_eq!(jake.cash(), 100);
        assert_eq!(jake.hand_size(), 1);
    }
}
