//! A game in progress: board, seats, draw pool and turn bookkeeping.
//!
//! `Game` is the command surface. It checks the acting seat, classifies the
//! tile and dispatches to the matching executor in `rules::executor`. Every
//! command either applies completely or returns an error with the game
//! unchanged.
//!
//! Cloning is cheap: board, racks and pool are persistent `im` collections,
//! so callers can snapshot before a command.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, instrument, warn};

use super::command::{Command, CommandOutcome, Placement};
use crate::board::{Board, Certificate};
use crate::core::{GameRng, HotelName, Player, PlayerId, PlayerMap, RulesConfig, Tile};
use crate::error::{EngineError, EngineResult};
use crate::rules::{
    buy_share, classify, found_hotel, grow_hotel, merge_hotels, place_singleton, ImpossibleReason,
    MoveClassification,
};

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    config: RulesConfig,
    board: Board,
    players: PlayerMap<Player>,
    /// Undrawn tiles, next draw at the front.
    pool: Vector<Tile>,
    current: PlayerId,
    turn_number: u32,
    seed: u64,
}

impl Game {
    /// Assemble a game from decoded parts.
    ///
    /// Player ids must match their seat index. Names must be non-empty and
    /// unique, no tile may appear twice across the board and the racks, and
    /// every certificate must belong to a seated player. The pool is every
    /// remaining tile, shuffled with `seed`.
    pub fn from_parts(
        board: Board,
        players: Vec<Player>,
        config: RulesConfig,
        seed: u64,
    ) -> EngineResult<Self> {
        if players.len() > config.max_players {
            return Err(EngineError::InvalidPlayer(format!(
                "{} players, at most {} allowed",
                players.len(),
                config.max_players
            )));
        }
        board.validate()?;

        let mut names = FxHashSet::default();
        let mut placed: FxHashSet<Tile> = board.singles().collect();
        for hotel in board.hotels() {
            placed.extend(hotel.tiles());
        }
        for (seat, player) in players.iter().enumerate() {
            if player.id().index() != seat {
                return Err(EngineError::InvalidPlayer(format!(
                    "{} sits in seat {seat}",
                    player.id()
                )));
            }
            if player.name().trim().is_empty() {
                return Err(EngineError::InvalidPlayer(format!("{} has no name", player.id())));
            }
            if !names.insert(player.name()) {
                return Err(EngineError::InvalidPlayer(format!(
                    "duplicate player name {:?}",
                    player.name()
                )));
            }
            for tile in player.tiles() {
                if !placed.insert(tile) {
                    return Err(EngineError::InvalidPlayer(format!(
                        "tile {tile} in {}'s rack is already in play",
                        player.name()
                    )));
                }
            }
        }
        for certificate in board.hotels().flat_map(|h| h.certificates()) {
            if certificate.owner().index() >= players.len() {
                return Err(EngineError::InvalidPlayer(format!(
                    "{} holds {} shares but is not seated",
                    certificate.owner(),
                    certificate.hotel()
                )));
            }
        }

        let mut pool: Vec<Tile> = Tile::all().filter(|t| !placed.contains(t)).collect();
        GameRng::new(seed).shuffle(&mut pool);

        Ok(Self {
            config,
            board,
            players: PlayerMap::from_vec(players)?,
            pool: pool.into_iter().collect(),
            current: PlayerId::new(0),
            turn_number: 0,
            seed,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Hand the turn to `player` without drawing.
    pub fn set_current_player(&mut self, player: PlayerId) -> EngineResult<()> {
        self.seat(player)?;
        self.current = player;
        Ok(())
    }

    /// Completed turns.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Tiles left to draw.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Non-empty certificates held by `player`, sorted by hotel name.
    #[must_use]
    pub fn portfolio(&self, player: PlayerId) -> Vec<Certificate> {
        let mut lots: Vec<Certificate> = self
            .board
            .hotels()
            .filter_map(|h| h.certificate(player))
            .filter(|c| c.count() > 0)
            .copied()
            .collect();
        lots.sort_by_key(Certificate::hotel);
        lots
    }

    /// Classify `tile` against the current board.
    #[must_use]
    pub fn classify(&self, tile: Tile) -> MoveClassification {
        classify(&self.board, tile)
    }

    // === Commands ===

    /// Play `tile` from `player`'s rack.
    ///
    /// `hotel` names the chain to found, or the acquirer of a merger. It may
    /// be left out of a merger only when one hotel is strictly the largest.
    #[instrument(level = "debug", skip(self))]
    pub fn place_tile(
        &mut self,
        player: PlayerId,
        tile: Tile,
        hotel: Option<HotelName>,
    ) -> EngineResult<Placement> {
        self.seat(player)?.require_tile(tile)?;

        let placement = match classify(&self.board, tile) {
            MoveClassification::Impossible(ImpossibleReason::Occupied) => {
                return Err(EngineError::OccupiedTile(tile))
            }
            MoveClassification::Impossible(ImpossibleReason::SafeHotelInMerge(name)) => {
                return Err(EngineError::SafeHotel(name))
            }
            MoveClassification::Singleton => {
                place_singleton(&mut self.board, seat_mut(&mut self.players, player)?, tile)?;
                Placement::Singleton
            }
            MoveClassification::Founding => {
                let name = hotel.ok_or(EngineError::MissingHotelName("founding a hotel"))?;
                found_hotel(
                    &mut self.board,
                    seat_mut(&mut self.players, player)?,
                    name,
                    tile,
                    self.config.founder_shares,
                )?;
                Placement::Founded(name)
            }
            MoveClassification::Growing(_) => {
                let name = grow_hotel(&mut self.board, seat_mut(&mut self.players, player)?, tile)?;
                Placement::Grew(name)
            }
            MoveClassification::Merging { tied, .. } => {
                let acquirer = match (hotel, tied.as_slice()) {
                    (Some(name), _) => name,
                    (None, [only]) => *only,
                    (None, _) => {
                        return Err(EngineError::MissingHotelName(
                            "merger between equally sized hotels",
                        ))
                    }
                };
                let outcome = merge_hotels(
                    &mut self.board,
                    &mut self.players,
                    player,
                    tile,
                    acquirer,
                    &self.config.bonus,
                )?;
                Placement::Merged(outcome)
            }
        };
        Ok(placement)
    }

    /// Buy one share of each of `hotels` for `player`, in order.
    ///
    /// All purchases succeed or none do. Returns the price of each share.
    #[instrument(level = "debug", skip(self))]
    pub fn buy_shares(&mut self, player: PlayerId, hotels: &[HotelName]) -> EngineResult<Vec<u32>> {
        let limit = self.config.shares_per_turn;
        if hotels.len() > limit {
            return Err(EngineError::PurchaseLimit {
                limit,
                requested: hotels.len(),
            });
        }

        let mut board = self.board.clone();
        let mut buyer = self.seat(player)?.clone();
        let prices = hotels
            .iter()
            .map(|&name| buy_share(&mut board, &mut buyer, name))
            .collect::<EngineResult<Vec<u32>>>()?;

        self.board = board;
        *seat_mut(&mut self.players, player)? = buyer;
        Ok(prices)
    }

    /// Finish `player`'s turn: draw a tile if any are left, then pass to the
    /// next seat. Only the current player may end the turn.
    #[instrument(level = "debug", skip(self))]
    pub fn end_turn(&mut self, player: PlayerId) -> EngineResult<Option<Tile>> {
        self.seat(player)?;
        if player != self.current {
            return Err(EngineError::InvalidPlayer(format!(
                "{player} cannot end {}'s turn",
                self.current
            )));
        }

        let drawn = self.draw(player)?;
        self.current = PlayerId::new(((player.index() + 1) % self.player_count()) as u8);
        self.turn_number += 1;
        debug!(next = %self.current, turn = self.turn_number, "turn ended");
        Ok(drawn)
    }

    /// Apply `command` on behalf of `player`.
    pub fn apply(&mut self, player: PlayerId, command: &Command) -> EngineResult<CommandOutcome> {
        let result = match command {
            Command::Place { tile, hotel } => self
                .place_tile(player, *tile, *hotel)
                .map(CommandOutcome::Placed),
            Command::Buy { hotels } => self.buy_shares(player, hotels).map(CommandOutcome::Bought),
            Command::EndTurn => self.end_turn(player).map(|drawn| CommandOutcome::TurnEnded {
                drawn,
                next: self.current,
            }),
        };
        if let Err(err) = &result {
            warn!(%player, ?command, code = err.kind().code(), %err, "command rejected");
        }
        result
    }

    /// Move the next pool tile into `player`'s rack.
    pub(crate) fn draw(&mut self, player: PlayerId) -> EngineResult<Option<Tile>> {
        let Some(&tile) = self.pool.front() else {
            return Ok(None);
        };
        seat_mut(&mut self.players, player)?.add_tile(tile)?;
        self.pool.pop_front();
        Ok(Some(tile))
    }

    fn seat(&self, player: PlayerId) -> EngineResult<&Player> {
        self.players.get(player).ok_or_else(|| unseated(player))
    }
}

fn seat_mut(players: &mut PlayerMap<Player>, player: PlayerId) -> EngineResult<&mut Player> {
    players.get_mut(player).ok_or_else(|| unseated(player))
}

fn unseated(player: PlayerId) -> EngineError {
    EngineError::InvalidPlayer(format!("{player} is not seated at this table"))
}
