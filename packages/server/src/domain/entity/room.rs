//! Room entity: one match between two players.

use serde::Serialize;

use crate::domain::{ConnectionId, Mark, RoomError, RoomId, Timestamp};

use super::{Board, Outcome, Player};

/// A room never holds more than this many players.
pub const MAX_PLAYERS: usize = 2;

/// Result of a move accepted by [`Room::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    Winner(Mark),
    Draw,
}

impl From<Outcome> for MoveOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(mark) => MoveOutcome::Winner(mark),
            Outcome::Draw => MoveOutcome::Draw,
            Outcome::InProgress => MoveOutcome::Continue,
        }
    }
}

/// Phase of the match, derived from the slots and the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// Fewer than two players, or slots not assigned yet.
    Waiting,
    Playing,
    Finished,
}

/// Room entity
///
/// Owns its board and the X/O slot assignment. Players are kept in join
/// order; both slots are either unset or point at the two distinct members.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub created_at: Timestamp,
    players: Vec<Player>,
    x_player: Option<ConnectionId>,
    o_player: Option<ConnectionId>,
    board: Board,
    /// Set by the first slot assignment and never cleared.
    started: bool,
}

impl Room {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            players: Vec::with_capacity(MAX_PLAYERS),
            x_player: None,
            o_player: None,
            board: Board::new(),
            started: false,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, connection_id: &ConnectionId) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.connection_id() == connection_id)
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.player(connection_id).is_some()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_full(&self) -> bool {
        self.players.len() == MAX_PLAYERS
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All members, in join order.
    pub fn connection_ids(&self) -> Vec<ConnectionId> {
        self.players
            .iter()
            .map(|p| p.connection_id().clone())
            .collect()
    }

    /// All members except `exclude`.
    pub fn connection_ids_except(&self, exclude: &ConnectionId) -> Vec<ConnectionId> {
        self.players
            .iter()
            .map(Player::connection_id)
            .filter(|id| *id != exclude)
            .cloned()
            .collect()
    }

    /// Names of the members other than `exclude`, in join order.
    pub fn other_player_names(&self, exclude: &ConnectionId) -> Vec<String> {
        self.players
            .iter()
            .filter(|p| p.connection_id() != exclude)
            .map(|p| p.name().to_string())
            .collect()
    }

    pub fn add_player(&mut self, player: Player) -> Result<(), RoomError> {
        if self.is_full() {
            return Err(RoomError::RoomFull);
        }
        self.players.push(player);
        Ok(())
    }

    /// Remove the player bound to `connection_id`. Removing anyone ends the
    /// current match, so both slots are cleared.
    pub fn remove_player(&mut self, connection_id: &ConnectionId) -> Option<Player> {
        let index = self
            .players
            .iter()
            .position(|p| p.connection_id() == connection_id)?;
        self.x_player = None;
        self.o_player = None;
        Some(self.players.remove(index))
    }

    /// Give X to `first` and O to `second`. Both must be members and distinct.
    pub fn assign_slots(
        &mut self,
        first: &ConnectionId,
        second: &ConnectionId,
    ) -> Result<(), RoomError> {
        if self.has_both_slots() {
            return Err(RoomError::DuplicateSlotAssignment);
        }
        if !self.is_full() || first == second || !self.contains(first) || !self.contains(second)
        {
            return Err(RoomError::InvalidSlotAssignment);
        }
        self.x_player = Some(first.clone());
        self.o_player = Some(second.clone());
        self.started = true;
        Ok(())
    }

    /// Exchange X and O between the two players (rematch colour swap).
    pub fn swap_slots(&mut self) -> Result<(), RoomError> {
        if !self.has_both_slots() {
            return Err(RoomError::GameNotStarted);
        }
        std::mem::swap(&mut self.x_player, &mut self.o_player);
        Ok(())
    }

    /// Whether the room ever reached two players with assigned slots.
    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn has_both_slots(&self) -> bool {
        self.x_player.is_some() && self.o_player.is_some()
    }

    pub fn x_player(&self) -> Option<&Player> {
        self.x_player.as_ref().and_then(|id| self.player(id))
    }

    pub fn o_player(&self) -> Option<&Player> {
        self.o_player.as_ref().and_then(|id| self.player(id))
    }

    /// Slot held by `connection_id`, if any.
    pub fn role_of(&self, connection_id: &ConnectionId) -> Option<Mark> {
        if self.x_player.as_ref() == Some(connection_id) {
            Some(Mark::X)
        } else if self.o_player.as_ref() == Some(connection_id) {
            Some(Mark::O)
        } else {
            None
        }
    }

    pub fn status(&self) -> RoomStatus {
        if !self.has_both_slots() {
            return RoomStatus::Waiting;
        }
        match self.board.evaluate() {
            Outcome::InProgress => RoomStatus::Playing,
            Outcome::Win(_) | Outcome::Draw => RoomStatus::Finished,
        }
    }

    /// Apply `mover`'s move and evaluate the board.
    ///
    /// The move must come from a slotted member, carry that member's mark,
    /// match the board's turn and target an empty cell of a running game.
    /// A rejected move leaves the board untouched.
    pub fn apply_move(
        &mut self,
        mover: &ConnectionId,
        position: usize,
        mark: Mark,
    ) -> Result<MoveOutcome, RoomError> {
        match self.status() {
            RoomStatus::Waiting => return Err(RoomError::GameNotStarted),
            RoomStatus::Finished => return Err(RoomError::GameFinished),
            RoomStatus::Playing => {}
        }

        let role = self
            .role_of(mover)
            .ok_or_else(|| RoomError::NotInRoom(mover.to_string()))?;
        if role != mark {
            return Err(RoomError::WrongMark(mark.to_string()));
        }
        if self.board.next_mark() != mark {
            return Err(RoomError::NotYourTurn(mark.to_string()));
        }

        self.board.place(position, mark)?;
        Ok(self.board.evaluate().into())
    }

    pub fn reset_board(&mut self) {
        self.board.reset();
    }
}
