//! Player registry: the two named players of a session.

use crate::{Mark, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A named player and the mark they play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Display name, never empty.
    name: String,
    /// Mark placed by this player.
    mark: Mark,
}

impl Player {
    /// Default name for an unnamed player in the given seat.
    pub fn default_name(seat: Seat) -> String {
        format!("Player {}", seat.number())
    }
}

/// Holds the two players of the current session.
///
/// Starts out with both players under their default names, so the controller
/// always has someone to attribute a move to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: [Player; 2],
}

impl PlayerRegistry {
    /// Creates a registry holding the two default players.
    pub fn new() -> Self {
        Self {
            players: Seat::ALL.map(|seat| Player::new(Player::default_name(seat), seat.mark())),
        }
    }

    /// Replaces both players.
    ///
    /// Blank names fall back to "Player 1" / "Player 2". The first seat
    /// always plays X and the second O.
    #[instrument(skip(self))]
    pub fn create(&mut self, name_a: &str, name_b: &str) {
        let names = [name_a, name_b];
        self.players = Seat::ALL.map(|seat| {
            let candidate = names[seat.index()].trim();
            let name = if candidate.is_empty() {
                debug!(seat = seat.number(), "Empty name, using default");
                Player::default_name(seat)
            } else {
                candidate.to_string()
            };
            Player::new(name, seat.mark())
        });
        info!(
            first = %self.players[0].name,
            second = %self.players[1].name,
            "Players created"
        );
    }

    /// Returns the player in the given seat.
    pub fn get(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns a copy of both players, in seat order.
    pub fn all(&self) -> [Player; 2] {
        self.players.clone()
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
