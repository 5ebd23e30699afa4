//! Gold and lives. The engine owns the single `Economy`; systems get it by
//! `&mut` and the UI reads it through snapshots.

use serde::{Deserialize, Serialize};

use rampart_core::error::CommandError;
use rampart_core::state::EconomyView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    pub gold: u32,
    pub lives: u32,
}

impl Economy {
    pub fn new(gold: u32, lives: u32) -> Self {
        Self { gold, lives }
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.gold >= cost
    }

    /// Deduct `cost`, or leave gold untouched and report the shortfall.
    pub fn spend(&mut self, cost: u32) -> Result<(), CommandError> {
        if !self.can_afford(cost) {
            return Err(CommandError::InsufficientGold {
                needed: cost,
                available: self.gold,
            });
        }
        self.gold -= cost;
        Ok(())
    }

    pub fn earn(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Remove one life and return how many are left.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn is_defeated(&self) -> bool {
        self.lives == 0
    }

    pub fn view(&self) -> EconomyView {
        EconomyView {
            gold: self.gold,
            lives: self.lives,
        }
    }
}
