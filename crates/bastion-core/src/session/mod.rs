//! The combat session: turn sequencing, card plays and the enemy turn.
//!
//! A [`CombatSession`] owns one [`Player`] and an ordered list of [`Enemy`]
//! values for the duration of one fight. It is mutated only through
//! [`CombatSession::try_play_card`] (or [`CombatSession::play_card`]),
//! [`CombatSession::end_player_turn`] and [`CombatSession::draw_cards`].
//! Every operation runs to completion before returning; the whole enemy turn
//! happens inside `end_player_turn`.
//!
//! # Turn Flow
//!
//! ```text
//! start ─► PlayerTurn ──end_player_turn──► EnemyTurn ──► PlayerTurn (turn + 1)
//!              │                               │
//!              └── all enemies dead ─► Victory └── player dead ─► Defeat
//! ```
//!
//! Termination is a predicate ([`CombatSession::is_combat_over`]), recomputed
//! from combatant state on every call. A finished session is not torn down;
//! [`CombatSession::conclude`] hands the player back with every card returned
//! to the deck.
//!
//! # Determinism
//!
//! The only randomness is pile shuffling, drawn from a `ChaCha8Rng` seeded at
//! start. Two sessions started from the same seed, player and enemies, and
//! driven by the same calls, produce identical logs and state.
//!
//! # Example
//!
//! ```
//! use bastion_core::catalog::{CardCatalog, EnemyKind};
//! use bastion_core::entity::CharacterClass;
//! use bastion_core::session::CombatSession;
//!
//! let mut catalog = CardCatalog::new();
//! let player = catalog.new_player(CharacterClass::Knight);
//! let mut session = CombatSession::start_seeded(player, vec![EnemyKind::Bandit.spawn()], 7);
//!
//! assert_eq!(session.hand().len(), 5);
//! let target = session.enemies()[0].id();
//! let card = session.hand()[0].id();
//! session.play_card(card, Some(target));
//! session.end_player_turn();
//!
//! assert_eq!(session.turn(), 2);
//! assert!(!session.is_combat_over());
//! ```

mod snapshot;

pub use snapshot::{CombatSnapshot, EnemySnapshot, PlayerSnapshot};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::config::CombatConfig;
use crate::entity::{Combatant, Enemy, EnemyId, Player};
use crate::error::{ConfigError, PlayError};
use crate::event::{CombatEvent, CombatLog};
use crate::resolver::effect::{draw_cards, EffectContext};
use crate::resolver::intent::{execute_intent, Intent};

// =============================================================================
// Outcomes
// =============================================================================

/// Rewards accrued on victory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRewards {
    /// Sum of every enemy's gold reward. Already added to the player.
    pub gold: u32,
    /// Enemies whose defeat makes a card reward available, in enemy order.
    pub card_reward_sources: Vec<EnemyId>,
}

impl CombatRewards {
    /// True if at least one defeated enemy grants a card reward.
    #[must_use]
    pub fn offers_card(&self) -> bool {
        !self.card_reward_sources.is_empty()
    }
}

/// Result of a successful card play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    /// The card played.
    pub card: CardId,
    /// Energy the card cost.
    pub energy_spent: u32,
    /// Energy left afterwards.
    pub energy_left: u32,
    /// Enemies this play killed, in enemy order.
    pub enemies_defeated: Vec<EnemyId>,
    /// True if this play won the combat.
    pub victory: bool,
}

// =============================================================================
// Combat Session
// =============================================================================

/// One fight between the player and a group of enemies.
#[derive(Debug, Clone)]
pub struct CombatSession {
    player: Player,
    enemies: Vec<Enemy>,
    turn: u32,
    is_player_turn: bool,
    log: CombatLog,
    config: CombatConfig,
    rng: ChaCha8Rng,
    seed: u64,
    rewards: Option<CombatRewards>,
}

impl CombatSession {
    /// Starts combat with a seed drawn from the process-level source.
    #[must_use]
    pub fn start(player: Player, enemies: Vec<Enemy>) -> Self {
        Self::start_seeded(player, enemies, rand::random())
    }

    /// Starts combat with the standard rules and an explicit shuffle seed.
    #[must_use]
    pub fn start_seeded(player: Player, enemies: Vec<Enemy>, seed: u64) -> Self {
        Self::begin(player, enemies, seed, CombatConfig::default())
    }

    /// Starts combat with custom rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `config` fails validation.
    pub fn start_with_config(
        player: Player,
        enemies: Vec<Enemy>,
        seed: u64,
        config: CombatConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::begin(player, enemies, seed, config))
    }

    fn begin(mut player: Player, mut enemies: Vec<Enemy>, seed: u64, config: CombatConfig) -> Self {
        for (slot, enemy) in (0u32..).zip(enemies.iter_mut()) {
            enemy.set_id(EnemyId::new(slot));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        player.piles_mut().begin_combat(&mut rng);
        player.vitals_mut().reset_block();
        player.reset_energy();

        let mut session = Self {
            player,
            enemies,
            turn: 1,
            is_player_turn: true,
            log: CombatLog::new(),
            config,
            rng,
            seed,
            rewards: None,
        };

        tracing::info!(seed, enemies = session.enemies.len(), "combat started");
        session.log.push(CombatEvent::CombatStarted);
        let drawn = session.draw_cards(session.config.hand_size);
        session.log.push(CombatEvent::OpeningHand { drawn });
        session
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Plays a card from the hand, optionally at an enemy.
    ///
    /// Validation happens before any mutation, in this order: the card must
    /// be in hand (silent failure, not logged), combat must not be over, and
    /// the player must afford the cost (logged). A rejected play changes
    /// nothing but the log.
    ///
    /// On success the card leaves the hand, its effects resolve in order, the
    /// card goes to the discard pile and, if every enemy is now dead, the
    /// victory is recorded and gold awarded.
    ///
    /// # Errors
    ///
    /// See [`PlayError`].
    pub fn try_play_card(
        &mut self,
        card: CardId,
        target: Option<EnemyId>,
    ) -> Result<PlayReport, PlayError> {
        let Some(found) = self.player.piles().find_in_hand(card) else {
            tracing::warn!(%card, "attempted to play a card that is not in hand");
            return Err(PlayError::CardNotInHand(card));
        };
        let name = found.name().to_string();
        let cost = found.cost();

        if self.is_combat_over() {
            self.log.push(CombatEvent::CombatAlreadyOver { card: name });
            return Err(PlayError::CombatOver);
        }

        let available = self.player.energy();
        if !self.player.can_afford(cost) {
            self.log.push(CombatEvent::NotEnoughEnergy {
                card: name.clone(),
                cost,
                available,
            });
            return Err(PlayError::InsufficientEnergy {
                card: name,
                cost,
                available,
            });
        }

        let played = self
            .player
            .piles_mut()
            .take_from_hand(card)
            .ok_or(PlayError::CardNotInHand(card))?;
        let spent = self.player.spend_energy(cost);
        debug_assert!(spent, "affordability was checked above");

        self.log.push(CombatEvent::CardPlayed {
            card: name.clone(),
            energy: self.player.energy(),
            max_energy: self.player.max_energy(),
        });

        let alive_before: Vec<EnemyId> = self.living_enemies().map(Enemy::id).collect();
        {
            let mut ctx = EffectContext {
                player: &mut self.player,
                enemies: &mut self.enemies,
                log: &mut self.log,
                rng: &mut self.rng,
                config: &self.config,
            };
            for effect in played.effects() {
                ctx.apply(&name, effect, target);
            }
        }
        self.player.piles_mut().discard(played);

        let enemies_defeated = alive_before
            .into_iter()
            .filter(|id| self.enemies[id.index()].is_dead())
            .collect();

        let victory = self.player_won();
        if victory {
            self.record_victory();
        }

        Ok(PlayReport {
            card,
            energy_spent: cost,
            energy_left: self.player.energy(),
            enemies_defeated,
            victory,
        })
    }

    /// Boolean form of [`Self::try_play_card`].
    pub fn play_card(&mut self, card: CardId, target: Option<EnemyId>) -> bool {
        self.try_play_card(card, target).is_ok()
    }

    /// Ends the player's turn: discards the hand, runs every living enemy's
    /// action, then starts the next player turn unless the player died.
    ///
    /// Does nothing once combat is over.
    pub fn end_player_turn(&mut self) {
        if self.is_combat_over() {
            tracing::debug!(turn = self.turn, "end_player_turn after combat ended, ignored");
            return;
        }

        self.is_player_turn = false;
        let discarded = self.player.piles_mut().discard_hand();
        self.log.push(CombatEvent::TurnEnded { discarded });

        self.run_enemy_turn();

        if self.player.is_dead() {
            self.record_defeat();
        } else {
            self.start_player_turn();
        }
    }

    /// Draws up to `count` cards, reshuffling the discard pile whenever the
    /// draw pile runs out. Returns how many cards reached the hand.
    pub fn draw_cards(&mut self, count: u32) -> usize {
        draw_cards(&mut self.player, &mut self.log, &mut self.rng, count)
    }

    /// Ends the session and returns the player with every card gathered back
    /// into the deck and block cleared.
    #[must_use]
    pub fn conclude(mut self) -> Player {
        self.player.piles_mut().gather_into_deck();
        self.player.vitals_mut().reset_block();
        tracing::debug!(
            turn = self.turn,
            won = self.player_won(),
            "combat session concluded"
        );
        self.player
    }

    // -------------------------------------------------------------------------
    // Turn internals
    // -------------------------------------------------------------------------

    fn run_enemy_turn(&mut self) {
        self.log.push(CombatEvent::EnemyTurnStarted);

        for enemy in &mut self.enemies {
            if enemy.is_dead() {
                continue;
            }
            enemy.vitals_mut().reset_block();

            let Some(outcome) = execute_intent(enemy, &mut self.player, &self.config) else {
                continue;
            };
            self.log.push(CombatEvent::EnemyAction {
                enemy: enemy.name().to_string(),
                intent: outcome.intent,
            });

            if self.player.is_dead() {
                self.log.push(CombatEvent::PlayerDefeated);
                break;
            }
        }
    }

    fn start_player_turn(&mut self) {
        self.turn += 1;
        self.log.set_turn(self.turn);
        self.is_player_turn = true;

        self.player.vitals_mut().reset_block();
        self.player.reset_energy();
        self.player.vitals_mut().statuses_mut().tick();

        self.log.push(CombatEvent::TurnStarted { turn: self.turn });
        let drawn = self.draw_cards(self.config.hand_size);
        self.log.push(CombatEvent::TurnHand {
            drawn,
            energy: self.player.energy(),
            max_energy: self.player.max_energy(),
        });
    }

    fn record_victory(&mut self) {
        let gold = self
            .enemies
            .iter()
            .map(Enemy::gold_reward)
            .fold(0u32, u32::saturating_add);
        let card_reward_sources = self
            .enemies
            .iter()
            .filter(|enemy| enemy.grants_card_reward())
            .map(Enemy::id)
            .collect();

        self.player.add_gold(gold);
        self.log.push(CombatEvent::Victory);
        self.log.push(CombatEvent::GoldGained { amount: gold });
        tracing::info!(turn = self.turn, gold, "combat won");

        self.rewards = Some(CombatRewards {
            gold,
            card_reward_sources,
        });
    }

    fn record_defeat(&mut self) {
        self.log.push(CombatEvent::Defeat);
        tracing::info!(turn = self.turn, "combat lost");
    }

    fn living_enemies(&self) -> impl Iterator<Item = &Enemy> + '_ {
        self.enemies.iter().filter(|enemy| !enemy.is_dead())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// True once the player is dead or every enemy is dead.
    #[must_use]
    pub fn is_combat_over(&self) -> bool {
        self.player.is_dead() || self.living_enemies().next().is_none()
    }

    /// True if the player is alive and every enemy is dead.
    #[must_use]
    pub fn player_won(&self) -> bool {
        !self.player.is_dead() && self.living_enemies().next().is_none()
    }

    /// The append-only combat log.
    #[must_use]
    pub fn combat_log(&self) -> &CombatLog {
        &self.log
    }

    /// The last `n` log lines, oldest first.
    #[must_use]
    pub fn recent_log(&self, n: usize) -> Vec<String> {
        self.log.recent(n)
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub(crate) fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    /// Every enemy, dead or alive, in iteration order.
    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Looks up an enemy by id.
    #[must_use]
    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id.index())
    }

    /// The enemy's telegraphed next action, or `None` if it is dead or unknown.
    #[must_use]
    pub fn intent_of(&self, id: EnemyId) -> Option<Intent> {
        self.enemy(id)
            .filter(|enemy| !enemy.is_dead())
            .map(Enemy::current_intent)
    }

    /// Cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.player.piles().hand()
    }

    /// Draw pile, front first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> + '_ {
        self.player.piles().draw_pile()
    }

    /// Discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        self.player.piles().discard_pile()
    }

    /// Exhaust pile.
    #[must_use]
    pub fn exhaust_pile(&self) -> &[Card] {
        self.player.piles().exhaust_pile()
    }

    /// Current turn number, starting at 1.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// True while the player may act.
    #[must_use]
    pub const fn is_player_turn(&self) -> bool {
        self.is_player_turn
    }

    /// Shuffle seed, for replay.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Rules in force.
    #[must_use]
    pub const fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Victory rewards, once the combat has been won.
    #[must_use]
    pub const fn rewards(&self) -> Option<&CombatRewards> {
        self.rewards.as_ref()
    }

    /// Serializable view of the whole session.
    #[must_use]
    pub fn snapshot(&self) -> CombatSnapshot {
        CombatSnapshot::capture(self)
    }
}
