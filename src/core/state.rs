//! Live table state.
//!
//! ## GameState
//!
//! The explicit context every codec works against:
//! - Card registry (the creation mechanism's model resolver)
//! - Card arena keyed by `EntityId`
//! - Loose cards on the table, in placement order
//! - Shared area (piles + counters)
//! - Connected players
//! - The local actor ("me"): the only participant whose entities this
//!   process may mutate directly
//!
//! Cards are only ever created through `create_card`, which refuses models
//! the registry cannot resolve and destinations that do not exist.

use rustc_hash::FxHashMap;

use super::config::TableConfig;
use super::entity::EntityId;
use super::player::{Player, PlayerId};
use crate::cards::{CardDefinition, CardInstance, CardRegistry};
use crate::piles::{Counters, Pile, PileRef};

/// Where a new card is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Loose on the table at the given coordinates.
    Table { x: i32, y: i32 },
    /// Inserted into a pile through its insertion contract.
    Pile(PileRef),
}

/// Piles and counters not owned by any player.
#[derive(Clone, Debug, Default)]
pub struct SharedArea {
    pub piles: Vec<Pile>,
    pub counters: Counters,
}

impl SharedArea {
    /// Look up a shared pile by name.
    #[must_use]
    pub fn pile(&self, name: &str) -> Option<&Pile> {
        self.piles.iter().find(|p| p.name() == name)
    }

    /// Look up a shared pile mutably.
    pub fn pile_mut(&mut self, name: &str) -> Option<&mut Pile> {
        self.piles.iter_mut().find(|p| p.name() == name)
    }

    #[must_use]
    pub fn has_pile(&self, name: &str) -> bool {
        self.pile(name).is_some()
    }
}

/// Full live table state as seen by one participant.
#[derive(Clone, Debug)]
pub struct GameState {
    registry: CardRegistry,

    /// Card instances by entity ID.
    cards: FxHashMap<EntityId, CardInstance>,

    /// Loose table cards, in placement order.
    table: Vec<EntityId>,

    /// Shared piles and counters.
    pub shared: SharedArea,

    /// Connected players.
    players: Vec<Player>,

    local_player: PlayerId,

    /// Next entity ID to allocate.
    next_entity_id: EntityId,
}

impl GameState {
    /// Create an empty state with no shared piles and no players.
    #[must_use]
    pub fn new(registry: CardRegistry, local_player: PlayerId) -> Self {
        Self {
            registry,
            cards: FxHashMap::default(),
            table: Vec::new(),
            shared: SharedArea::default(),
            players: Vec::new(),
            local_player,
            next_entity_id: EntityId::FIRST,
        }
    }

    /// Create a state laid out by `config`, with one player per seat.
    #[must_use]
    pub fn from_config(
        config: &TableConfig,
        registry: CardRegistry,
        local_player: PlayerId,
        seats: &[(PlayerId, &str)],
    ) -> Self {
        let mut state = Self::new(registry, local_player);
        state.shared = SharedArea {
            piles: config.build_shared_piles(),
            counters: config.build_shared_counters(),
        };
        for &(id, name) in seats {
            state.connect_player(config.build_player(id, name));
        }
        state
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// The participant this process acts for.
    #[must_use]
    pub fn local_player(&self) -> PlayerId {
        self.local_player
    }

    // === Players ===

    /// Currently connected players, in connection order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    /// Connect a player. A player already connected under the same id is replaced.
    pub fn connect_player(&mut self, player: Player) {
        self.disconnect_player(player.id());
        self.players.push(player);
    }

    /// Disconnect a player, dropping the cards in their hand and piles.
    pub fn disconnect_player(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id() == id)?;
        let player = self.players.remove(index);
        for entity in player.hand.cards().iter().chain(player.piles.iter().flat_map(|p| p.cards())) {
            self.cards.remove(entity);
        }
        Some(player)
    }

    // === Cards ===

    #[must_use]
    pub fn card(&self, entity_id: EntityId) -> Option<&CardInstance> {
        self.cards.get(&entity_id)
    }

    pub fn card_mut(&mut self, entity_id: EntityId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&entity_id)
    }

    /// Definition of a live card's model.
    #[must_use]
    pub fn definition(&self, entity_id: EntityId) -> Option<&CardDefinition> {
        self.card(entity_id).and_then(|c| self.registry.get(&c.model))
    }

    /// Total number of live cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Loose table cards, in placement order.
    #[must_use]
    pub fn table_cards(&self) -> &[EntityId] {
        &self.table
    }

    /// Create a card from a model id.
    ///
    /// Returns `None` if the model is unknown or the destination pile does
    /// not exist; nothing is created in that case.
    pub fn create_card(&mut self, model: &str, destination: &Destination) -> Option<EntityId> {
        if !self.registry.contains(model) {
            log::debug!("cannot create unknown model {}", model);
            return None;
        }

        let entity_id = self.next_entity_id;
        let card = match destination {
            Destination::Table { x, y } => {
                self.table.push(entity_id);
                CardInstance::new(entity_id, model, Some(self.local_player)).at(*x, *y)
            }
            Destination::Pile(pile_ref) => {
                let Some(pile) = self.pile_mut(pile_ref) else {
                    log::debug!("cannot create {} in missing pile {}", model, pile_ref);
                    return None;
                };
                pile.insert(entity_id);
                CardInstance::new(entity_id, model, pile.owner())
            }
        };

        self.next_entity_id = entity_id.next();
        self.cards.insert(entity_id, card);
        Some(entity_id)
    }

    /// Remove a card from wherever it is.
    pub fn remove_card(&mut self, entity_id: EntityId) -> Option<CardInstance> {
        let card = self.cards.remove(&entity_id)?;
        self.detach(entity_id);
        Some(card)
    }

    /// Move a live card to `destination`, keeping its state.
    ///
    /// Cards moved into a pile lose their table position. Returns false and
    /// changes nothing if the card or the destination pile does not exist.
    pub fn move_card(&mut self, entity_id: EntityId, destination: &Destination) -> bool {
        if !self.cards.contains_key(&entity_id) {
            return false;
        }
        if let Destination::Pile(pile_ref) = destination {
            if self.pile(pile_ref).is_none() {
                log::debug!("cannot move {} to missing pile {}", entity_id, pile_ref);
                return false;
            }
        }

        self.detach(entity_id);
        let position = match destination {
            Destination::Table { x, y } => {
                self.table.push(entity_id);
                Some((*x, *y))
            }
            Destination::Pile(pile_ref) => {
                if let Some(pile) = self.pile_mut(pile_ref) {
                    pile.insert(entity_id);
                }
                None
            }
        };
        if let Some(card) = self.cards.get_mut(&entity_id) {
            card.position = position;
        }
        true
    }

    /// Move a card into the shared trash pile, which snapshots never carry.
    pub fn move_to_trash(&mut self, entity_id: EntityId, config: &TableConfig) -> bool {
        let trash = Destination::Pile(PileRef::Shared(config.trash_pile.clone()));
        self.move_card(entity_id, &trash)
    }

    /// Remove every card from the table, the shared piles and all players.
    ///
    /// Counters, piles and players stay as they are.
    pub fn clear_cards(&mut self) {
        self.table.clear();
        for pile in self.piles_mut() {
            pile.take_all();
        }
        self.cards.clear();
    }

    // === Piles ===

    /// Resolve a pile reference against live state.
    #[must_use]
    pub fn pile(&self, pile_ref: &PileRef) -> Option<&Pile> {
        match pile_ref {
            PileRef::Shared(name) => self.shared.pile(name),
            PileRef::Hand(player) => self.player(*player).map(|p| &p.hand),
            PileRef::Player(player, name) => self.player(*player).and_then(|p| p.pile(name)),
        }
    }

    /// Resolve a pile reference mutably.
    pub fn pile_mut(&mut self, pile_ref: &PileRef) -> Option<&mut Pile> {
        match pile_ref {
            PileRef::Shared(name) => self.shared.pile_mut(name),
            PileRef::Hand(player) => self.player_mut(*player).map(|p| &mut p.hand),
            PileRef::Player(player, name) => {
                self.player_mut(*player).and_then(|p| p.pile_mut(name))
            }
        }
    }

    fn detach(&mut self, entity_id: EntityId) {
        self.table.retain(|&e| e != entity_id);
        for pile in self.piles_mut() {
            if pile.remove(entity_id) {
                break;
            }
        }
    }

    fn piles_mut(&mut self) -> impl Iterator<Item = &mut Pile> {
        self.shared.piles.iter_mut().chain(
            self.players
                .iter_mut()
                .flat_map(|p| std::iter::once(&mut p.hand).chain(p.piles.iter_mut())),
        )
    }
}
