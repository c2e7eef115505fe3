//! Card codec.

use super::records::{CardRecord, MarkerRecord};
use crate::cards::{CardInstance, MarkerKey};
use crate::core::entity::EntityId;
use crate::core::state::{Destination, GameState};

/// Project a live card into a record.
#[must_use]
pub fn encode_card(card: &CardInstance) -> CardRecord {
    CardRecord {
        model: card.model.clone(),
        orientation: card.orientation,
        is_face_up: Some(card.face_up),
        position: card.position,
        markers: card.has_markers().then(|| {
            card.markers()
                .iter()
                .map(|m| MarkerRecord {
                    name: m.key.name.clone(),
                    model: m.key.model.clone(),
                    qty: m.qty,
                })
                .collect()
        }),
    }
}

/// Recreate a card from a record at `destination`.
///
/// Orientation is always applied; face-up only when the record carries it;
/// markers are set by `(name, model)`, a later duplicate winning. Returns
/// `None` when the destination cannot create the model. That is tolerated:
/// the rest of the load carries on without the card.
pub fn decode_card(
    state: &mut GameState,
    record: &CardRecord,
    destination: &Destination,
) -> Option<EntityId> {
    let entity_id = state.create_card(&record.model, destination)?;
    let card = state.card_mut(entity_id)?;

    card.orientation = record.orientation;
    if let Some(face_up) = record.is_face_up {
        card.face_up = face_up;
    }
    for marker in record.markers.iter().flatten() {
        card.set_marker(MarkerKey::new(&marker.name, &marker.model), marker.qty);
    }

    Some(entity_id)
}

/// Recreate a loose table card at its recorded position (origin if absent).
pub fn decode_table_card(state: &mut GameState, record: &CardRecord) -> Option<EntityId> {
    let (x, y) = record.position.unwrap_or_default();
    decode_card(state, record, &Destination::Table { x, y })
}
