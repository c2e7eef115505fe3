//! Card system: definitions, instances, orientation and registry.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data looked up by model id
//! - `CardInstance`: A live card (orientation, face, position, markers)
//! - `Orientation`: The four rotations a card can sit at
//! - `CardRegistry`: Model id lookup; the creation mechanism's resolver
//!
//! ## Model Ids
//!
//! A card's model is the identifier the host uses to create it (a GUID for
//! most games). A model the registry cannot resolve simply produces no card.

pub mod definition;
pub mod instance;
pub mod orientation;
pub mod registry;

pub use definition::CardDefinition;
pub use instance::{CardInstance, MarkerCount, MarkerKey};
pub use orientation::Orientation;
pub use registry::CardRegistry;
