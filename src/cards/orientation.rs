//! Card orientation.
//!
//! On disk an orientation is an integer code 0..=3. Anything else read from
//! a hand-edited or foreign file (another integer, `null`, a string)
//! resolves to `Rot0` instead of failing the load.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the four rotations a card can sit at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Rot0,
    Rot90,
    Rot180,
    Rot270,
}

impl Orientation {
    /// All orientations, in code order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Rot0,
        Orientation::Rot90,
        Orientation::Rot180,
        Orientation::Rot270,
    ];

    /// Resolve a stored code. Unknown codes map to `Rot0`.
    ///
    /// ```
    /// use table_state::cards::Orientation;
    ///
    /// assert_eq!(Orientation::from_code(1), Orientation::Rot90);
    /// assert_eq!(Orientation::from_code(9), Orientation::Rot0);
    /// ```
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Orientation::Rot90,
            2 => Orientation::Rot180,
            3 => Orientation::Rot270,
            _ => Orientation::Rot0,
        }
    }

    /// Stored code (0..=3).
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Orientation::Rot0 => 0,
            Orientation::Rot90 => 1,
            Orientation::Rot180 => 2,
            Orientation::Rot270 => 3,
        }
    }
}

impl Serialize for Orientation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for Orientation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Binary formats cannot describe themselves; they always carry the code.
        if !deserializer.is_human_readable() {
            return i64::deserialize(deserializer).map(Orientation::from_code);
        }
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_i64().map_or(Orientation::Rot0, Orientation::from_code))
    }
}
