//! Counter codec.

use super::records::CounterMap;
use crate::piles::Counters;

/// Encode a counter collection. An empty collection encodes as `None`.
#[must_use]
pub fn encode_counters(counters: &Counters) -> Option<CounterMap> {
    if counters.is_empty() {
        return None;
    }
    Some(
        counters
            .iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    )
}

/// Apply stored values onto an existing counter collection.
///
/// Only counters the target already has are updated; `None` or an empty
/// map changes nothing.
pub fn decode_counters(map: Option<&CounterMap>, target: &mut Counters) {
    for (name, &value) in map.into_iter().flatten() {
        if !target.set(name, value) {
            log::debug!("skip unknown counter {}", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty_is_none() {
        assert_eq!(encode_counters(&Counters::new()), None);
    }

    #[test]
    fn test_encode_zero_valued_is_some() {
        let counters = Counters::new().with_counter("Threat", 0);
        let map = encode_counters(&counters).unwrap();
        assert_eq!(map.get("Threat"), Some(&0));
    }

    #[test]
    fn test_decode_known_only() {
        let mut target = Counters::new()
            .with_counter("Threat", 25)
            .with_counter("Score", 0);
        let map = CounterMap::from([
            ("Threat".to_string(), 31),
            ("Victory".to_string(), 5),
        ]);

        decode_counters(Some(&map), &mut target);

        assert_eq!(target.get("Threat"), Some(31));
        assert_eq!(target.get("Score"), Some(0));
        assert!(!target.contains("Victory"));
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn test_decode_none_or_empty_is_noop() {
        let before = Counters::new().with_counter("Threat", 25);

        let mut target = before.clone();
        decode_counters(None, &mut target);
        assert_eq!(target, before);

        decode_counters(Some(&CounterMap::new()), &mut target);
        assert_eq!(target, before);
    }

    #[test]
    fn test_round_trip() {
        let source = Counters::new()
            .with_counter("Threat", 33)
            .with_counter("Score", 7);
        let mut target = Counters::new()
            .with_counter("Threat", 0)
            .with_counter("Score", 0);

        decode_counters(encode_counters(&source).as_ref(), &mut target);

        assert_eq!(target, source);
    }
}
