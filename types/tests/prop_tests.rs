use proptest::prelude::*;

use grove_types::{ItemId, PlayerAddress, Timestamp};

proptest! {
    /// ItemId roundtrip: new -> raw produces the input.
    #[test]
    fn item_id_roundtrip(raw in 0u64..u64::MAX) {
        let id = ItemId::new(raw);
        prop_assert_eq!(id.raw(), raw);
    }

    /// ItemId bincode serialization roundtrip.
    #[test]
    fn item_id_bincode_roundtrip(raw in 0u64..u64::MAX) {
        let id = ItemId::new(raw);
        let encoded = bincode::serialize(&id).unwrap();
        let decoded: ItemId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Timestamp elapsed_since: elapsed_since(now) = now - self (saturating).
    #[test]
    fn timestamp_elapsed_since(base in 0u64..1_000_000, offset in 0u64..1_000_000) {
        let t = Timestamp::new(base);
        let now = Timestamp::new(base + offset);
        prop_assert_eq!(t.elapsed_since(now), offset);
    }

    /// Timestamp elapsed_since saturates to 0 when now < self.
    #[test]
    fn timestamp_elapsed_since_saturates(
        base in 1u64..1_000_000,
        deficit in 1u64..1_000_000,
    ) {
        let later = Timestamp::new(base + deficit);
        let earlier = Timestamp::new(base);
        prop_assert_eq!(later.elapsed_since(earlier), 0);
    }

    /// Timestamp has_expired agrees with manual arithmetic.
    #[test]
    fn timestamp_has_expired_correct(
        start in 0u64..500_000,
        duration in 1u64..500_000,
        offset in 0u64..1_000_000,
    ) {
        let t = Timestamp::new(start);
        let now = Timestamp::new(start.saturating_add(offset));
        prop_assert_eq!(t.has_expired(duration, now), offset >= duration);
    }

    /// PlayerAddress keeps the raw string intact.
    #[test]
    fn player_address_roundtrip(suffix in "[a-z0-9]{8,64}") {
        let raw = format!("grv_{}", suffix);
        let addr = PlayerAddress::new(raw.clone());
        prop_assert_eq!(addr.as_str(), raw.as_str());
        prop_assert!(addr.is_valid());
    }

    /// PlayerAddress bincode serialization roundtrip.
    #[test]
    fn player_address_bincode_roundtrip(suffix in "[a-z0-9]{8,64}") {
        let addr = PlayerAddress::new(format!("grv_{}", suffix));
        let encoded = bincode::serialize(&addr).unwrap();
        let decoded: PlayerAddress = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, addr);
    }
}
