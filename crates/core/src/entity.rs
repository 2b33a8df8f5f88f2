//! Entity trait: identity + continuity across state changes.

use std::collections::HashSet;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Collect the identifiers of a collection for membership checks.
pub fn id_set<E: Entity>(records: &[E]) -> HashSet<&E::Id> {
    records.iter().map(Entity::id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        id: u32,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    #[test]
    fn id_set_deduplicates() {
        let rows = vec![Row { id: 1 }, Row { id: 2 }, Row { id: 1 }];

        let ids = id_set(&rows);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&2));
        assert!(!ids.contains(&9));
    }
}
