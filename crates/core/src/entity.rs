//! Records with a stable identity.

use std::collections::HashMap;

/// A record identified by its id rather than by its field values.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Key records by their own id. A later record with the same id replaces an
/// earlier one, so every key equals the id of its value.
pub fn index_by_id<E, I>(entities: I) -> HashMap<E::Id, E>
where
    E: Entity,
    I: IntoIterator<Item = E>,
{
    entities.into_iter().map(|e| (*e.id(), e)).collect()
}
