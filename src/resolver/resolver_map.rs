use std::{borrow::Borrow, hash::Hash};

use hashbrown::HashMap;

use super::{Fut, Lost};

pub enum Slot<V> {
    Waiting,
    Ready(V),
    Failed,
}

impl<V> Slot<V> {
    pub const fn as_option(&self) -> Option<&V> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Waiting | Self::Failed => None,
        }
    }
}

/// Values looked up by key, resolved in the background on first request.
/// A failed lookup is remembered and not retried.
pub struct ResolverMap<K, V> {
    map: HashMap<K, Slot<V>>,
    pending: Vec<Fut<(K, Option<V>)>>,
}

impl<K, V> Default for ResolverMap<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            pending: Vec::new(),
        }
    }
}

impl<K, V> ResolverMap<K, V>
where
    K: Hash + Eq + Send + 'static,
    V: Send + 'static,
{
    pub fn get_or_fetch<Q>(
        &mut self,
        key: &Q,
        fetch: impl FnOnce(&Q) -> Fut<(K, Option<V>)>,
    ) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        use hashbrown::hash_map::RawEntryMut::*;
        match self.map.raw_entry_mut().from_key(key) {
            Occupied(entry) => entry.into_mut().as_option(),
            Vacant(entry) => {
                entry.insert(key.to_owned(), Slot::Waiting);
                self.pending.push(fetch(key));
                None
            }
        }
    }

    pub fn is_failed<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        matches!(self.map.get(key), Some(Slot::Failed))
    }

    /// Moves finished lookups into the map, returning how many resolved.
    pub fn poll(&mut self) -> usize {
        let mut resolved = 0;
        let map = &mut self.map;
        self.pending.retain_mut(|fut| match fut.try_resolve() {
            None => true,
            Some(Ok((key, value))) => {
                let slot = value.map_or(Slot::Failed, Slot::Ready);
                map.insert(key, slot);
                resolved += 1;
                false
            }
            Some(Err(Lost)) => false,
        });
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetches_once_and_remembers_failures() {
        let mut map = ResolverMap::<String, u32>::default();
        let mut fetches = 0;

        for _ in 0..2 {
            let got = map.get_or_fetch("a", |key| {
                fetches += 1;
                Fut::ready((key.to_string(), Some(1)))
            });
            assert!(got.is_none());
        }
        assert_eq!(fetches, 1);

        assert!(map
            .get_or_fetch("b", |key| Fut::ready((key.to_string(), None)))
            .is_none());

        assert_eq!(map.poll(), 2);
        assert_eq!(map.get_or_fetch("a", |_| unreachable!()), Some(&1));
        assert!(map.is_failed("b"));
        assert!(map.get_or_fetch("b", |_| unreachable!()).is_none());
    }
}
