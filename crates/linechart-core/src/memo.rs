// File: crates/linechart-core/src/memo.rs
// Summary: Single-entry memo cell keyed on the inputs of a derived value.

/// Holds the last computed value and the key it was computed from.
/// A lookup with a different key recomputes and replaces the entry.
#[derive(Clone, Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        let value = match self.entry.take() {
            Some((k, v)) if k == key => v,
            _ => compute(),
        };
        &self.entry.insert((key, value)).1
    }

    /// Like [`Memo::get_or_compute`]; on error the memo is left empty.
    pub fn get_or_try_compute<E>(
        &mut self,
        key: K,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<&V, E> {
        let value = match self.entry.take() {
            Some((k, v)) if k == key => v,
            _ => compute()?,
        };
        Ok(&self.entry.insert((key, value)).1)
    }
}
