/// A sparse array whose freed slots are reused before the array grows.
///
/// The array grows by a fixed number of slots at a time. Indices of live values are stable until
/// the value is freed.
#[derive(Debug, Clone)]
pub(super) struct SlotArray<T> {
    slots: Vec<Option<T>>,
    /// Indices of freed slots.
    free: Vec<usize>,
    /// Number of live values.
    len: usize,
    chunk: usize,
}

impl<T> SlotArray<T> {
    /// Creates an empty array that grows by `chunk` slots.
    pub(super) fn with_chunk(chunk: usize) -> Self {
        Self {
            slots: Vec::with_capacity(chunk),
            free: Vec::new(),
            len: 0,
            chunk: chunk.max(1),
        }
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.len
    }

    pub(super) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `value` in a free slot, growing the array if none is left, and returns its index.
    pub(super) fn insert(&mut self, value: T) -> usize {
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(value);
            self.len += 1;
            return index;
        }

        if self.slots.len() == self.slots.capacity() {
            self.slots.reserve_exact(self.chunk);
        }
        self.slots.push(Some(value));
        self.len += 1;
        self.slots.len() - 1
    }

    /// Frees the slot at `index` and returns its value.
    pub(super) fn free(&mut self, index: usize) -> Option<T> {
        let value = self.slots.get_mut(index)?.take()?;
        self.free.push(index);
        self.len -= 1;
        Some(value)
    }

    pub(super) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Returns the index of the first live slot matching `predicate`.
    pub(super) fn position(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(&mut predicate))
    }

    pub(super) fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.iter().find(|value| predicate(*value))
    }

    /// Returns the index and the value of the first live slot matching `predicate`.
    pub(super) fn find_mut(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> Option<(usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .find_map(|(index, slot)| match slot {
                Some(value) if predicate(&*value) => Some((index, value)),
                _ => None,
            })
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    /// Frees every slot for which `keep` returns `false`.
    pub(super) fn retain_mut(&mut self, mut keep: impl FnMut(&mut T) -> bool) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(value) = slot {
                if !keep(value) {
                    *slot = None;
                    self.free.push(index);
                    self.len -= 1;
                }
            }
        }
    }

    /// Removes all values, keeping the allocated slots.
    pub(super) fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.free.clear();
        self.len = 0;
        self.slots.drain(..).flatten()
    }
}
