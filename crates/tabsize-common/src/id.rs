use crate::types::TabId;

/// Hands out [`TabId`]s in registration order, starting at 1.
///
/// After `u32::MAX` the counter wraps back to 1 instead of overflowing.
/// Callers that keep ids alive across a wrap skip the ones still in use.
#[derive(Debug)]
pub struct TabIdAllocator {
    next: u32,
}

impl TabIdAllocator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// An allocator whose first id is `first`. Zero is never issued.
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: first.max(1),
        }
    }

    pub fn next_id(&mut self) -> TabId {
        let id = TabId(self.next);
        self.next = self.next.checked_add(1).unwrap_or(1);
        id
    }
}

impl Default for TabIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
