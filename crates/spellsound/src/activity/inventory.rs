use serde::{Deserialize, Serialize};

/// One inventory slot as the host reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSlot {
    pub id: i32,
    pub amount: u32,
    pub is_iou: bool,
    pub is_null: bool,
}

impl ItemSlot {
    pub fn item(id: i32, amount: u32) -> Self {
        Self {
            id,
            amount,
            is_iou: false,
            is_null: false,
        }
    }

    pub fn empty() -> Self {
        Self {
            id: -1,
            amount: 0,
            is_iou: false,
            is_null: true,
        }
    }
}

/// Ordered inventory contents for one tick.
///
/// Two snapshots are equal iff every slot matches on id, amount, IOU flag
/// and null flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventorySnapshot {
    pub slots: Vec<ItemSlot>,
}

impl InventorySnapshot {
    pub fn new(slots: Vec<ItemSlot>) -> Self {
        Self { slots }
    }

    /// `capacity` slots holding `occupied` single items of `id`, rest empty
    pub fn filled(capacity: usize, occupied: usize, id: i32) -> Self {
        let slots = (0..capacity)
            .map(|slot| {
                if slot < occupied {
                    ItemSlot::item(id, 1)
                } else {
                    ItemSlot::empty()
                }
            })
            .collect();
        Self { slots }
    }

    /// Number of non-empty slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_null).count()
    }

    /// Total stack count of item `id` across all slots
    pub fn count_of(&self, id: i32) -> u64 {
        self.slots
            .iter()
            .filter(|slot| !slot.is_null && slot.id == id)
            .map(|slot| u64::from(slot.amount))
            .sum()
    }
}

/// Inventory difference seen on one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryChange {
    pub previous: InventorySnapshot,
    pub current: InventorySnapshot,
}

impl InventoryChange {
    /// Went from fewer than `capacity` occupied slots to at least `capacity`
    pub fn became_full(&self, capacity: usize) -> bool {
        self.previous.occupied() < capacity && self.current.occupied() >= capacity
    }

    /// Whether the total count of item `id` grew
    pub fn gained(&self, id: i32) -> bool {
        self.current.count_of(id) > self.previous.count_of(id)
    }
}

/// Tracks the inventory between polls.
///
/// The change is replaced on every observation, so only the latest tick's
/// delta is ever visible.
#[derive(Debug, Clone, Default)]
pub struct InventoryTracker {
    last: Option<InventorySnapshot>,
    change: Option<InventoryChange>,
}

impl InventoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this tick's snapshot and return the change, if any.
    ///
    /// The first snapshot is never a change.
    pub fn observe(&mut self, snapshot: InventorySnapshot) -> Option<&InventoryChange> {
        self.change = None;
        match self.last.take() {
            Some(previous) if previous != snapshot => {
                self.last = Some(snapshot.clone());
                self.change = Some(InventoryChange {
                    previous,
                    current: snapshot,
                });
            }
            _ => self.last = Some(snapshot),
        }
        self.change.as_ref()
    }

    /// Drop the pending change without a new snapshot
    pub fn clear_change(&mut self) {
        self.change = None;
    }

    pub fn change(&self) -> Option<&InventoryChange> {
        self.change.as_ref()
    }

    pub fn last(&self) -> Option<&InventorySnapshot> {
        self.last.as_ref()
    }
}
