//! Ownership and lifecycle of every live entity.
//!
//! Each kind lives in its own generational arena. Collision passes mark
//! members for removal instead of deleting them mid-iteration; marked members
//! stop counting as live immediately and are dropped by `apply_removals`.

use crate::entities::{Bullet, Enemy, Plane, PowerUp, Tree};

/// Stable identity of an arena member. A handle whose member was removed
/// never resolves again, even after its slot is reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    pending: Vec<Handle>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            pending: Vec::new(),
            len: 0,
        }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: T) -> Handle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return Handle {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        Handle {
            index,
            generation: 0,
        }
    }

    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_ref()
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_mut()
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Members still stored, including ones marked for removal.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.value.as_ref().map(|v| {
                (
                    Handle {
                        index: i as u32,
                        generation: slot.generation,
                    },
                    v,
                )
            })
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut T)> {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let generation = slot.generation;
            slot.value.as_mut().map(|v| {
                (
                    Handle {
                        index: i as u32,
                        generation,
                    },
                    v,
                )
            })
        })
    }

    /// Live members, skipping anything already marked this pass.
    pub fn live(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.iter().filter(|(h, _)| !self.pending.contains(h))
    }

    /// Snapshot of current handles, safe to hold across mutations.
    pub fn handles(&self) -> Vec<Handle> {
        self.iter().map(|(h, _)| h).collect()
    }

    /// Schedule removal. The member stops being live right away.
    pub fn mark_removed(&mut self, handle: Handle) {
        if self.contains(handle) && !self.pending.contains(&handle) {
            self.pending.push(handle);
        }
    }

    pub fn is_live(&self, handle: Handle) -> bool {
        self.contains(handle) && !self.pending.contains(&handle)
    }

    /// Drop every member marked since the last call. Returns how many went.
    pub fn apply_removals(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending);
        pending.into_iter().filter_map(|h| self.remove(h)).count()
    }

    pub fn clear(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(i as u32);
            }
        }
        self.pending.clear();
        self.len = 0;
    }
}

/// Every entity group of one session. The plane is the only singleton.
#[derive(Clone, Debug)]
pub struct EntityRegistry {
    pub plane: Plane,
    pub bullets: Arena<Bullet>,
    pub enemies: Arena<Enemy>,
    pub powerups: Arena<PowerUp>,
    pub trees: Arena<Tree>,
}

impl EntityRegistry {
    pub fn new(plane: Plane) -> Self {
        Self {
            plane,
            bullets: Arena::new(),
            enemies: Arena::new(),
            powerups: Arena::new(),
            trees: Arena::new(),
        }
    }

    /// Bulk-clear everything that a lost life or a restart wipes.
    /// Trees are scenery and survive.
    pub fn clear_hostiles(&mut self) {
        self.bullets.clear();
        self.enemies.clear();
        self.powerups.clear();
    }

    pub fn apply_removals(&mut self) {
        self.bullets.apply_removals();
        self.enemies.apply_removals();
        self.powerups.apply_removals();
        self.trees.apply_removals();
    }
}
