//! Call-order hook cache: a minimal state-hook runtime where a hook is identified only
//! by the position of its registration call within one render pass.
//!
//! The Nth `register_slot` after `reset_pass` is always slot N. There are no keys, so a
//! pass that skips, reorders or inserts a registration reads the wrong slot from then on.
//! That hazard is the point of the lab and is kept as-is.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::HookError;

/// A value stored in one slot. The kind is fixed by the slot's first write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Int(i64),
    Float(f64),
    Flag(bool),
    Text(String),
}

impl SlotValue {
    pub fn kind(&self) -> &'static str {
        match self {
            SlotValue::Int(_) => "int",
            SlotValue::Float(_) => "float",
            SlotValue::Flag(_) => "flag",
            SlotValue::Text(_) => "text",
        }
    }
}

/// Rust types that can live in a slot.
pub trait SlotType: Sized {
    const KIND: &'static str;

    fn into_slot(self) -> SlotValue;

    fn from_slot(value: &SlotValue) -> Option<Self>;
}

impl SlotType for i64 {
    const KIND: &'static str = "int";

    fn into_slot(self) -> SlotValue {
        SlotValue::Int(self)
    }

    fn from_slot(value: &SlotValue) -> Option<Self> {
        match value {
            SlotValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl SlotType for f64 {
    const KIND: &'static str = "float";

    fn into_slot(self) -> SlotValue {
        SlotValue::Float(self)
    }

    fn from_slot(value: &SlotValue) -> Option<Self> {
        match value {
            SlotValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl SlotType for bool {
    const KIND: &'static str = "flag";

    fn into_slot(self) -> SlotValue {
        SlotValue::Flag(self)
    }

    fn from_slot(value: &SlotValue) -> Option<Self> {
        match value {
            SlotValue::Flag(v) => Some(*v),
            _ => None,
        }
    }
}

impl SlotType for String {
    const KIND: &'static str = "text";

    fn into_slot(self) -> SlotValue {
        SlotValue::Text(self)
    }

    fn from_slot(value: &SlotValue) -> Option<Self> {
        match value {
            SlotValue::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

/// Untyped access: accepts whatever the slot holds.
impl SlotType for SlotValue {
    const KIND: &'static str = "any";

    fn into_slot(self) -> SlotValue {
        self
    }

    fn from_slot(value: &SlotValue) -> Option<Self> {
        Some(value.clone())
    }
}

/// What a setter stores: a literal replacement or a pure function of the previous value.
pub enum SlotUpdate<T> {
    Replace(T),
    Apply(Box<dyn FnOnce(T) -> T + Send>),
}

impl<T> SlotUpdate<T> {
    pub fn apply(f: impl FnOnce(T) -> T + Send + 'static) -> Self {
        SlotUpdate::Apply(Box::new(f))
    }
}

impl<T> From<T> for SlotUpdate<T> {
    fn from(value: T) -> Self {
        SlotUpdate::Replace(value)
    }
}

/// Setter bound to one slot position. Storing a value does not re-run any pass.
pub struct SlotSetter<T> {
    slot: usize,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Clone for SlotSetter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlotSetter<T> {}

impl<T> fmt::Debug for SlotSetter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotSetter").field("slot", &self.slot).finish()
    }
}

impl<T: SlotType> SlotSetter<T> {
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Computes the new value synchronously and writes it into the bound slot.
    pub fn set(
        &self,
        cache: &mut CallOrderCache,
        update: impl Into<SlotUpdate<T>>,
    ) -> Result<(), HookError> {
        let next = match update.into() {
            SlotUpdate::Replace(value) => value,
            SlotUpdate::Apply(f) => f(cache.read::<T>(self.slot)?),
        };
        cache.write(self.slot, next.into_slot())
    }

    /// Shorthand for `set(cache, SlotUpdate::apply(f))`.
    pub fn update(
        &self,
        cache: &mut CallOrderCache,
        f: impl FnOnce(T) -> T + Send + 'static,
    ) -> Result<(), HookError> {
        self.set(cache, SlotUpdate::apply(f))
    }
}

/// Slot index -> stored value, plus the cursor of the pass in progress.
///
/// Entries are never evicted. `reset_pass` only rewinds the cursor.
#[derive(Debug, Clone, Default)]
pub struct CallOrderCache {
    slots: Vec<SlotValue>,
    next_index: usize,
}

impl CallOrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new render pass. Must precede the pass's first registration.
    pub fn reset_pass(&mut self) {
        self.next_index = 0;
    }

    /// Bind the next call position to a slot.
    ///
    /// A slot that was never written takes `initial`; afterwards `initial` is ignored.
    /// The call position is consumed even when the read fails.
    pub fn register_slot<T: SlotType>(
        &mut self,
        initial: T,
    ) -> Result<(T, SlotSetter<T>), HookError> {
        let slot = self.next_index;
        self.next_index += 1;
        if slot == self.slots.len() {
            tracing::trace!(slot, kind = T::KIND, "hook slot initialized");
            self.slots.push(initial.into_slot());
        }
        let current = self.read::<T>(slot)?;
        Ok((
            current,
            SlotSetter {
                slot,
                _kind: PhantomData,
            },
        ))
    }

    /// Independent copy of every slot, keyed by slot index.
    pub fn snapshot(&self) -> BTreeMap<String, SlotValue> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v.clone()))
            .collect()
    }

    /// Raw read used by the visualizer. `None` if the slot was never registered.
    pub fn peek(&self, slot: usize) -> Option<&SlotValue> {
        self.slots.get(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Position the next registration in this pass will bind.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    fn read<T: SlotType>(&self, slot: usize) -> Result<T, HookError> {
        let stored = self.slots.get(slot).ok_or(HookError::UnknownSlot { slot })?;
        T::from_slot(stored).ok_or_else(|| HookError::SlotTypeMismatch {
            slot,
            expected: T::KIND,
            found: stored.kind(),
        })
    }

    fn write(&mut self, slot: usize, value: SlotValue) -> Result<(), HookError> {
        let stored = self
            .slots
            .get_mut(slot)
            .ok_or(HookError::UnknownSlot { slot })?;
        *stored = value;
        Ok(())
    }
}
