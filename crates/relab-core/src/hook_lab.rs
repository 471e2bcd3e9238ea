//! Hook Runtime Lab: a simulated component rendered through [`CallOrderCache`].
//!
//! Every interaction re-registers the hooks it needs (in component order), calls a
//! setter, bumps the render counter and re-runs the full pass so the visualizer sees
//! the new cache contents. The cache never triggers that re-run by itself.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::HookError;
use crate::hook_runtime::{CallOrderCache, SlotType, SlotValue};

/// Initial value of hook 1 (counter state).
pub const COUNTER_INITIAL: i64 = 0;
/// Initial value of hook 2 (text state).
pub const NAME_INITIAL: &str = "React User";

/// What the lab panel displays after a pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HookLabView {
    pub render_id: u64,
    pub counter: i64,
    pub name: String,
    pub cache: BTreeMap<String, SlotValue>,
}

pub struct HookLab {
    cache: CallOrderCache,
    render_count: u64,
    view: HookLabView,
}

impl HookLab {
    /// Mounts the component: runs the first pass so both slots exist.
    pub fn new() -> Result<Self, HookError> {
        let mut lab = Self {
            cache: CallOrderCache::new(),
            render_count: 0,
            view: HookLabView {
                render_id: 0,
                counter: COUNTER_INITIAL,
                name: String::new(),
                cache: BTreeMap::new(),
            },
        };
        lab.refresh()?;
        Ok(lab)
    }

    /// Reset the cursor and run `pass` against the cache.
    pub fn run_pass<R>(
        &mut self,
        pass: impl FnOnce(&mut CallOrderCache) -> Result<R, HookError>,
    ) -> Result<R, HookError> {
        self.cache.reset_pass();
        pass(&mut self.cache)
    }

    /// Re-run the component's registration pass and capture the visible state.
    /// Slots are registered untyped so a slot of another kind shows as `0` / `""`.
    pub fn refresh(&mut self) -> Result<HookLabView, HookError> {
        self.run_pass(|cache| {
            cache.register_slot(COUNTER_INITIAL.into_slot())?;
            cache.register_slot(NAME_INITIAL.to_string().into_slot())?;
            Ok(())
        })?;
        let (counter, name) = self.displayed();
        self.view = HookLabView {
            render_id: self.render_count,
            counter,
            name,
            cache: self.cache.snapshot(),
        };
        tracing::debug!(
            render_id = self.render_count,
            slots = self.cache.len(),
            "[RELAB HOOKS] pass complete"
        );
        Ok(self.view.clone())
    }

    /// "Increment Mock State": only hook 1 is registered for the update.
    pub fn increment_count(&mut self) -> Result<HookLabView, HookError> {
        self.run_pass(|cache| {
            let (count, set_count) = cache.register_slot(COUNTER_INITIAL)?;
            set_count.set(cache, count + 1)
        })?;
        self.render_count += 1;
        self.refresh()
    }

    /// Text input change: hook 1 is registered first to keep hook 2 at slot 1.
    pub fn update_name(&mut self, value: &str) -> Result<HookLabView, HookError> {
        let value = value.to_string();
        self.run_pass(|cache| {
            cache.register_slot(COUNTER_INITIAL)?;
            let (_, set_name) = cache.register_slot(NAME_INITIAL.to_string())?;
            set_name.set(cache, value)
        })?;
        self.render_count += 1;
        self.refresh()
    }

    /// Last captured view.
    pub fn view(&self) -> &HookLabView {
        &self.view
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn cache(&self) -> &CallOrderCache {
        &self.cache
    }

    /// Counter/name read straight from the store. Slots missing or of another kind
    /// fall back to `0` / `""`.
    pub fn displayed(&self) -> (i64, String) {
        let counter = self
            .cache
            .peek(0)
            .and_then(i64::from_slot)
            .unwrap_or(COUNTER_INITIAL);
        let name = self
            .cache
            .peek(1)
            .and_then(String::from_slot)
            .unwrap_or_default();
        (counter, name)
    }
}
