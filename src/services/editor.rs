//! Budget editor
//!
//! Owns the three allocation fields currently being edited, the saved
//! collection, and the store the collection is persisted to. The editor's
//! fields are transient; the collection is written to the store only by
//! [`BudgetEditor::save_budget`] and [`BudgetEditor::remove_budget`].

use tracing::{debug, info, warn};

use crate::config::settings::{Settings, DEFAULT_MAX_TOTAL, DEFAULT_STEP};
use crate::error::{AllocatorError, AllocatorResult};
use crate::models::{clamp_allocation, Budget, Field};
use crate::storage::{load_budgets, save_budgets, KeyValueStore};

/// Editor for creating and revising budgets
pub struct BudgetEditor<S: KeyValueStore> {
    store: S,
    max: u64,
    step: u64,
    current: Budget,
    saved: Vec<Budget>,
    edit_index: Option<usize>,
    hydrated: bool,
}

impl<S: KeyValueStore> BudgetEditor<S> {
    /// Create an editor with the default cap and step
    pub fn new(store: S) -> Self {
        Self::with_limits(store, DEFAULT_MAX_TOTAL, DEFAULT_STEP)
    }

    /// Create an editor using the cap and step from settings
    pub fn from_settings(store: S, settings: &Settings) -> Self {
        Self::with_limits(store, settings.max_total, settings.step)
    }

    pub fn with_limits(store: S, max: u64, step: u64) -> Self {
        Self {
            store,
            max,
            step: step.max(1),
            current: Budget::default(),
            saved: Vec::new(),
            edit_index: None,
            hydrated: false,
        }
    }

    /// Load the saved collection from the store
    ///
    /// Runs at most once per editor. The stored collection is only adopted
    /// while the in-memory collection is empty. If the stored text is
    /// malformed the collection stays empty and the error is returned so the
    /// caller can report it.
    pub fn hydrate(&mut self) -> AllocatorResult<()> {
        if self.hydrated {
            return Ok(());
        }
        self.hydrated = true;

        if !self.saved.is_empty() {
            debug!("collection already populated, skipping hydrate");
            return Ok(());
        }

        match load_budgets(&self.store) {
            Ok(Some(budgets)) => {
                info!(count = budgets.len(), "loaded saved budgets");
                self.saved = budgets;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                warn!(error = %e, "could not load saved budgets, starting empty");
                self.saved.clear();
                Err(e)
            }
        }
    }

    /// Request a new value for one field, returning the value accepted
    pub fn adjust(&mut self, field: Field, requested: u64) -> u64 {
        let current = self.current.get(field);
        let others = self.current.others_sum(field);
        let accepted = clamp_allocation(current, requested.min(self.max), others, self.max);

        if accepted != requested {
            debug!(%field, requested, accepted, "allocation clamped");
        }
        self.current.set(field, accepted);
        accepted
    }

    /// Move a field by a number of slider steps (negative to decrease)
    pub fn nudge(&mut self, field: Field, steps: i64) -> u64 {
        let current = self.current.get(field);
        let delta = self.step.saturating_mul(steps.unsigned_abs());
        let requested = if steps < 0 {
            current.saturating_sub(delta)
        } else {
            current.saturating_add(delta)
        };
        self.adjust(field, requested)
    }

    /// Save the current fields as a new budget, or over the one being edited
    ///
    /// Only permitted once the full amount is allocated.
    pub fn save_budget(&mut self) -> AllocatorResult<usize> {
        if !self.can_save() {
            return Err(AllocatorError::BudgetIncomplete {
                total: self.total(),
                max: self.max,
            });
        }

        let mut budgets = self.saved.clone();
        let position = match self.edit_index {
            None => {
                budgets.push(self.current);
                budgets.len() - 1
            }
            Some(index) => {
                let slot = budgets
                    .get_mut(index)
                    .ok_or_else(|| AllocatorError::invalid_index(index, self.saved.len()))?;
                *slot = self.current;
                index
            }
        };

        save_budgets(&mut self.store, &budgets)?;
        self.saved = budgets;

        match self.edit_index.take() {
            None => {
                info!(index = position, budget = %self.current, "budget created");
                self.current = Budget::default();
            }
            Some(_) => info!(index = position, budget = %self.current, "budget updated"),
        }

        Ok(position)
    }

    /// Delete the saved budget at `index` and persist the result
    pub fn remove_budget(&mut self, index: usize) -> AllocatorResult<Budget> {
        if index >= self.saved.len() {
            return Err(AllocatorError::invalid_index(index, self.saved.len()));
        }

        let mut budgets = self.saved.clone();
        let removed = budgets.remove(index);
        save_budgets(&mut self.store, &budgets)?;
        self.saved = budgets;

        // Keep the edit index pointing at the same entry
        self.edit_index = match self.edit_index {
            Some(editing) if editing == index => None,
            Some(editing) if editing > index => Some(editing - 1),
            other => other,
        };

        info!(index, budget = %removed, "budget removed");
        Ok(removed)
    }

    /// Start editing the saved budget at `index`
    pub fn edit_budget(&mut self, index: usize) -> AllocatorResult<()> {
        let budget = *self
            .saved
            .get(index)
            .ok_or_else(|| AllocatorError::invalid_index(index, self.saved.len()))?;

        self.edit_index = Some(index);
        self.current = budget;
        debug!(index, "editing budget");
        Ok(())
    }

    /// Leave edit mode and clear all fields
    pub fn cancel_edit(&mut self) {
        self.edit_index = None;
        self.current = Budget::default();
    }

    pub fn value(&self, field: Field) -> u64 {
        self.current.get(field)
    }

    /// The fields as currently edited
    pub fn current(&self) -> Budget {
        self.current
    }

    pub fn total(&self) -> u64 {
        self.current.total()
    }

    /// Amount still to allocate
    pub fn remaining(&self) -> u64 {
        self.max.saturating_sub(self.total())
    }

    pub fn can_save(&self) -> bool {
        self.total() == self.max
    }

    pub fn is_editing(&self) -> bool {
        self.edit_index.is_some()
    }

    pub fn edit_index(&self) -> Option<usize> {
        self.edit_index
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.saved
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
