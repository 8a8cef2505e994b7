//! Wishlist view state: the add/edit form, the fetched items and edit mode.
//!
//! Every mutation goes through the store and is followed by a full refetch,
//! so `items()` always mirrors the collection after the last call.

use rusqlite::Connection;

use crate::managers::destination_manager::{DestinationManager, DestinationManagerTrait};
use crate::types::destination::{non_blank, Destination};
use crate::types::errors::ViewError;

/// Text currently entered in the destination form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationForm {
    pub name: String,
    pub notes: String,
    pub image_url: String,
}

impl DestinationForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// What a form submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Destination),
    Updated(Destination),
    /// Nothing was written: the name was blank or the edited item is gone.
    Ignored,
}

#[derive(Debug, Default)]
pub struct WishlistView {
    items: Vec<Destination>,
    pub form: DestinationForm,
    editing_id: Option<i64>,
}

impl WishlistView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Destination] {
        &self.items
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Add"
        }
    }

    /// Re-fetches the full collection.
    pub fn refresh(&mut self, conn: &Connection) -> Result<(), ViewError> {
        self.items = DestinationManager::new(conn).list()?;
        Ok(())
    }

    /// Adds a destination from the form, or saves the edited one.
    ///
    /// If the edited item is no longer among the fetched items nothing is
    /// written; the edit is closed and the items are refetched.
    pub fn submit(&mut self, conn: &Connection) -> Result<SubmitOutcome, ViewError> {
        let name = self.form.name.trim().to_string();
        if name.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        let mut mgr = DestinationManager::new(conn);
        let outcome = match self.editing_id {
            Some(id) => {
                let Some(found) = self.items.iter().find(|i| i.id == Some(id)) else {
                    tracing::debug!(id, "edited destination is gone, closing edit");
                    self.cancel_edit();
                    self.refresh(conn)?;
                    return Ok(SubmitOutcome::Ignored);
                };
                let record = Destination {
                    name,
                    notes: non_blank(Some(self.form.notes.as_str())),
                    image_url: non_blank(Some(self.form.image_url.as_str())),
                    ..found.clone()
                };
                let saved = mgr.update(record)?;
                self.editing_id = None;
                SubmitOutcome::Updated(saved)
            }
            None => SubmitOutcome::Added(mgr.add(
                &name,
                Some(self.form.notes.as_str()),
                Some(self.form.image_url.as_str()),
            )?),
        };

        self.form.clear();
        self.refresh(conn)?;
        Ok(outcome)
    }

    /// Enters edit mode for `item`, loading its fields into the form.
    pub fn start_edit(&mut self, item: &Destination) {
        self.editing_id = item.id;
        self.form = DestinationForm {
            name: item.name.clone(),
            notes: item.notes.clone().unwrap_or_default(),
            image_url: item.image_url.clone().unwrap_or_default(),
        };
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.form.clear();
    }

    pub fn delete(&mut self, conn: &Connection, id: i64) -> Result<(), ViewError> {
        DestinationManager::new(conn).remove(id)?;
        if self.editing_id == Some(id) {
            self.cancel_edit();
        }
        self.refresh(conn)
    }

    pub fn toggle_visited(&mut self, conn: &Connection, id: i64, visited: bool) -> Result<(), ViewError> {
        DestinationManager::new(conn).set_visited(id, visited)?;
        self.refresh(conn)
    }

    /// Items to display under the visited-only filter.
    pub fn filtered(&self, visited_only: bool) -> Vec<&Destination> {
        self.items
            .iter()
            .filter(|i| !visited_only || i.visited)
            .collect()
    }
}
