//! # Entity Store
//!
//! In-memory, single-owner storage for [`Entity`] records. The store is a plain
//! struct: whoever holds `&mut EntityStore` is the only writer. Share it across
//! tasks by moving it into a [`ResourceActor`](crate::actor_framework::ResourceActor).

use std::collections::HashMap;

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::debug;

use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::Product;
use crate::gate::{self, ScanVerdict};

/// Length of generated product ids.
pub const PRODUCT_ID_LEN: usize = 12;

pub type IdGenerator<Id> = Box<dyn FnMut() -> Id + Send>;

pub struct EntityStore<T: Entity> {
    items: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: IdGenerator<T::Id>,
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store that draws ids from `next_id_fn`.
    pub fn new(next_id_fn: impl FnMut() -> T::Id + Send + 'static) -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    pub fn add(&mut self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let item = T::from_create_params(id.clone(), params)?;

        if self.items.insert(id.clone(), item.clone()).is_none() {
            self.order.push(id);
        }
        Ok(item)
    }

    /// Removes the record. Returns `false` if there was nothing to remove.
    pub fn remove(&mut self, id: &T::Id) -> bool {
        if self.items.remove(id).is_none() {
            debug!(%id, "Nothing to remove");
            return false;
        }
        self.order.retain(|existing| existing != id);
        true
    }

    /// Merges `patch` into the record. Absent ids are a no-op (`Ok(None)`).
    pub fn update(&mut self, id: &T::Id, patch: T::Patch) -> Result<Option<T>, FrameworkError> {
        match self.items.get_mut(id) {
            Some(item) => {
                item.on_update(patch)?;
                Ok(Some(item.clone()))
            }
            None => {
                debug!(%id, "Nothing to update");
                Ok(None)
            }
        }
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    /// All records in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Runs a domain action against one record.
    pub fn apply_action(
        &mut self,
        id: &T::Id,
        action: T::Action,
    ) -> Result<Option<T::ActionResult>, FrameworkError> {
        match self.items.get_mut(id) {
            Some(item) => item.handle_action(action).map(Some),
            None => Ok(None),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub type ProductStore = EntityStore<Product>;

impl ProductStore {
    /// Runs the scan gate on one product and returns it as it stands afterwards.
    pub fn apply_scan(&mut self, id: &str) -> Option<(Product, ScanVerdict)> {
        let product = self.items.get_mut(id)?;
        let verdict = gate::authorize_and_apply(product);
        Some((product.clone(), verdict))
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new(random_product_id)
    }
}

/// Random alphanumeric id, unique with overwhelming probability.
pub fn random_product_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PRODUCT_ID_LEN)
        .map(char::from)
        .collect()
}
