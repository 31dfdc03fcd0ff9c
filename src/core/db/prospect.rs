use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::StoreError,
    models::{NewProspect, Prospect},
};

/// Ordered prospect collection. Every mutation swaps in a new collection, so
/// snapshots taken earlier stay unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProspectStore {
    prospects: Arc<[Prospect]>,
}

impl ProspectStore {
    pub fn new(prospects: Vec<Prospect>) -> Self {
        Self {
            prospects: prospects.into(),
        }
    }

    /// Appends a record under a fresh id.
    pub fn add(&mut self, fields: NewProspect) -> Prospect {
        let prospect = fields.into_prospect(Uuid::new_v4().to_string());
        let mut next = self.prospects.to_vec();
        next.push(prospect.clone());
        self.prospects = next.into();
        prospect
    }

    /// Replaces every field of the record with `id`, keeping its id and position.
    pub fn update(&mut self, id: &str, fields: NewProspect) -> Result<Prospect, StoreError> {
        let position = self
            .prospects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let updated = fields.into_prospect(id.to_string());
        let mut next = self.prospects.to_vec();
        next[position] = updated.clone();
        self.prospects = next.into();
        Ok(updated)
    }

    /// Returns false if no record had that id.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.prospects.iter().any(|p| p.id == id) {
            return false;
        }
        self.prospects = self
            .prospects
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        true
    }

    pub fn get(&self, id: &str) -> Option<&Prospect> {
        self.prospects.iter().find(|p| p.id == id)
    }

    pub fn list(&self) -> &[Prospect] {
        &self.prospects
    }

    pub fn snapshot(&self) -> Arc<[Prospect]> {
        self.prospects.clone()
    }
}

pub trait ProspectRepository {
    fn get_prospects(&self) -> &[Prospect];
    fn get_prospect_by_id(&self, id: &str) -> Option<&Prospect>;
    fn add_prospect(&mut self, prospect: NewProspect) -> impl Future<Output = Prospect>;
    fn update_prospect(
        &mut self,
        id: &str,
        update: NewProspect,
    ) -> impl Future<Output = Result<Prospect, StoreError>>;
    fn delete_prospect(&mut self, id: &str) -> impl Future<Output = bool>;
}
