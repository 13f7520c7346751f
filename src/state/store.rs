//! Ordered region collection with a weakly referenced active region.

use super::types::{Region, SelectionMode};
use crate::providers::GeometryProvider;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionStore {
    regions: Vec<Region>,
    active: Option<String>,
    // Sequence used for ids; only ever grows, so ids stay unique even if
    // regions were ever removed.
    #[serde(skip)]
    next_seq: usize,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region shaped by `provider` for `mode` and make it active.
    pub fn create_region(&mut self, mode: SelectionMode, provider: &dyn GeometryProvider) -> Region {
        self.next_seq += 1;
        let region = Region::new(format!("region_{}", self.next_seq), provider.geometry_for(mode));

        match serde_json::to_string(&region) {
            Ok(json) => log::debug!("Region added: {json}"),
            Err(e) => log::debug!("Region added: {} ({e})", region.id),
        }

        self.regions.push(region.clone());
        self.active = Some(region.id.clone());
        region
    }

    /// Overwrite the active id. Ids not in the store are accepted as-is.
    pub fn set_active(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.get(&id).is_none() {
            log::debug!("Activating unknown region id {id}");
        }
        self.active = Some(id);
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active region, or `None` when nothing is active or the id dangles.
    pub fn active_region(&self) -> Option<&Region> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl<'a> IntoIterator for &'a RegionStore {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
