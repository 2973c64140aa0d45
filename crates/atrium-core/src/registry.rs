use crate::Dashboard;
use std::collections::BTreeMap;

///
/// DashboardRegistry
///
/// Explicit, constructed-once mapping from model type name to dashboard
/// definition. Built at startup and passed by reference to the view and
/// controller layers; there is no ambient global lookup.
///

#[derive(Clone, Debug, Default)]
pub struct DashboardRegistry {
    dashboards: BTreeMap<String, Dashboard>,
}

impl DashboardRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dashboards: BTreeMap::new(),
        }
    }

    /// Register a dashboard under its type name, replacing any previous
    /// definition for that type.
    pub fn insert(&mut self, dashboard: Dashboard) -> Option<Dashboard> {
        self.dashboards
            .insert(dashboard.type_name().to_string(), dashboard)
    }

    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&Dashboard> {
        self.dashboards.get(type_name)
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.dashboards.contains_key(type_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dashboards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dashboards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dashboard)> {
        self.dashboards
            .iter()
            .map(|(name, dashboard)| (name.as_str(), dashboard))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_by_type_name() {
        let mut registry = DashboardRegistry::new();
        assert!(registry.insert(Dashboard::builder("Order").build()).is_none());
        assert!(registry.insert(Dashboard::builder("Order").build()).is_some());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Order"));
    }
}
