use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// One entry of the listing body, keyed by activity name on the wire.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(name: impl Into<String>, details: ActivityDetails) -> Self {
        Activity {
            name: name.into(),
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// `"{enrolled} / {max}"`, as shown on the card.
    pub fn capacity_label(&self) -> String {
        format!("{} / {}", self.participants.len(), self.max_participants)
    }
}

/// Activities keyed by name, kept in the order the backend listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    /// Adds an activity at the end, or replaces a same-named one where it stands.
    pub fn insert(&mut self, activity: Activity) {
        match self.activities.iter_mut().find(|a| a.name == activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }
}

impl FromIterator<Activity> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut catalog = ActivityCatalog::new();
        for activity in iter {
            catalog.insert(activity);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a ActivityCatalog {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity details")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut catalog = ActivityCatalog::new();
        while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
            catalog.insert(Activity::new(name, details));
        }
        Ok(catalog)
    }
}
