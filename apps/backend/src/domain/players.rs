//! Insertion-ordered player roster.
//!
//! Iteration order is the order in which players were added. Score changes
//! never reorder the roster, and removing a player keeps the relative order of
//! everyone else. Winner rescans rely on this order for "first match".

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One player's cumulative score and per-round history.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Player {
    /// Sum of every round score ever added (may be negative).
    pub score: i64,
    /// Append-only history, one entry per AddScore.
    pub rounds: Vec<i64>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.score = 0;
        self.rounds.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Players {
    entries: Vec<(String, Player)>,
}

impl Players {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// Appends `name` at the end of the roster. Returns `false` (and leaves
    /// the roster untouched) if the name is already taken.
    pub fn insert(&mut self, name: String, player: Player) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, player));
        true
    }

    /// Removes `name`, shifting later players up by one.
    pub fn remove(&mut self, name: &str) -> Option<Player> {
        let idx = self.position(name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Player)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.entries.iter_mut().map(|(_, p)| p)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

impl Serialize for Players {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, player) in &self.entries {
            map.serialize_entry(name, player)?;
        }
        map.end()
    }
}
