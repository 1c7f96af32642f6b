use serde::{Deserialize, Serialize};

use crate::error::{DinnerError, Result};

/// An appetite profile with its serving multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct EaterProfile {
    pub id: &'static str,
    pub name: &'static str,
    /// Servings relative to one standard person.
    pub multiplier: f64,
    pub description: &'static str,
    /// Glyph shown next to the profile in the terminal.
    pub icon: &'static str,
}

/// Profile id assigned to newly added diners.
pub const DEFAULT_APPETITE: &str = "humano";

/// One person at the table.
///
/// `appetite` holds a profile id as typed; an id that matches no profile is
/// kept and counts as one standard serving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diner {
    pub id: u64,
    pub appetite: String,
}

impl Diner {
    pub fn new(id: u64, appetite: impl Into<String>) -> Self {
        Self {
            id,
            appetite: appetite.into(),
        }
    }
}

/// Editable list of diners that always keeps at least one entry.
#[derive(Debug, Clone)]
pub struct DinerList {
    diners: Vec<Diner>,
    next_id: u64,
}

impl Default for DinerList {
    fn default() -> Self {
        Self::new()
    }
}

impl DinerList {
    /// A list holding a single standard diner.
    pub fn new() -> Self {
        Self {
            diners: vec![Diner::new(1, DEFAULT_APPETITE)],
            next_id: 2,
        }
    }

    /// Build a list from appetite ids, in order.
    ///
    /// An empty input yields the default single-diner list.
    pub fn from_appetites<I, S>(appetites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self {
            diners: Vec::new(),
            next_id: 1,
        };
        for appetite in appetites {
            list.push(appetite.into());
        }
        if list.diners.is_empty() {
            return Self::new();
        }
        list
    }

    fn push(&mut self, appetite: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.diners.push(Diner::new(id, appetite));
        id
    }

    /// Add a standard diner and return its id.
    pub fn add(&mut self) -> u64 {
        self.push(DEFAULT_APPETITE.to_string())
    }

    /// Remove a diner. Refuses to remove the last one.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        if self.diners.len() <= 1 {
            return Err(DinnerError::NoDiners);
        }
        let before = self.diners.len();
        self.diners.retain(|d| d.id != id);
        if self.diners.len() == before {
            return Err(DinnerError::InvalidInput(format!("No diner with id {}", id)));
        }
        Ok(())
    }

    /// Change a diner's appetite profile.
    pub fn set_appetite(&mut self, id: u64, appetite: impl Into<String>) -> Result<()> {
        let diner = self
            .diners
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| DinnerError::InvalidInput(format!("No diner with id {}", id)))?;
        diner.appetite = appetite.into();
        Ok(())
    }

    pub fn as_slice(&self) -> &[Diner] {
        &self.diners
    }

    pub fn len(&self) -> usize {
        self.diners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diners.is_empty()
    }
}
