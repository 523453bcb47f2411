//! Pokedex Module
//!
//! In-process bookkeeping of fetched pokemon records and their caught
//! status, plus the catch roll. Records live here for the life of the
//! process; the response cache never holds pokemon records.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::Pokemon;

/// One record in the collection.
#[derive(Debug, Clone)]
pub struct PokedexEntry {
    /// The fetched record
    pub pokemon: Pokemon,
    /// Whether a catch roll has succeeded for this record
    pub caught: bool,
    /// When the successful roll happened
    pub caught_at: Option<DateTime<Utc>>,
}

impl PokedexEntry {
    /// Inspect block for a caught record, including when it was caught.
    pub fn render_inspect(&self) -> String {
        let mut out = self.pokemon.render_inspect();
        if let Some(caught_at) = self.caught_at {
            out.push_str(&format!("Caught at: {}\n", caught_at.to_rfc3339()));
        }
        out
    }
}

/// The player's collection of seen and caught pokemon, keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: HashMap<String, PokedexEntry>,
}

impl Pokedex {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Memoizes a fetched record, initially uncaught.
    ///
    /// Recording a name again keeps the existing entry, so an earlier
    /// successful catch is never forgotten.
    pub fn record(&mut self, pokemon: Pokemon) {
        self.entries
            .entry(pokemon.name.clone())
            .or_insert(PokedexEntry {
                pokemon,
                caught: false,
                caught_at: None,
            });
    }

    /// True when a record for `name` exists, caught or not.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// True when `name` has been caught.
    pub fn is_caught(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|entry| entry.caught)
    }

    /// The entry for `name`, if one has been recorded.
    pub fn get(&self, name: &str) -> Option<&PokedexEntry> {
        self.entries.get(name)
    }

    /// Marks a recorded name caught, stamping the time of the catch.
    pub fn mark_caught(&mut self, name: &str) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.caught = true;
            entry.caught_at = Some(Utc::now());
        }
    }

    /// Names of all caught pokemon, sorted for stable listing.
    pub fn caught_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .values()
            .filter(|entry| entry.caught)
            .map(|entry| entry.pokemon.name.clone())
            .collect();
        names.sort();
        names
    }

    /// Number of records, caught or not.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded yet.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Catch Roll ==

/// True when `roll` beats the catch threshold for a record of this
/// difficulty: the top quarter of `[0, base_experience)` succeeds.
pub fn roll_succeeds(base_experience: u32, roll: u32) -> bool {
    f64::from(roll) >= f64::from(base_experience) * 0.75
}

/// Rolls a catch attempt: a uniform roll in `[0, base_experience)` succeeds
/// on the top quarter of the range. Zero-difficulty records are always
/// caught, since there is no range to roll over.
pub fn attempt_catch(base_experience: u32) -> bool {
    if base_experience == 0 {
        return true;
    }

    let roll = rand::thread_rng().gen_range(0..base_experience);
    roll_succeeds(base_experience, roll)
}
