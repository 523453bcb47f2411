//! Pokemon response schema
//!
//! Deserialized shape of a pokemon record (GET /pokemon/{name}), reduced to
//! the fields the terminal shows, plus the inspect rendering.

use serde::Deserialize;

use crate::models::NamedResource;

/// A pokemon record as fetched from the remote API.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Drives the catch difficulty; null or absent for some special forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<StatSlot>,
    pub types: Vec<TypeSlot>,
}

/// One stat line on a pokemon record.
#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One type slot on a pokemon record.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Base experience with the record's missing value read as zero.
    pub fn catch_difficulty(&self) -> u32 {
        self.base_experience.unwrap_or(0)
    }

    /// Renders the inspect block: name, height and weight, then the stat and
    /// type lines.
    pub fn render_inspect(&self) -> String {
        let mut out = format!(
            "Name: {}\nHeight: {}\nWeight: {}\nStats:\n",
            self.name, self.height, self.weight
        );
        for slot in &self.stats {
            out.push_str(&format!("\t-{}: {}\n", slot.stat.name, slot.base_stat));
        }
        out.push_str("Types:\n");
        for slot in &self.types {
            out.push_str(&format!("\t- {}\n", slot.kind.name));
        }
        out
    }
}
