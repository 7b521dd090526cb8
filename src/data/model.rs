use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// KeyedTable – a key → record table that remembers source order
// ---------------------------------------------------------------------------

/// A table of records addressed by a string key.
///
/// Entries keep the order they were inserted (or the order they appear in a
/// JSON object). A `BTreeMap` index makes `get` a direct lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedTable<T> {
    entries: Vec<(String, T)>,
    index: BTreeMap<String, usize>,
}

impl<T> Default for KeyedTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<T> KeyedTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Re-inserting an existing key replaces the record in
    /// place and keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate `(key, record)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for KeyedTable<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut table = KeyedTable::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

impl<T: Serialize> Serialize for KeyedTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct KeyedTableVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for KeyedTableVisitor<T> {
    type Value = KeyedTable<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of key to record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = KeyedTable::new();
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            table.insert(key, value);
        }
        Ok(table)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for KeyedTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(KeyedTableVisitor(PhantomData))
    }
}

// ---------------------------------------------------------------------------
// Single-table records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kitty {
    pub name: String,
    pub age: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub club: String,
    pub members: Vec<String>,
}

/// One Turing module with its headcounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mod {
    #[serde(rename = "mod")]
    pub number: u32,
    pub students: u32,
    pub instructors: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cake {
    pub cake_flavor: String,
    #[serde(default)]
    pub filling: Option<String>,
    pub frosting: String,
    pub toppings: Vec<String>,
    pub in_stock: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub room_letter: String,
    pub program: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub abv: f64,
    pub ibu: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brewery {
    pub name: String,
    pub location: String,
    pub beers: Vec<Beer>,
}

// ---------------------------------------------------------------------------
// Joined tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub module: u32,
    pub teaches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    pub cohort: u32,
    pub module: u32,
    pub student_count: u32,
    pub curriculum: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidekickRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    #[serde(default)]
    pub sidekicks: Vec<SidekickRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidekick {
    pub name: String,
    /// Name of the boss this sidekick serves (matches `Boss::name`).
    pub boss: String,
    pub loyalty_to_boss: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constellation {
    pub names: Vec<String>,
    pub stars: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub name: String,
    /// Apparent magnitude – lower is brighter.
    pub visual_magnitude: f64,
    /// Empty when the star belongs to no constellation.
    #[serde(default)]
    pub constellation: String,
    pub light_years_from_earth: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: u32,
    pub range: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Keys into the weapons table.
    pub weapons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dinosaur {
    pub carnivore: bool,
    pub extinct: bool,
    pub is_awesome: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Human {
    pub year_born: i32,
    pub nationality: String,
    pub imdb_star_meter_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub head_of_park: String,
    /// Keys into the humans table.
    pub cast: Vec<String>,
    /// Keys into the dinosaurs table.
    pub dinos: Vec<String>,
    pub year_released: i32,
}

// ---------------------------------------------------------------------------
// Datasets – every table in one bundle
// ---------------------------------------------------------------------------

/// All tables the prompts run against. Missing tables deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Datasets {
    pub kitties: Vec<Kitty>,
    pub clubs: Vec<Club>,
    pub mods: Vec<Mod>,
    pub cakes: Vec<Cake>,
    pub classrooms: Vec<Classroom>,
    pub breweries: Vec<Brewery>,
    pub instructors: Vec<Instructor>,
    pub cohorts: Vec<Cohort>,
    pub bosses: KeyedTable<Boss>,
    pub sidekicks: Vec<Sidekick>,
    pub constellations: KeyedTable<Constellation>,
    pub stars: Vec<Star>,
    pub weapons: KeyedTable<Weapon>,
    pub characters: Vec<Character>,
    pub dinosaurs: KeyedTable<Dinosaur>,
    pub humans: KeyedTable<Human>,
    pub movies: Vec<Movie>,
}

impl Datasets {
    /// Names of the tables in the bundle, in declaration order.
    pub const TABLES: [&'static str; 17] = [
        "kitties",
        "clubs",
        "mods",
        "cakes",
        "classrooms",
        "breweries",
        "instructors",
        "cohorts",
        "bosses",
        "sidekicks",
        "constellations",
        "stars",
        "weapons",
        "characters",
        "dinosaurs",
        "humans",
        "movies",
    ];

    /// Total number of records across every table.
    pub fn record_count(&self) -> usize {
        self.kitties.len()
            + self.clubs.len()
            + self.mods.len()
            + self.cakes.len()
            + self.classrooms.len()
            + self.breweries.len()
            + self.instructors.len()
            + self.cohorts.len()
            + self.bosses.len()
            + self.sidekicks.len()
            + self.constellations.len()
            + self.stars.len()
            + self.weapons.len()
            + self.characters.len()
            + self.dinosaurs.len()
            + self.humans.len()
            + self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_table_keeps_document_order() {
        let json = r#"{"zeta": {"damage": 1, "range": 2}, "alpha": {"damage": 3, "range": 4}}"#;
        let table: KeyedTable<Weapon> = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(table.get("alpha"), Some(&Weapon { damage: 3, range: 4 }));
        assert!(table.get("beta").is_none());
    }

    #[test]
    fn keyed_table_reinsert_replaces_in_place() {
        let mut table = KeyedTable::new();
        table.insert("a", 1);
        table.insert("b", 2);
        table.insert("a", 3);
        let entries: Vec<(&str, &i32)> = table.iter().collect();
        assert_eq!(entries, vec![("a", &3), ("b", &2)]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn keyed_table_serializes_in_order() {
        let table: KeyedTable<u32> = [("b", 1), ("a", 2)].into_iter().collect();
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn missing_tables_default_to_empty() {
        let ds: Datasets =
            serde_json::from_str(r#"{"kitties": [{"name": "Tiger", "age": 5, "color": "orange"}]}"#)
                .unwrap();
        assert_eq!(ds.kitties.len(), 1);
        assert!(ds.humans.is_empty());
        assert_eq!(ds.record_count(), 1);
    }
}
