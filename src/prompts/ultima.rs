use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::data::filter::resolve_all;
use crate::data::model::{Character, KeyedTable, Weapon};
use crate::error::QueryResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeaponTotals {
    pub damage: u64,
    pub range: u64,
}

/// A character's summed weapon stats. Serializes as `{ "<name>": { damage, range } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterTotals {
    pub name: String,
    pub totals: WeaponTotals,
}

impl Serialize for CharacterTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.totals)?;
        map.end()
    }
}

fn character_weapons<'a>(
    weapons: &'a KeyedTable<Weapon>,
    character: &Character,
) -> QueryResult<Vec<&'a Weapon>> {
    resolve_all(weapons, "weapons", &character.weapons)
}

/// Damage of every weapon every character carries.
pub fn total_damage(weapons: &KeyedTable<Weapon>, characters: &[Character]) -> QueryResult<u64> {
    let mut total: u64 = 0;
    for character in characters {
        total += character_weapons(weapons, character)?
            .iter()
            .map(|w| u64::from(w.damage))
            .sum::<u64>();
    }
    Ok(total)
}

pub fn characters_by_total(
    weapons: &KeyedTable<Weapon>,
    characters: &[Character],
) -> QueryResult<Vec<CharacterTotals>> {
    characters
        .iter()
        .map(|character| -> QueryResult<CharacterTotals> {
            let totals = character_weapons(weapons, character)?.iter().fold(
                WeaponTotals::default(),
                |acc, w| WeaponTotals {
                    damage: acc.damage + u64::from(w.damage),
                    range: acc.range + u64::from(w.range),
                },
            );
            Ok(CharacterTotals {
                name: character.name.clone(),
                totals,
            })
        })
        .collect()
}
