use std::collections::{BTreeMap, BTreeSet};

use crate::data::filter::group_by;
use crate::data::model::{Constellation, KeyedTable, Star};

/// Stars named by any constellation, in star-table order.
pub fn stars_in_constellations(
    constellations: &KeyedTable<Constellation>,
    stars: &[Star],
) -> Vec<Star> {
    let named: BTreeSet<&str> = constellations
        .values()
        .flat_map(|c| c.stars.iter().map(String::as_str))
        .collect();
    stars
        .iter()
        .filter(|s| named.contains(s.name.as_str()))
        .cloned()
        .collect()
}

/// color → stars of that color, in star-table order. Every star lands in
/// exactly one bucket, repeated rows included.
pub fn stars_by_color(stars: &[Star]) -> BTreeMap<String, Vec<Star>> {
    group_by(stars, |s| s.color.clone())
        .into_iter()
        .map(|(color, bucket)| (color, bucket.into_iter().cloned().collect::<Vec<Star>>()))
        .collect()
}

/// Constellation of each star, brightest star first. Stars outside any
/// constellation are skipped; repeats are kept.
pub fn constellations_stars_exist_in(stars: &[Star]) -> Vec<String> {
    let mut by_brightness: Vec<&Star> = stars.iter().collect();
    by_brightness.sort_by(|a, b| a.visual_magnitude.total_cmp(&b.visual_magnitude));
    by_brightness
        .into_iter()
        .filter(|s| !s.constellation.is_empty())
        .map(|s| s.constellation.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(name: &str, magnitude: f64, constellation: &str, color: &str) -> Star {
        Star {
            name: name.into(),
            visual_magnitude: magnitude,
            constellation: constellation.into(),
            light_years_from_earth: 100.0,
            color: color.into(),
        }
    }

    fn stars() -> Vec<Star> {
        vec![
            star("Rigel", 0.13, "Orion", "blue"),
            star("Vega", 0.03, "Lyra", "blue"),
            star("Betelgeuse", 0.5, "Orion", "red"),
            star("Alpha Centauri", -0.01, "", "yellow"),
            star("Sirius", -1.46, "Canis Major", "blue"),
        ]
    }

    #[test]
    fn keeps_only_stars_named_by_a_constellation() {
        let constellations: KeyedTable<Constellation> = [(
            "orion",
            Constellation {
                names: vec!["Orion".into()],
                stars: vec!["Rigel".into(), "Betelgeuse".into(), "Bellatrix".into()],
            },
        )]
        .into_iter()
        .collect();
        let table = stars();
        let found = stars_in_constellations(&constellations, &table);
        let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rigel", "Betelgeuse"]);
        assert!(found.iter().all(|s| table.contains(s)));
    }

    #[test]
    fn groups_by_color_keeping_every_star() {
        let table = stars();
        let groups = stars_by_color(&table);
        let blue: Vec<&str> = groups["blue"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(blue, vec!["Rigel", "Vega", "Sirius"]);
        assert_eq!(groups["red"].len(), 1);
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), table.len());
    }

    #[test]
    fn repeated_star_rows_are_kept() {
        let mut table = stars();
        table.push(star("Vega", 0.03, "Lyra", "blue"));
        let groups = stars_by_color(&table);
        let blue: Vec<&str> = groups["blue"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(blue, vec!["Rigel", "Vega", "Sirius", "Vega"]);
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), table.len());
    }

    #[test]
    fn lists_constellations_brightest_first() {
        let table = stars();
        assert_eq!(
            constellations_stars_exist_in(&table),
            vec!["Canis Major", "Lyra", "Orion", "Orion"]
        );
        assert_eq!(table[0].name, "Rigel");
    }
}
