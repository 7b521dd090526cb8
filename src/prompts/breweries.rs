use serde::Serialize;

use crate::data::model::{Beer, Brewery};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreweryBeerCount {
    pub name: String,
    pub beer_count: usize,
}

pub fn get_beer_count(breweries: &[Brewery]) -> usize {
    breweries.iter().map(|b| b.beers.len()).sum()
}

pub fn get_brewery_beer_count(breweries: &[Brewery]) -> Vec<BreweryBeerCount> {
    breweries
        .iter()
        .map(|b| BreweryBeerCount {
            name: b.name.clone(),
            beer_count: b.beers.len(),
        })
        .collect()
}

/// The beer with the highest ABV across every brewery.
///
/// Only beers with a positive ABV compete. On a tie the first beer seen wins.
/// `None` when no beer qualifies.
pub fn find_highest_abv_beer(breweries: &[Brewery]) -> Option<Beer> {
    let mut best: Option<&Beer> = None;
    for beer in breweries.iter().flat_map(|b| &b.beers) {
        if beer.abv <= 0.0 {
            continue;
        }
        if best.map_or(true, |b| beer.abv > b.abv) {
            best = Some(beer);
        }
    }
    best.cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(name: &str, abv: f64) -> Beer {
        Beer {
            name: name.into(),
            kind: "IPA".into(),
            abv,
            ibu: 40,
        }
    }

    fn breweries() -> Vec<Brewery> {
        vec![
            Brewery {
                name: "Little Machine".into(),
                location: "Denver".into(),
                beers: vec![beer("Hey Pal!", 6.2), beer("Chillwave", 9.2)],
            },
            Brewery {
                name: "Spangalang".into(),
                location: "Denver".into(),
                beers: vec![beer("Jazz Hands", 9.2)],
            },
            Brewery {
                name: "Empty Taps".into(),
                location: "Boulder".into(),
                beers: vec![],
            },
        ]
    }

    #[test]
    fn counts_beers() {
        let table = breweries();
        assert_eq!(get_beer_count(&table), 3);
        let per: Vec<usize> = get_brewery_beer_count(&table).iter().map(|b| b.beer_count).collect();
        assert_eq!(per, vec![2, 1, 0]);
    }

    #[test]
    fn highest_abv_prefers_first_on_tie() {
        assert_eq!(find_highest_abv_beer(&breweries()).map(|b| b.name), Some("Chillwave".into()));
        assert_eq!(find_highest_abv_beer(&[]), None);
    }

    #[test]
    fn non_positive_abv_never_wins() {
        let alcohol_free = vec![Brewery {
            name: "Dry Dock".into(),
            location: "Aurora".into(),
            beers: vec![beer("Zero Hour", 0.0), beer("Mislabelled", -1.5)],
        }];
        assert_eq!(find_highest_abv_beer(&alcohol_free), None);

        let mut mixed = alcohol_free;
        mixed[0].beers.push(beer("Session", 3.1));
        assert_eq!(find_highest_abv_beer(&mixed).map(|b| b.name), Some("Session".into()));
    }
}
