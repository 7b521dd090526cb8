//! Prompts joining the dinosaur movies with their dinosaurs and cast.
//!
//! Cast and dino lists hold keys into the `humans` and `dinosaurs` tables. A
//! key with no record fails with [`QueryError::ReferenceNotFound`].

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::data::filter::{resolve, resolve_all};
use crate::data::model::{Dinosaur, Human, KeyedTable, Movie};
use crate::error::QueryResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UncastActor {
    pub name: String,
    pub nationality: String,
    pub imdb_star_meter_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorAges {
    pub name: String,
    pub ages: Vec<i64>,
}

/// movie title → how many of its dinosaurs are awesome.
pub fn count_awesome_dinosaurs(
    dinosaurs: &KeyedTable<Dinosaur>,
    movies: &[Movie],
) -> QueryResult<BTreeMap<String, usize>> {
    let mut counts = BTreeMap::new();
    for movie in movies {
        let awesome = resolve_all(dinosaurs, "dinosaurs", &movie.dinos)?
            .into_iter()
            .filter(|d| d.is_awesome)
            .count();
        // Movies sharing a title pool their counts.
        *counts.entry(movie.title.clone()).or_insert(0) += awesome;
    }
    Ok(counts)
}

/// Mean cast age at release, truncated toward zero. An empty cast averages 0.
fn average_cast_age(humans: &KeyedTable<Human>, movie: &Movie) -> QueryResult<i64> {
    if movie.cast.is_empty() {
        return Ok(0);
    }
    let mut total: i64 = 0;
    for member in &movie.cast {
        let human = resolve(humans, "humans", member)?;
        total += age_at(movie, human);
    }
    let cast = i64::try_from(movie.cast.len()).unwrap_or(i64::MAX);
    // Integer division truncates toward zero.
    Ok(total / cast)
}

fn age_at(movie: &Movie, human: &Human) -> i64 {
    i64::from(movie.year_released) - i64::from(human.year_born)
}

/// director → (title → average cast age at release).
pub fn average_age_per_movie(
    humans: &KeyedTable<Human>,
    movies: &[Movie],
) -> QueryResult<BTreeMap<String, BTreeMap<String, i64>>> {
    let mut by_director: BTreeMap<String, BTreeMap<String, i64>> = BTreeMap::new();
    for movie in movies {
        let average = average_cast_age(humans, movie)?;
        by_director
            .entry(movie.director.clone())
            .or_default()
            .entry(movie.title.clone())
            .or_insert(average);
    }
    Ok(by_director)
}

/// Humans no movie has cast, sorted by (trimmed) nationality. Ties keep
/// human-table order.
pub fn uncast_actors(humans: &KeyedTable<Human>, movies: &[Movie]) -> Vec<UncastActor> {
    let cast: BTreeSet<&str> = movies
        .iter()
        .flat_map(|m| m.cast.iter().map(String::as_str))
        .collect();

    let mut uncast: Vec<UncastActor> = humans
        .iter()
        .filter(|(name, _)| !cast.contains(name))
        .map(|(name, human)| UncastActor {
            name: name.to_string(),
            nationality: human.nationality.trim().to_string(),
            imdb_star_meter_rating: human.imdb_star_meter_rating,
        })
        .collect();
    uncast.sort_by(|a, b| a.nationality.cmp(&b.nationality));
    uncast
}

/// For every human cast at least once, their age at each of their movies, in
/// movie order.
pub fn actors_ages_in_movies(humans: &KeyedTable<Human>, movies: &[Movie]) -> Vec<ActorAges> {
    humans
        .iter()
        .filter_map(|(name, human)| {
            let ages: Vec<i64> = movies
                .iter()
                .filter(|m| m.cast.iter().any(|c| c == name))
                .map(|m| age_at(m, human))
                .collect();
            (!ages.is_empty()).then(|| ActorAges {
                name: name.to_string(),
                ages,
            })
        })
        .collect()
}
