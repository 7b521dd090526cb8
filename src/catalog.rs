use std::fmt;

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::data::model::Datasets;
use crate::prompts::{
    astronomy, bosses, breweries, cakes, classrooms, clubs, dinosaurs, kitties, mods, turing,
    ultima,
};

// ---------------------------------------------------------------------------
// Prompt – every named query
// ---------------------------------------------------------------------------

/// A named prompt. Names are the camelCase names used on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[value(rename_all = "camelCase")]
pub enum Prompt {
    OrangeKittyNames,
    SortByAge,
    GrowUp,
    MembersBelongingToClubs,
    StudentsPerMod,
    StockPerCake,
    OnlyInStock,
    TotalInventory,
    AllToppings,
    GroceryList,
    FeClassrooms,
    TotalCapacities,
    SortByCapacity,
    GetBeerCount,
    GetBreweryBeerCount,
    FindHighestAbvBeer,
    StudentsForEachInstructor,
    StudentsPerInstructor,
    ModulesPerTeacher,
    CurriculumPerTeacher,
    BossLoyalty,
    StarsInConstellations,
    StarsByColor,
    ConstellationsStarsExistIn,
    TotalDamage,
    CharactersByTotal,
    CountAwesomeDinosaurs,
    AverageAgePerMovie,
    UncastActors,
    ActorsAgesInMovies,
}

impl Prompt {
    /// Every prompt, grouped by dataset.
    pub fn all() -> &'static [Prompt] {
        Prompt::value_variants()
    }

    /// The dataset family the prompt belongs to.
    pub fn dataset(self) -> &'static str {
        use Prompt::*;
        match self {
            OrangeKittyNames | SortByAge | GrowUp => "kitties",
            MembersBelongingToClubs => "clubs",
            StudentsPerMod => "mods",
            StockPerCake | OnlyInStock | TotalInventory | AllToppings | GroceryList => "cakes",
            FeClassrooms | TotalCapacities | SortByCapacity => "classrooms",
            GetBeerCount | GetBreweryBeerCount | FindHighestAbvBeer => "breweries",
            StudentsForEachInstructor
            | StudentsPerInstructor
            | ModulesPerTeacher
            | CurriculumPerTeacher => "turing",
            BossLoyalty => "bosses",
            StarsInConstellations | StarsByColor | ConstellationsStarsExistIn => "astronomy",
            TotalDamage | CharactersByTotal => "ultima",
            CountAwesomeDinosaurs | AverageAgePerMovie | UncastActors | ActorsAgesInMovies => {
                "dinosaurs"
            }
        }
    }

    /// Whether running the prompt changes the datasets.
    pub fn mutates(self) -> bool {
        self == Prompt::GrowUp
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(v) => f.write_str(v.get_name()),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("serializing prompt result")
}

/// Run `prompt` against `ds` and return its result as JSON.
///
/// Only [`Prompt::GrowUp`] writes to `ds`.
pub fn run(prompt: Prompt, ds: &mut Datasets) -> Result<Value> {
    debug!("running prompt {prompt} over {}", prompt.dataset());
    dispatch(prompt, ds).with_context(|| format!("prompt {prompt}"))
}

fn dispatch(prompt: Prompt, ds: &mut Datasets) -> Result<Value> {
    use Prompt::*;
    match prompt {
        OrangeKittyNames => to_json(kitties::orange_kitty_names(&ds.kitties)),
        SortByAge => to_json(kitties::sort_by_age(&ds.kitties)),
        GrowUp => to_json(kitties::grow_up(&mut ds.kitties)),
        MembersBelongingToClubs => to_json(clubs::members_belonging_to_clubs(&ds.clubs)),
        StudentsPerMod => to_json(mods::students_per_mod(&ds.mods)),
        StockPerCake => to_json(cakes::stock_per_cake(&ds.cakes)),
        OnlyInStock => to_json(cakes::only_in_stock(&ds.cakes)),
        TotalInventory => to_json(cakes::total_inventory(&ds.cakes)),
        AllToppings => to_json(cakes::all_toppings(&ds.cakes)),
        GroceryList => to_json(cakes::grocery_list(&ds.cakes)),
        FeClassrooms => to_json(classrooms::fe_classrooms(&ds.classrooms)),
        TotalCapacities => to_json(classrooms::total_capacities(&ds.classrooms)),
        SortByCapacity => to_json(classrooms::sort_by_capacity(&ds.classrooms)),
        GetBeerCount => to_json(breweries::get_beer_count(&ds.breweries)),
        GetBreweryBeerCount => to_json(breweries::get_brewery_beer_count(&ds.breweries)),
        FindHighestAbvBeer => to_json(breweries::find_highest_abv_beer(&ds.breweries)),
        StudentsForEachInstructor => to_json(turing::students_for_each_instructor(
            &ds.instructors,
            &ds.cohorts,
        )),
        StudentsPerInstructor => to_json(turing::students_per_instructor(
            &ds.instructors,
            &ds.cohorts,
        )?),
        ModulesPerTeacher => to_json(turing::modules_per_teacher(&ds.instructors, &ds.cohorts)),
        CurriculumPerTeacher => {
            to_json(turing::curriculum_per_teacher(&ds.instructors, &ds.cohorts))
        }
        BossLoyalty => to_json(bosses::boss_loyalty(&ds.bosses, &ds.sidekicks)),
        StarsInConstellations => to_json(astronomy::stars_in_constellations(
            &ds.constellations,
            &ds.stars,
        )),
        StarsByColor => to_json(astronomy::stars_by_color(&ds.stars)),
        ConstellationsStarsExistIn => to_json(astronomy::constellations_stars_exist_in(&ds.stars)),
        TotalDamage => to_json(ultima::total_damage(&ds.weapons, &ds.characters)?),
        CharactersByTotal => to_json(ultima::characters_by_total(&ds.weapons, &ds.characters)?),
        CountAwesomeDinosaurs => to_json(dinosaurs::count_awesome_dinosaurs(
            &ds.dinosaurs,
            &ds.movies,
        )?),
        AverageAgePerMovie => to_json(dinosaurs::average_age_per_movie(&ds.humans, &ds.movies)?),
        UncastActors => to_json(dinosaurs::uncast_actors(&ds.humans, &ds.movies)),
        ActorsAgesInMovies => to_json(dinosaurs::actors_ages_in_movies(&ds.humans, &ds.movies)),
    }
}
