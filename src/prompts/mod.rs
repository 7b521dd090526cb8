//! One module per dataset. Every prompt takes the tables it reads as
//! parameters and returns a plain value; only [`kitties::grow_up`] mutates.

pub mod astronomy;
pub mod bosses;
pub mod breweries;
pub mod cakes;
pub mod classrooms;
pub mod clubs;
pub mod dinosaurs;
pub mod kitties;
pub mod mods;
pub mod turing;
pub mod ultima;
