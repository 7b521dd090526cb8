use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::filter::{count_by, unique_in_order};
use crate::data::model::Cake;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeStock {
    pub flavor: String,
    pub in_stock: u32,
}

pub fn stock_per_cake(cakes: &[Cake]) -> Vec<CakeStock> {
    cakes
        .iter()
        .map(|c| CakeStock {
            flavor: c.cake_flavor.clone(),
            in_stock: c.in_stock,
        })
        .collect()
}

pub fn only_in_stock(cakes: &[Cake]) -> Vec<Cake> {
    cakes.iter().filter(|c| c.in_stock > 0).cloned().collect()
}

pub fn total_inventory(cakes: &[Cake]) -> u64 {
    cakes.iter().map(|c| u64::from(c.in_stock)).sum()
}

/// Every topping used on any cake, once, in first-seen order.
pub fn all_toppings(cakes: &[Cake]) -> Vec<String> {
    unique_in_order(cakes.iter().flat_map(|c| &c.toppings))
}

/// topping → number of times it appears across all cakes.
pub fn grocery_list(cakes: &[Cake]) -> BTreeMap<String, usize> {
    count_by(cakes.iter().flat_map(|c| &c.toppings))
}
