use crate::data::model::Kitty;

/// Years added by [`grow_up`].
pub const GROW_UP_YEARS: u32 = 2;

/// Names of the orange kitties, in table order.
pub fn orange_kitty_names(kitties: &[Kitty]) -> Vec<String> {
    kitties
        .iter()
        .filter(|k| k.color == "orange")
        .map(|k| k.name.clone())
        .collect()
}

/// Kitties from oldest to youngest. The input table is left untouched.
pub fn sort_by_age(kitties: &[Kitty]) -> Vec<Kitty> {
    let mut sorted = kitties.to_vec();
    sorted.sort_by(|a, b| b.age.cmp(&a.age));
    sorted
}

/// Age every kitty by [`GROW_UP_YEARS`] in place and hand the table back.
/// Ages stop at `u32::MAX`.
///
/// This is the only prompt that mutates its input.
pub fn grow_up(kitties: &mut [Kitty]) -> &[Kitty] {
    for kitty in kitties.iter_mut() {
        kitty.age = kitty.age.saturating_add(GROW_UP_YEARS);
    }
    kitties
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kitty(name: &str, age: u32, color: &str) -> Kitty {
        Kitty {
            name: name.into(),
            age,
            color: color.into(),
        }
    }

    fn kitties() -> Vec<Kitty> {
        vec![
            kitty("Tiger", 5, "orange"),
            kitty("Felicia", 2, "grey"),
            kitty("Snickers", 8, "orange"),
        ]
    }

    #[test]
    fn orange_names_only() {
        let two = vec![kitty("Tiger", 5, "orange"), kitty("Felicia", 2, "grey")];
        assert_eq!(orange_kitty_names(&two), vec!["Tiger"]);
        assert_eq!(orange_kitty_names(&kitties()), vec!["Tiger", "Snickers"]);
        assert!(orange_kitty_names(&[]).is_empty());
    }

    #[test]
    fn sorts_oldest_first_without_touching_input() {
        let table = kitties();
        let sorted = sort_by_age(&table);
        let ages: Vec<u32> = sorted.iter().map(|k| k.age).collect();
        assert_eq!(ages, vec![8, 5, 2]);
        assert_eq!(table[0].name, "Tiger");
    }

    #[test]
    fn grow_up_ages_in_place() {
        let mut table = kitties();
        let grown: Vec<u32> = grow_up(&mut table).iter().map(|k| k.age).collect();
        assert_eq!(grown, vec![7, 4, 10]);
        assert_eq!(table[1], kitty("Felicia", 4, "grey"));
    }

    #[test]
    fn grow_up_saturates_at_max_age() {
        let mut table = vec![kitty("Ancient", u32::MAX - 1, "grey")];
        grow_up(&mut table);
        assert_eq!(table[0].age, u32::MAX);
    }
}
