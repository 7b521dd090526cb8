use std::collections::BTreeMap;

use crate::data::model::Club;

/// Invert the club rosters: member → clubs they belong to, in club order.
pub fn members_belonging_to_clubs(clubs: &[Club]) -> BTreeMap<String, Vec<String>> {
    let mut memberships: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for club in clubs {
        for member in &club.members {
            memberships
                .entry(member.clone())
                .or_default()
                .push(club.club.clone());
        }
    }
    memberships
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(name: &str, members: &[&str]) -> Club {
        Club {
            club: name.into(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn inverts_rosters() {
        let clubs = vec![
            club("Drama", &["Louisa", "Pam"]),
            club("Band", &["Pam", "Will"]),
        ];
        let index = members_belonging_to_clubs(&clubs);
        assert_eq!(index["Pam"], vec!["Drama", "Band"]);
        assert_eq!(index["Louisa"], vec!["Drama"]);
        assert_eq!(index["Will"], vec!["Band"]);

        let total: usize = index.values().map(Vec::len).sum();
        let members: usize = clubs.iter().map(|c| c.members.len()).sum();
        assert_eq!(total, members);
    }

    #[test]
    fn empty_table_gives_empty_index() {
        assert!(members_belonging_to_clubs(&[]).is_empty());
    }
}
