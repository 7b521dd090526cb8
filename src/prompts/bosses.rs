use serde::Serialize;

use crate::data::model::{Boss, KeyedTable, Sidekick};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BossLoyalty {
    pub boss_name: String,
    pub sidekick_loyalty: i64,
}

/// Total sidekick loyalty per boss, in boss-table order.
///
/// Sidekicks are matched on `Sidekick::boss == Boss::name`; a boss nobody
/// serves scores 0.
pub fn boss_loyalty(bosses: &KeyedTable<Boss>, sidekicks: &[Sidekick]) -> Vec<BossLoyalty> {
    bosses
        .values()
        .map(|boss| BossLoyalty {
            boss_name: boss.name.clone(),
            sidekick_loyalty: sidekicks
                .iter()
                .filter(|s| s.boss == boss.name)
                .map(|s| i64::from(s.loyalty_to_boss))
                .sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss(name: &str) -> Boss {
        Boss { name: name.into(), sidekicks: vec![] }
    }

    fn sidekick(name: &str, boss: &str, loyalty: i32) -> Sidekick {
        Sidekick {
            name: name.into(),
            boss: boss.into(),
            loyalty_to_boss: loyalty,
        }
    }

    #[test]
    fn sums_loyalty_per_boss() {
        let bosses: KeyedTable<Boss> =
            [("jafar", boss("Jafar")), ("ursula", boss("Ursula")), ("scar", boss("Scar"))]
                .into_iter()
                .collect();
        let sidekicks = vec![
            sidekick("Iago", "Jafar", 3),
            sidekick("Flotsam", "Ursula", 10),
            sidekick("Jetsam", "Ursula", 10),
            sidekick("Stray", "Hades", 7),
        ];
        assert_eq!(
            boss_loyalty(&bosses, &sidekicks),
            vec![
                BossLoyalty { boss_name: "Jafar".into(), sidekick_loyalty: 3 },
                BossLoyalty { boss_name: "Ursula".into(), sidekick_loyalty: 20 },
                BossLoyalty { boss_name: "Scar".into(), sidekick_loyalty: 0 },
            ]
        );
    }

    #[test]
    fn loyalty_sums_past_i32_range() {
        let bosses: KeyedTable<Boss> = [("jafar", boss("Jafar"))].into_iter().collect();
        let sidekicks = vec![
            sidekick("Iago", "Jafar", i32::MAX),
            sidekick("Abis Mal", "Jafar", i32::MAX),
        ];
        assert_eq!(boss_loyalty(&bosses, &sidekicks)[0].sidekick_loyalty, 2 * i64::from(i32::MAX));
    }
}
