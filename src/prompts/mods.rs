use serde::Serialize;

use crate::data::model::Mod;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModRatio {
    #[serde(rename = "mod")]
    pub number: u32,
    /// `None` when the mod has no instructors.
    pub students_per_instructor: Option<f64>,
}

pub fn students_per_mod(mods: &[Mod]) -> Vec<ModRatio> {
    mods.iter()
        .map(|m| ModRatio {
            number: m.number,
            students_per_instructor: (m.instructors > 0)
                .then(|| f64::from(m.students) / f64::from(m.instructors)),
        })
        .collect()
}
