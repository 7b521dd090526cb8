use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::model::{Cohort, Instructor};
use crate::error::{QueryError, QueryResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorLoad {
    pub name: String,
    pub student_count: u32,
}

/// One entry per instructor and cohort that share a module, in instructor order.
pub fn students_for_each_instructor(
    instructors: &[Instructor],
    cohorts: &[Cohort],
) -> Vec<InstructorLoad> {
    instructors
        .iter()
        .flat_map(move |instructor| {
            cohorts
                .iter()
                .filter(move |c| c.module == instructor.module)
                .map(move |c| InstructorLoad {
                    name: instructor.name.clone(),
                    student_count: c.student_count,
                })
        })
        .collect()
}

/// `"cohort<N>"` → students per instructor teaching that cohort's module.
///
/// A cohort whose module has no instructors is reported as
/// [`QueryError::ReferenceNotFound`] against the instructors table.
pub fn students_per_instructor(
    instructors: &[Instructor],
    cohorts: &[Cohort],
) -> QueryResult<BTreeMap<String, f64>> {
    let mut per_module: BTreeMap<u32, u32> = BTreeMap::new();
    for instructor in instructors {
        *per_module.entry(instructor.module).or_insert(0) += 1;
    }

    cohorts
        .iter()
        .map(|cohort| -> QueryResult<(String, f64)> {
            let teachers = per_module
                .get(&cohort.module)
                .copied()
                .ok_or_else(|| QueryError::missing("instructors", format!("module {}", cohort.module)))?;
            Ok((
                format!("cohort{}", cohort.cohort),
                f64::from(cohort.student_count) / f64::from(teachers),
            ))
        })
        .collect()
}

/// instructor → sorted modules whose curriculum covers anything they teach.
pub fn modules_per_teacher(
    instructors: &[Instructor],
    cohorts: &[Cohort],
) -> BTreeMap<String, Vec<u32>> {
    let mut result: BTreeMap<String, Vec<u32>> = BTreeMap::new();
    for instructor in instructors {
        let modules = result.entry(instructor.name.clone()).or_default();
        for cohort in cohorts {
            let covers = cohort
                .curriculum
                .iter()
                .any(|topic| instructor.teaches.contains(topic));
            if covers && !modules.contains(&cohort.module) {
                modules.push(cohort.module);
            }
        }
        modules.sort_unstable();
    }
    result
}

/// curriculum topic → instructors able to teach it, in instructor order.
pub fn curriculum_per_teacher(
    instructors: &[Instructor],
    cohorts: &[Cohort],
) -> BTreeMap<String, Vec<String>> {
    let mut result: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for topic in cohorts.iter().flat_map(|c| &c.curriculum) {
        let teachers = result.entry(topic.clone()).or_default();
        for instructor in instructors {
            if instructor.teaches.contains(topic) && !teachers.contains(&instructor.name) {
                teachers.push(instructor.name.clone());
            }
        }
    }
    result
}
