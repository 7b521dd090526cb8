use serde::Serialize;

use crate::data::model::Classroom;

pub const FRONT_END: &str = "FE";
pub const BACK_END: &str = "BE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacities {
    pub fe_capacity: u64,
    pub be_capacity: u64,
}

pub fn fe_classrooms(classrooms: &[Classroom]) -> Vec<Classroom> {
    classrooms
        .iter()
        .filter(|c| c.program == FRONT_END)
        .cloned()
        .collect()
}

/// Seats per program. Rooms in any other program are not counted.
pub fn total_capacities(classrooms: &[Classroom]) -> Capacities {
    classrooms
        .iter()
        .fold(Capacities::default(), |mut acc, room| {
            match room.program.as_str() {
                FRONT_END => acc.fe_capacity += u64::from(room.capacity),
                BACK_END => acc.be_capacity += u64::from(room.capacity),
                _ => {}
            }
            acc
        })
}

/// Smallest rooms first. The input table is left untouched.
pub fn sort_by_capacity(classrooms: &[Classroom]) -> Vec<Classroom> {
    let mut sorted = classrooms.to_vec();
    sorted.sort_by_key(|c| c.capacity);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(letter: &str, program: &str, capacity: u32) -> Classroom {
        Classroom {
            room_letter: letter.into(),
            program: program.into(),
            capacity,
        }
    }

    fn rooms() -> Vec<Classroom> {
        vec![
            room("A", "FE", 19),
            room("B", "BE", 29),
            room("C", "FE", 27),
            room("D", "DS", 12),
        ]
    }

    #[test]
    fn filters_front_end() {
        let fe = fe_classrooms(&rooms());
        let letters: Vec<&str> = fe.iter().map(|r| r.room_letter.as_str()).collect();
        assert_eq!(letters, vec!["A", "C"]);
    }

    #[test]
    fn capacities_ignore_other_programs() {
        assert_eq!(
            total_capacities(&rooms()),
            Capacities { fe_capacity: 46, be_capacity: 29 }
        );
        assert_eq!(total_capacities(&[]), Capacities::default());
    }

    #[test]
    fn capacities_handle_huge_rooms() {
        let rooms = vec![room("X", "FE", u32::MAX), room("Y", "FE", u32::MAX)];
        assert_eq!(total_capacities(&rooms).fe_capacity, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn sorts_ascending() {
        let caps: Vec<u32> = sort_by_capacity(&rooms()).iter().map(|r| r.capacity).collect();
        assert_eq!(caps, vec![12, 19, 27, 29]);
    }
}
