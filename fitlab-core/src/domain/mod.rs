//! Domain records: immutable fixture shapes keyed by a string id.
//!
//! Nothing here mutates after construction. The navigation core only ever reads
//! `id` through [`Keyed`].

mod athlete;
mod facility;
mod testing;

pub use athlete::{AssessmentResult, Athlete, AthleteStatus, Sport};
pub use facility::{
    Equipment, EquipmentStatus, PeriodizationKind, PeriodizationModel, Phase, Session, Volume,
};
pub use testing::{
    Category, NormBand, PerformanceTest, Scoring, Screen, SkillComponent, SkillKind, SubModule,
    TestBattery,
};

/// A record with a stable, unique string id.
pub trait Keyed {
    fn id(&self) -> &str;
}

/// A record with a human-readable title for list rows and headers.
pub trait Titled {
    fn title(&self) -> &str;
}

/// Implements [`Keyed`] for records that store their id in an `id: String` field.
macro_rules! keyed {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Keyed for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

keyed!(
    Athlete,
    AssessmentResult,
    SubModule,
    Screen,
    TestBattery,
    SkillComponent,
    PerformanceTest,
    Equipment,
    Session,
    PeriodizationModel,
);

macro_rules! titled {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl Titled for $ty {
                fn title(&self) -> &str {
                    &self.$field
                }
            }
        )+
    };
}

titled!(
    Athlete => name,
    AssessmentResult => test_name,
    SubModule => name,
    Screen => name,
    TestBattery => name,
    SkillComponent => name,
    PerformanceTest => name,
    Equipment => name,
    Session => title,
    PeriodizationModel => name,
);

/// Linear scan for the record with the given id.
pub fn find<'a, T: Keyed>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn find_by_id() {
        let athletes = fixtures::athletes();
        let first = &athletes[0];
        assert_eq!(find(&athletes, first.id()).map(|a| a.name.as_str()), Some(first.name.as_str()));
        assert!(find(&athletes, "no_such_athlete").is_none());
    }

    #[test]
    fn find_on_empty_collection() {
        let empty: Vec<Equipment> = Vec::new();
        assert!(find(&empty, "anything").is_none());
    }
}
