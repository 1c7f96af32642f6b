use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{DinnerError, Result};
use crate::models::{DAYS_PER_WEEK, DinnerType, DinnerTypeId};
use crate::planner::constants::{DEFAULT_DINNER_TYPE, DINNER_TYPES, dinner_type};

/// Look up a selectable dinner type. `custom` is not one.
pub fn resolve_dinner_type(id: DinnerTypeId) -> Result<&'static DinnerType> {
    dinner_type(id).ok_or_else(|| {
        DinnerError::InvalidInput(format!("'{}' is not a dinner type you can generate", id))
    })
}

pub fn resolve_dinner_types(ids: &[DinnerTypeId]) -> Result<Vec<&'static DinnerType>> {
    ids.iter().copied().map(resolve_dinner_type).collect()
}

/// The starting week: the default type on every day.
pub fn default_week() -> Vec<&'static DinnerType> {
    let default = dinner_type(DEFAULT_DINNER_TYPE).unwrap_or(&DINNER_TYPES[0]);
    vec![default; DAYS_PER_WEEK]
}

/// A week with a random dinner type on each day.
pub fn random_week<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static DinnerType> {
    (0..DAYS_PER_WEEK)
        .map(|_| DINNER_TYPES.choose(rng).unwrap_or(&DINNER_TYPES[0]))
        .collect()
}
