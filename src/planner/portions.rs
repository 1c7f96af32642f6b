use crate::models::Diner;
use crate::planner::constants::{EATER_PROFILES, UNKNOWN_PROFILE_MULTIPLIER, eater_profile};

/// Portion information derived from the diner list.
#[derive(Debug, Clone, PartialEq)]
pub struct DinerSummary {
    /// Number of people at the table.
    pub headcount: usize,
    /// Equivalent number of standard servings.
    pub total_multiplier: f64,
    /// e.g. `2 Humano (x1), 1 Bestia Parda (x1.5)`.
    pub composition: String,
}

/// Multiplier for one diner. Unknown profile ids count as one standard serving.
pub fn diner_multiplier(diner: &Diner) -> f64 {
    eater_profile(&diner.appetite)
        .map(|p| p.multiplier)
        .unwrap_or(UNKNOWN_PROFILE_MULTIPLIER)
}

/// Sum of every diner's profile multiplier.
pub fn total_multiplier(diners: &[Diner]) -> f64 {
    diners.iter().map(diner_multiplier).sum()
}

/// Human-readable breakdown per known profile, in profile declaration order.
///
/// Profiles with nobody are left out; unknown ids do not appear.
pub fn diner_composition(diners: &[Diner]) -> String {
    EATER_PROFILES
        .iter()
        .filter_map(|profile| {
            let count = diners.iter().filter(|d| d.appetite == profile.id).count();
            (count > 0).then(|| format!("{} {} (x{})", count, profile.name, profile.multiplier))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Appetite ids that match no eater profile, in list order.
pub fn unknown_appetites(diners: &[Diner]) -> Vec<&str> {
    diners
        .iter()
        .map(|d| d.appetite.as_str())
        .filter(|appetite| eater_profile(appetite).is_none())
        .collect()
}

pub fn summarize_diners(diners: &[Diner]) -> DinerSummary {
    DinerSummary {
        headcount: diners.len(),
        total_multiplier: total_multiplier(diners),
        composition: diner_composition(diners),
    }
}

/// Format a multiplier the way prompts and screens show it.
pub fn format_multiplier(multiplier: f64) -> String {
    format!("{:.2}", multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diners(appetites: &[&str]) -> Vec<Diner> {
        appetites
            .iter()
            .enumerate()
            .map(|(i, a)| Diner::new(i as u64, *a))
            .collect()
    }

    #[test]
    fn test_total_multiplier() {
        let list = diners(&["humano", "humano", "bestia-parda"]);
        assert!((total_multiplier(&list) - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_profile_counts_as_one() {
        let list = diners(&["periquito", "unicorn"]);
        assert!((total_multiplier(&list) - 1.75).abs() < 1e-9);
        assert_eq!(diner_composition(&list), "1 Periquito (x0.75)");
    }

    #[test]
    fn test_unknown_appetites_are_listed() {
        let list = diners(&["humano", "bestia", "periquito", "Humano"]);
        assert_eq!(unknown_appetites(&list), vec!["bestia", "Humano"]);
        assert!(unknown_appetites(&diners(&["bestia-parda"])).is_empty());
    }

    #[test]
    fn test_composition_follows_profile_order() {
        let list = diners(&["bestia-parda", "humano", "periquito", "humano"]);
        assert_eq!(
            diner_composition(&list),
            "1 Periquito (x0.75), 2 Humano (x1), 1 Bestia Parda (x1.5)"
        );
    }

    #[test]
    fn test_composition_omits_empty_profiles() {
        let list = diners(&["humano"]);
        assert_eq!(diner_composition(&list), "1 Humano (x1)");
    }

    #[test]
    fn test_format_multiplier() {
        assert_eq!(format_multiplier(3.5), "3.50");
        assert_eq!(format_multiplier(0.75), "0.75");
    }
}
