use super::types::RunState;
use crate::config::GenerationConfig;
use crate::model::{Assignment, Location, ShiftType, StaffMember};

/// Profondeur de l'historique consulté pour la prime de continuité.
const CONTINUITY_WINDOW: usize = 3;

/// Score de désirabilité d'un candidat pour un créneau. Plus haut = mieux,
/// sans borne fixe. Chaque terme est conditionné puis pondéré.
pub(super) fn score_candidate(
    member: &StaffMember,
    location: &Location,
    shift_type: ShiftType,
    assignments: &[Assignment],
    state: &RunState,
    config: &GenerationConfig,
) -> f64 {
    let weights = &config.weights;
    let mut score = 0.0;

    // Deux ajouts indépendants : site préféré, puis vacation préférée.
    if member
        .preferences
        .preferred_locations
        .contains(&location.id)
    {
        score += weights.staff_preference;
    }
    if member.preferences.preferred_shifts.contains(&shift_type) {
        score += weights.staff_preference;
    }

    // Priorité brute du site, sens laissé à la convention de l'appelant.
    score += f64::from(location.priority) * weights.location_priority;

    if location.accepts_role(&member.role) {
        score += weights.skill_match;
    }

    // Équité : inverse de la charge courante, volontairement non bornée.
    let workload = state.workload_of(&member.id);
    let fairness =
        1.0 - f64::from(workload) / f64::from(config.rules.max_shifts_per_week);
    score += fairness * weights.fairness;

    // Continuité : le membre a-t-il travaillé sur ce site récemment ?
    // Les trois dernières affectations en ordre d'insertion, pas de tri.
    let theirs: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| a.staff_id == member.id)
        .collect();
    let recently_there = theirs
        .iter()
        .rev()
        .take(CONTINUITY_WINDOW)
        .any(|a| a.location_id == location.id);
    if recently_there {
        score += weights.continuity;
    }

    score
}
