use super::eligibility;
use super::types::{Metrics, RunState, Violation, ViolationKind};
use crate::config::GenerationConfig;
use crate::model::{Assignment, Location, StaffMember};

/// Nombre de vacations par jour, figé dans le dénominateur de couverture.
const SHIFT_TYPES_PER_DAY: u32 = 3;

/// Calcule les scores agrégés sur la liste d'affectations close.
pub(super) fn compute(
    assignments: &[Assignment],
    staff: &[StaffMember],
    locations: &[Location],
    config: &GenerationConfig,
) -> Metrics {
    Metrics {
        staff_satisfaction: staff_satisfaction(assignments, staff),
        coverage: coverage(assignments, locations),
        fairness_score: fairness_score(assignments, staff, locations),
        constraint_violations: audit(assignments, staff, locations, config).len(),
    }
}

/// Ratio affectations créées / places requises. Le dénominateur est
/// `somme(min_staff_required) * 3` : il n'est pas mis à l'échelle du nombre
/// de jours, un ratio > 1 est donc possible sur une période de plusieurs
/// jours. Vaut 0 quand aucune place n'est requise.
fn coverage(assignments: &[Assignment], locations: &[Location]) -> f64 {
    let required: u32 = locations.iter().map(|l| l.min_staff_required).sum();
    let denominator = required * SHIFT_TYPES_PER_DAY;
    if denominator == 0 {
        return 0.0;
    }
    assignments.len() as f64 / f64::from(denominator)
}

/// Moyenne, sur les membres ayant au moins une garde, du ratio
/// `(gardes sur site préféré + gardes sur vacation préférée) / (2n)`.
/// Les membres sans garde ne pèsent pas dans la moyenne ; 0 si personne
/// n'a de garde.
fn staff_satisfaction(assignments: &[Assignment], staff: &[StaffMember]) -> f64 {
    let mut total = 0.0;
    let mut counted = 0u32;

    for member in staff {
        let theirs: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| a.staff_id == member.id)
            .collect();
        if theirs.is_empty() {
            continue;
        }
        let preferred_locations = theirs
            .iter()
            .filter(|a| {
                member
                    .preferences
                    .preferred_locations
                    .contains(&a.location_id)
            })
            .count();
        let preferred_shifts = theirs
            .iter()
            .filter(|a| member.preferences.preferred_shifts.contains(&a.shift_type))
            .count();
        total += (preferred_locations + preferred_shifts) as f64 / (2 * theirs.len()) as f64;
        counted += 1;
    }

    if counted == 0 {
        0.0
    } else {
        total / f64::from(counted)
    }
}

/// `1 - (max - min) / max` sur la charge de tous les membres du vivier,
/// membres sans garde compris. Vaut 1 quand personne ne travaille.
fn fairness_score(assignments: &[Assignment], staff: &[StaffMember], locations: &[Location]) -> f64 {
    let state = RunState::rebuild(assignments, staff, locations);
    let max = state.workload.values().copied().max().unwrap_or(0);
    let min = state.workload.values().copied().min().unwrap_or(0);
    if max == 0 {
        return 1.0;
    }
    1.0 - f64::from(max - min) / f64::from(max)
}

/// Audit a posteriori : rejoue les contrôles numériques du résolveur et le
/// contrôle de rôle sur la liste finale, une affectation à la fois. Les
/// aides du résolveur sont réutilisées telles quelles ; l'écart de repos se
/// mesure donc contre la garde la plus récente du membre sur toute la liste,
/// l'affectation auditée comprise.
pub(super) fn audit(
    assignments: &[Assignment],
    staff: &[StaffMember],
    locations: &[Location],
    config: &GenerationConfig,
) -> Vec<Violation> {
    let rules = &config.rules;
    let mut violations = Vec::new();

    for assignment in assignments {
        let Some(member) = staff.iter().find(|s| s.id == assignment.staff_id) else {
            continue;
        };
        let Some(location) = locations.iter().find(|l| l.id == assignment.location_id) else {
            continue;
        };

        if eligibility::consecutive_days_before(&member.id, assignment.date, assignments)
            > rules.max_consecutive_days
        {
            violations.push(violation(assignment, ViolationKind::ConsecutiveDays));
        }

        if let Some(latest) = eligibility::latest_assignment_date(&member.id, assignments) {
            let rest_hours = 24 * (assignment.date - latest).num_days();
            if rest_hours < i64::from(rules.min_rest_between_shifts) {
                violations.push(violation(assignment, ViolationKind::Rest));
            }
        }

        if eligibility::shifts_in_week(&member.id, assignment.date, assignments)
            > rules.max_shifts_per_week
        {
            violations.push(violation(assignment, ViolationKind::WeeklyCap));
        }

        if !location.accepts_role(&member.role) {
            violations.push(violation(assignment, ViolationKind::RoleMismatch));
        }
    }

    violations
}

fn violation(assignment: &Assignment, kind: ViolationKind) -> Violation {
    Violation {
        assignment_id: assignment.id,
        staff_id: assignment.staff_id.clone(),
        date: assignment.date,
        kind,
    }
}
