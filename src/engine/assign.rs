use super::types::RunState;
use super::{eligibility, scoring};
use crate::config::GenerationConfig;
use crate::model::{Assignment, AssignmentStatus, Location, ShiftType, StaffMember};
use chrono::NaiveDate;

/// Tente de pourvoir un créneau (date, vacation, site) : filtre le vivier,
/// classe par score décroissant et engage le meilleur candidat. Renvoie
/// l'identifiant de l'affectation créée, ou `None` si personne n'est
/// disponible : le créneau reste alors simplement vacant.
///
/// Le vivier n'est pas épuisé entre les sites d'un même couple
/// (date, vacation) : un membre peut être retenu deux fois si l'ordre
/// d'itération le permet.
pub(super) fn assign_slot(
    date: NaiveDate,
    shift_type: ShiftType,
    location: &Location,
    staff: &[StaffMember],
    assignments: &mut Vec<Assignment>,
    state: &mut RunState,
    config: &GenerationConfig,
) -> Option<u32> {
    let mut candidates: Vec<(&StaffMember, f64)> = staff
        .iter()
        .filter(|member| eligibility::is_eligible(member, date, assignments, &config.rules))
        .map(|member| {
            let score =
                scoring::score_candidate(member, location, shift_type, assignments, state, config);
            (member, score)
        })
        .collect();

    // Tri stable : à score égal, l'ordre du vivier d'entrée départage.
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (selected, _) = candidates.first()?;

    let assignment = Assignment {
        id: (assignments.len() + 1) as u32,
        date,
        location_id: location.id.clone(),
        staff_id: selected.id.clone(),
        shift_type,
        status: AssignmentStatus::Scheduled,
    };
    let id = assignment.id;
    state.record(&assignment);
    assignments.push(assignment);
    Some(id)
}
