mod assign;
mod eligibility;
mod metrics;
mod scoring;
mod types;

pub use types::{Metrics, PlanError, RunState, Solution, Violation, ViolationKind};

use crate::config::GenerationConfig;
use crate::model::{Assignment, Location, ShiftType, StaffMember};

/// Génère un tableau de service complet sur la période configurée.
///
/// Parcours déterministe : dates croissantes, vacations dans l'ordre de
/// `ShiftType::ALL`, sites dans l'ordre d'entrée, puis une tentative par
/// place requise. Dans un même couple (date, vacation), les premiers sites
/// de la liste se servent donc en premier (départage implicite, distinct
/// du champ `priority` du score). Aucun retour en arrière : un créneau
/// non pourvu reste vacant et ne pèse que sur la couverture.
pub fn generate(
    staff: &[StaffMember],
    locations: &[Location],
    config: &GenerationConfig,
) -> Result<Solution, PlanError> {
    config.validate()?;

    let mut state = RunState::new(staff, locations);
    let mut assignments: Vec<Assignment> = Vec::new();

    let mut current = config.start_date;
    while current <= config.end_date {
        for shift_type in ShiftType::ALL {
            for location in locations {
                for _ in 0..location.min_staff_required {
                    // Créneau non pourvu : on continue, pas de retour en arrière.
                    let _ = assign::assign_slot(
                        current,
                        shift_type,
                        location,
                        staff,
                        &mut assignments,
                        &mut state,
                        config,
                    );
                }
            }
        }
        let Some(next) = current.succ_opt() else { break };
        current = next;
    }

    let metrics = metrics::compute(&assignments, staff, locations, config);
    Ok(Solution {
        assignments,
        metrics,
    })
}

/// Rejoue les contrôles de contraintes sur une liste d'affectations close.
/// Sert au métrique `constraint_violations` et au rapport `check` de la CLI.
pub fn audit(
    assignments: &[Assignment],
    staff: &[StaffMember],
    locations: &[Location],
    config: &GenerationConfig,
) -> Vec<Violation> {
    metrics::audit(assignments, staff, locations, config)
}
