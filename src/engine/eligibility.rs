use crate::config::Rules;
use crate::model::{Assignment, StaffId, StaffMember};
use chrono::{Duration, NaiveDate};

/// Horizon du balayage arrière pour les jours consécutifs.
const CONSECUTIVE_SCAN_DAYS: i64 = 7;

/// Vérifie qu'un membre peut prendre une garde ce jour-là, au vu des
/// affectations déjà engagées. Lecture pure, aucune écriture.
pub(super) fn is_eligible(
    member: &StaffMember,
    date: NaiveDate,
    assignments: &[Assignment],
    rules: &Rules,
) -> bool {
    if member.on_leave(date) {
        return false;
    }

    // Le plafond personnel ne peut que resserrer la règle globale.
    let consecutive_limit = member
        .preferences
        .max_consecutive_days
        .map_or(rules.max_consecutive_days, |m| {
            m.min(rules.max_consecutive_days)
        });
    if consecutive_days_before(&member.id, date, assignments) >= consecutive_limit {
        return false;
    }

    if let Some(previous) = latest_assignment_date(&member.id, assignments) {
        let rest_hours = 24 * (date - previous).num_days();
        if rest_hours < i64::from(rules.min_rest_between_shifts) {
            return false;
        }
    }

    if shifts_in_week(&member.id, date, assignments) >= rules.max_shifts_per_week {
        return false;
    }

    true
}

/// Nombre de jours travaillés d'affilée juste avant `date` : on remonte
/// jour par jour jusqu'au premier trou, sans dépasser l'horizon.
pub(super) fn consecutive_days_before(
    staff_id: &StaffId,
    date: NaiveDate,
    assignments: &[Assignment],
) -> u32 {
    let mut consecutive = 0u32;
    for offset in 1..=CONSECUTIVE_SCAN_DAYS {
        let day = date - Duration::days(offset);
        let worked = assignments
            .iter()
            .any(|a| &a.staff_id == staff_id && a.date == day);
        if !worked {
            break;
        }
        consecutive += 1;
    }
    consecutive
}

/// Date de l'affectation la plus récente du membre, toutes vacations
/// confondues. `None` si le membre n'a encore rien.
pub(super) fn latest_assignment_date(
    staff_id: &StaffId,
    assignments: &[Assignment],
) -> Option<NaiveDate> {
    assignments
        .iter()
        .filter(|a| &a.staff_id == staff_id)
        .map(|a| a.date)
        .max()
}

/// Gardes du membre dans la fenêtre glissante `[date-6, date]` incluse.
pub(super) fn shifts_in_week(
    staff_id: &StaffId,
    date: NaiveDate,
    assignments: &[Assignment],
) -> u32 {
    let window_start = date - Duration::days(6);
    assignments
        .iter()
        .filter(|a| &a.staff_id == staff_id && a.date >= window_start && a.date <= date)
        .count() as u32
}
