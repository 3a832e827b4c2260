use crate::model::{Assignment, Location, LocationId, ShiftType, StaffId, StaffMember};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid date range: end must not precede start")]
    InvalidDateRange,
    #[error("invalid rules: {0}")]
    InvalidRules(&'static str),
    #[error("invalid weight: {0} must be a finite value >= 0")]
    InvalidWeights(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Comptabilité mutable d'une génération : charge par membre et couverture
/// par site/vacation. Créée à chaque run, jamais partagée entre deux runs.
#[derive(Debug, Default)]
pub struct RunState {
    pub workload: HashMap<StaffId, u32>,
    pub coverage: HashMap<LocationId, HashMap<ShiftType, u32>>,
}

impl RunState {
    /// Initialise chaque membre et chaque (site, vacation) à zéro.
    pub fn new(staff: &[StaffMember], locations: &[Location]) -> Self {
        let mut state = Self::default();
        for member in staff {
            state.workload.insert(member.id.clone(), 0);
        }
        for location in locations {
            let per_shift = ShiftType::ALL.iter().map(|s| (*s, 0)).collect();
            state.coverage.insert(location.id.clone(), per_shift);
        }
        state
    }

    /// Reconstruit l'état depuis une liste d'affectations terminée.
    /// Les cartes doivent rester cohérentes avec la liste ; c'est le même
    /// code qui sert aux métriques et aux tests d'invariant.
    pub fn rebuild(
        assignments: &[Assignment],
        staff: &[StaffMember],
        locations: &[Location],
    ) -> Self {
        let mut state = Self::new(staff, locations);
        for assignment in assignments {
            state.record(assignment);
        }
        state
    }

    pub fn record(&mut self, assignment: &Assignment) {
        *self.workload.entry(assignment.staff_id.clone()).or_insert(0) += 1;
        *self
            .coverage
            .entry(assignment.location_id.clone())
            .or_default()
            .entry(assignment.shift_type)
            .or_insert(0) += 1;
    }

    pub fn workload_of(&self, id: &StaffId) -> u32 {
        self.workload.get(id).copied().unwrap_or(0)
    }
}

/// Scores agrégés calculés une fois la liste d'affectations close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub staff_satisfaction: f64,
    pub coverage: f64,
    pub fairness_score: f64,
    pub constraint_violations: usize,
}

/// Résultat d'une génération.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub assignments: Vec<Assignment>,
    pub metrics: Metrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    ConsecutiveDays,
    Rest,
    WeeklyCap,
    RoleMismatch,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::ConsecutiveDays => "consecutive_days",
            ViolationKind::Rest => "rest",
            ViolationKind::WeeklyCap => "weekly_cap",
            ViolationKind::RoleMismatch => "role_mismatch",
        }
    }
}

/// Manquement relevé par l'audit a posteriori.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub assignment_id: u32,
    pub staff_id: StaffId,
    pub date: chrono::NaiveDate,
    pub kind: ViolationKind,
}
