#![forbid(unsafe_code)]
//! Roulement — bibliothèque de génération de tableaux de service (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Affectation gloutonne pondérée : préférences, priorité de site,
//!   adéquation de rôle, équité de charge, continuité.
//! - Règles de travail : congés, jours consécutifs, repos minimal,
//!   plafond hebdomadaire.
//! - Audit a posteriori des contraintes + métriques agrégées.
//! - Granularité au jour (`YYYY-MM-DD`) ; pas d'heures intra-journée.

pub mod config;
pub mod engine;
pub mod io;
pub mod model;
pub mod storage;

pub use config::{load_config_from_file, GenerationConfig, Rules, Weights};
pub use engine::{audit, generate, Metrics, PlanError, Solution, Violation, ViolationKind};
pub use model::{
    Assignment, AssignmentStatus, Location, LocationConstraints, LocationId, Preferences, RoleId,
    Roster, ShiftType, StaffConstraints, StaffId, StaffMember,
};
pub use storage::{JsonStorage, Storage};
