use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifiant fort pour StaffMember
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffId(String);

impl StaffId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour Location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(String);

impl LocationId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant de rôle métier (médecin, interne, IDE…), piloté par les données.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(String);

impl RoleId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Vacation de la journée. L'ordre de `ALL` est l'ordre de génération.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Morning,
    Afternoon,
    Night,
}

impl ShiftType {
    pub const ALL: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Afternoon, ShiftType::Night];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Morning => "morning",
            ShiftType::Afternoon => "afternoon",
            ShiftType::Night => "night",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statut d'une affectation. Le moteur produit toujours `Scheduled` ;
/// les deux autres existent pour relire des données confirmées en amont.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Scheduled,
    Confirmed,
    Declined,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Scheduled => "scheduled",
            AssignmentStatus::Confirmed => "confirmed",
            AssignmentStatus::Declined => "declined",
        }
    }
}

/// Répartition de temps de travail (informatif, jamais évalué par le moteur).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FteSplit {
    #[serde(default)]
    pub clinical: f32,
    #[serde(default)]
    pub research: f32,
    #[serde(default)]
    pub admin: f32,
}

/// Préférences d'un membre du personnel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_locations: Vec<LocationId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_shifts: Vec<ShiftType>,
    /// Plafond personnel de jours consécutifs ; ne peut que resserrer la règle globale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_consecutive_days: Option<u32>,
}

/// Contraintes d'un membre du personnel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaffConstraints {
    /// Dates de congé (jour exact, format `YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leave_dates: Vec<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cannot_work_with: Vec<StaffId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_breaks: Option<u32>,
}

/// Membre du personnel (entrée immuable d'une génération).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: RoleId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub fte: FteSplit,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub constraints: StaffConstraints,
}

impl StaffMember {
    pub fn new<I: AsRef<str>, N: Into<String>, R: AsRef<str>>(id: I, name: N, role: R) -> Self {
        Self {
            id: StaffId::new(id),
            name: name.into(),
            role: RoleId::new(role),
            group: None,
            fte: FteSplit::default(),
            preferences: Preferences::default(),
            constraints: StaffConstraints::default(),
        }
    }

    pub fn on_leave(&self, date: NaiveDate) -> bool {
        self.constraints.leave_dates.contains(&date)
    }
}

/// Contraintes d'un site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationConstraints {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_roles: Vec<RoleId>,
}

/// Site de travail (service, unité, bloc…).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    /// Valeur brute multipliée dans le score ; le sens (croissant ou
    /// décroissant = plus important) est une convention de l'appelant.
    pub priority: i32,
    pub min_staff_required: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<LocationConstraints>,
}

impl Location {
    pub fn new<I: AsRef<str>, N: Into<String>>(
        id: I,
        name: N,
        priority: i32,
        min_staff_required: u32,
    ) -> Self {
        Self {
            id: LocationId::new(id),
            name: name.into(),
            priority,
            min_staff_required,
            constraints: None,
        }
    }

    /// Une liste de rôles requis vide équivaut à l'absence de contrainte.
    pub fn accepts_role(&self, role: &RoleId) -> bool {
        match &self.constraints {
            None => true,
            Some(c) => c.required_roles.is_empty() || c.required_roles.contains(role),
        }
    }
}

/// Affectation produite par le moteur (jamais modifiée après création).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u32,
    pub date: NaiveDate,
    pub location_id: LocationId,
    pub staff_id: StaffId,
    pub shift_type: ShiftType,
    pub status: AssignmentStatus,
}

/// Tableau de service complet (l'unité persistée sur disque).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    pub staff: Vec<StaffMember>,
    pub locations: Vec<Location>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Roster {
    pub fn find_staff_by_id<'a>(&'a self, id: &StaffId) -> Option<&'a StaffMember> {
        self.staff.iter().find(|s| &s.id == id)
    }
    pub fn find_location_by_id<'a>(&'a self, id: &LocationId) -> Option<&'a Location> {
        self.locations.iter().find(|l| &l.id == id)
    }
}
