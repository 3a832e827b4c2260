use crate::engine::PlanError;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Règles de travail appliquées par le résolveur de disponibilité.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub max_consecutive_days: u32,
    /// Repos minimal entre deux gardes, en heures. La granularité du moteur
    /// est le jour : l'écart vaut `24 * différence_de_jours`.
    pub min_rest_between_shifts: u32,
    pub max_shifts_per_week: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_consecutive_days: 5,
            min_rest_between_shifts: 11,
            max_shifts_per_week: 5,
        }
    }
}

/// Pondérations du score d'affectation. Chaque poids doit être un réel
/// fini ≥ 0 ; la somme est libre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub staff_preference: f64,
    /// Multiplie `location.priority` tel quel : le moteur ne normalise pas
    /// le sens de la priorité, c'est la convention de l'appelant qui décide
    /// si un nombre plus grand est plus important.
    pub location_priority: f64,
    pub skill_match: f64,
    pub fairness: f64,
    pub continuity: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            staff_preference: 1.0,
            location_priority: 0.5,
            skill_match: 1.0,
            fairness: 1.0,
            continuity: 0.5,
        }
    }
}

/// Configuration d'une génération : période inclusive + règles + poids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Premier jour de la période (`YYYY-MM-DD`).
    pub start_date: NaiveDate,
    /// Dernier jour de la période, inclus.
    pub end_date: NaiveDate,
    #[serde(default)]
    pub rules: Rules,
    #[serde(default)]
    pub weights: Weights,
}

impl GenerationConfig {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            rules: Rules::default(),
            weights: Weights::default(),
        }
    }

    /// Rejette une configuration inexploitable avant de visiter le moindre
    /// créneau : l'appelant ne doit jamais recevoir une sortie partielle.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.end_date < self.start_date {
            return Err(PlanError::InvalidDateRange);
        }
        if self.rules.max_shifts_per_week == 0 {
            return Err(PlanError::InvalidRules("max_shifts_per_week must be > 0"));
        }
        if self.rules.max_consecutive_days == 0 {
            return Err(PlanError::InvalidRules("max_consecutive_days must be > 0"));
        }
        let w = &self.weights;
        for (name, value) in [
            ("staff_preference", w.staff_preference),
            ("location_priority", w.location_priority),
            ("skill_match", w.skill_match),
            ("fairness", w.fairness),
            ("continuity", w.continuity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlanError::InvalidWeights(name));
            }
        }
        Ok(())
    }
}

/// Charge et valide une configuration JSON depuis un fichier.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<GenerationConfig> {
    let data = std::fs::read(&path)
        .with_context(|| format!("reading config {}", path.as_ref().display()))?;
    let config: GenerationConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.as_ref().display()))?;
    config.validate()?;
    Ok(config)
}
