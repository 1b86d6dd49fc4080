use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::engine::constants::*;
use crate::error::{CostError, Result};

/// Scalar knobs that affect cost independently of the ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeParameters {
    /// Target mass of one produced unit, in grams.
    pub unit_weight_g: f64,
    /// Number of units in the batch.
    pub unit_count: f64,
    /// Share of material lost during processing.
    pub loss_pct: f64,
    /// Oven energy for one base (unscaled) batch.
    pub energy_kwh_per_batch: f64,
    pub energy_price_per_kwh: f64,
    /// Water for one base (unscaled) batch.
    pub water_liters_per_batch: f64,
    pub water_price_per_m3: f64,
    /// Labor time for one production session, regardless of batch size.
    pub labor_minutes: f64,
    pub labor_hourly_rate: f64,
    pub packaging_per_unit: f64,
    pub overhead_pct: f64,
    /// Margin relative to the pre-tax sale price.
    pub margin_pct: f64,
    pub vat_pct: f64,
}

impl Default for RecipeParameters {
    fn default() -> Self {
        Self {
            unit_weight_g: DEFAULT_UNIT_WEIGHT_G,
            unit_count: DEFAULT_UNIT_COUNT,
            loss_pct: DEFAULT_LOSS_PCT,
            energy_kwh_per_batch: DEFAULT_ENERGY_KWH_PER_BATCH,
            energy_price_per_kwh: DEFAULT_ENERGY_PRICE_PER_KWH,
            water_liters_per_batch: DEFAULT_WATER_LITERS_PER_BATCH,
            water_price_per_m3: DEFAULT_WATER_PRICE_PER_M3,
            labor_minutes: DEFAULT_LABOR_MINUTES,
            labor_hourly_rate: DEFAULT_LABOR_HOURLY_RATE,
            packaging_per_unit: DEFAULT_PACKAGING_PER_UNIT,
            overhead_pct: DEFAULT_OVERHEAD_PCT,
            margin_pct: DEFAULT_MARGIN_PCT,
            vat_pct: DEFAULT_VAT_PCT,
        }
    }
}

impl RecipeParameters {
    /// Read one parameter.
    pub fn get(&self, key: ParameterKey) -> f64 {
        match key {
            ParameterKey::UnitWeight => self.unit_weight_g,
            ParameterKey::UnitCount => self.unit_count,
            ParameterKey::Loss => self.loss_pct,
            ParameterKey::EnergyKwh => self.energy_kwh_per_batch,
            ParameterKey::EnergyPrice => self.energy_price_per_kwh,
            ParameterKey::WaterLiters => self.water_liters_per_batch,
            ParameterKey::WaterPrice => self.water_price_per_m3,
            ParameterKey::LaborMinutes => self.labor_minutes,
            ParameterKey::LaborRate => self.labor_hourly_rate,
            ParameterKey::Packaging => self.packaging_per_unit,
            ParameterKey::Overhead => self.overhead_pct,
            ParameterKey::Margin => self.margin_pct,
            ParameterKey::Vat => self.vat_pct,
        }
    }

    /// Write one parameter after validating it.
    pub fn set(&mut self, key: ParameterKey, value: f64) -> Result<()> {
        validate_value(key, value)?;
        let slot = match key {
            ParameterKey::UnitWeight => &mut self.unit_weight_g,
            ParameterKey::UnitCount => &mut self.unit_count,
            ParameterKey::Loss => &mut self.loss_pct,
            ParameterKey::EnergyKwh => &mut self.energy_kwh_per_batch,
            ParameterKey::EnergyPrice => &mut self.energy_price_per_kwh,
            ParameterKey::WaterLiters => &mut self.water_liters_per_batch,
            ParameterKey::WaterPrice => &mut self.water_price_per_m3,
            ParameterKey::LaborMinutes => &mut self.labor_minutes,
            ParameterKey::LaborRate => &mut self.labor_hourly_rate,
            ParameterKey::Packaging => &mut self.packaging_per_unit,
            ParameterKey::Overhead => &mut self.overhead_pct,
            ParameterKey::Margin => &mut self.margin_pct,
            ParameterKey::Vat => &mut self.vat_pct,
        };
        *slot = value;
        Ok(())
    }

    /// Check every field is finite and non-negative.
    ///
    /// Percentages at or above 100 are still accepted here; the engine reports
    /// them as configuration issues on the breakdown.
    pub fn validate(&self) -> Result<()> {
        for key in ParameterKey::ALL {
            validate_value(key, self.get(key))?;
        }
        Ok(())
    }

    /// (name, value) pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        ParameterKey::ALL
            .iter()
            .map(|&key| (key.name(), self.get(key)))
            .collect()
    }
}

fn validate_value(key: ParameterKey, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CostError::InvalidParameter {
            name: key.name().to_string(),
            value,
        })
    }
}

/// Addressable names for every field of [`RecipeParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    UnitWeight,
    UnitCount,
    Loss,
    EnergyKwh,
    EnergyPrice,
    WaterLiters,
    WaterPrice,
    LaborMinutes,
    LaborRate,
    Packaging,
    Overhead,
    Margin,
    Vat,
}

impl ParameterKey {
    pub const ALL: [ParameterKey; 13] = [
        ParameterKey::UnitWeight,
        ParameterKey::UnitCount,
        ParameterKey::Loss,
        ParameterKey::EnergyKwh,
        ParameterKey::EnergyPrice,
        ParameterKey::WaterLiters,
        ParameterKey::WaterPrice,
        ParameterKey::LaborMinutes,
        ParameterKey::LaborRate,
        ParameterKey::Packaging,
        ParameterKey::Overhead,
        ParameterKey::Margin,
        ParameterKey::Vat,
    ];

    /// Stable name used on the command line and in the session file.
    pub fn name(&self) -> &'static str {
        match self {
            ParameterKey::UnitWeight => "unit_weight",
            ParameterKey::UnitCount => "unit_count",
            ParameterKey::Loss => "loss_pct",
            ParameterKey::EnergyKwh => "energy_kwh",
            ParameterKey::EnergyPrice => "energy_price",
            ParameterKey::WaterLiters => "water_liters",
            ParameterKey::WaterPrice => "water_price",
            ParameterKey::LaborMinutes => "labor_minutes",
            ParameterKey::LaborRate => "labor_rate",
            ParameterKey::Packaging => "packaging",
            ParameterKey::Overhead => "overhead_pct",
            ParameterKey::Margin => "margin_pct",
            ParameterKey::Vat => "vat_pct",
        }
    }

    /// Parse a name case-insensitively, accepting `-` for `_`.
    ///
    /// Unknown names carry the closest known name as a suggestion.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase().replace('-', "_");

        if let Some(key) = Self::ALL.iter().find(|k| k.name() == normalized) {
            return Ok(*key);
        }

        let suggestion = Self::ALL
            .iter()
            .map(|k| (k.name(), jaro_winkler(k.name(), &normalized)))
            .filter(|(_, score)| *score > 0.7)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, _)| name.to_string());

        Err(CostError::UnknownParameter {
            name: input.to_string(),
            suggestion,
        })
    }
}

impl std::fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
