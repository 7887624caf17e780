//! Equipment inventory growth and modernity.

use serde::Serialize;

use crate::domain::EquipmentStock;

/// Growth of one equipment type between the two inventory years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentGrowth {
    pub kind: String,
    pub baseline: u32,
    pub current: u32,
    /// `(current - baseline) / baseline * 100`; `None` when `baseline` is 0.
    pub growth_pct: Option<f64>,
    pub modernity_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub items: Vec<EquipmentGrowth>,
    /// Unweighted mean of the per-type modernity rates.
    pub mean_modernity_pct: Option<f64>,
}

pub fn summarize_inventory(stock: &[EquipmentStock]) -> InventorySummary {
    let items = stock
        .iter()
        .map(|s| EquipmentGrowth {
            kind: s.kind.clone(),
            baseline: s.baseline,
            current: s.current,
            growth_pct: (s.baseline > 0)
                .then(|| (f64::from(s.current) - f64::from(s.baseline)) / f64::from(s.baseline) * 100.0),
            modernity_pct: s.modernity_pct,
        })
        .collect();

    let mean_modernity_pct = (!stock.is_empty())
        .then(|| stock.iter().map(|s| s.modernity_pct).sum::<f64>() / stock.len() as f64);

    InventorySummary {
        items,
        mean_modernity_pct,
    }
}
