//! Equipment inventory of the whole-force profile.

use crate::domain::EquipmentStock;

/// Year of the `baseline` quantities.
pub const BASELINE_YEAR: i32 = 2012;
/// Year of the `current` quantities.
pub const CURRENT_YEAR: i32 = 2024;

pub fn equipment_inventory() -> Vec<EquipmentStock> {
    // (type, baseline qty, current qty, modernity %)
    let rows: [(&str, u32, u32, f64); 6] = [
        ("Main battle tanks", 3400, 3760, 35.0),
        ("Armored vehicles", 9500, 12000, 40.0),
        ("Towed artillery", 1100, 1200, 25.0),
        ("Self-propelled artillery", 650, 850, 45.0),
        ("Rocket launchers", 450, 600, 30.0),
        ("ATGM systems", 2000, 3000, 60.0),
    ];

    rows.iter()
        .map(|&(kind, baseline, current, modernity_pct)| EquipmentStock {
            kind: kind.to_string(),
            baseline,
            current,
            modernity_pct,
        })
        .collect()
}
