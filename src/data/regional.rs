//! Regional comparison snapshot.
//!
//! One row per country with force-size and budget indicators. Used by the
//! comparison command when no input file is given.

use crate::domain::EntitySnapshot;

pub const ACTIVE_PERSONNEL_K: &str = "active_personnel_k";
pub const RESERVISTS_K: &str = "reservists_k";
pub const MAIN_BATTLE_TANKS: &str = "main_battle_tanks";
pub const ARMORED_VEHICLES: &str = "armored_vehicles";
pub const ARTILLERY: &str = "artillery";
pub const DEFENSE_BUDGET_MUSD: &str = "defense_budget_musd";
pub const SPEND_PER_SOLDIER_KUSD: &str = "spend_per_soldier_kusd";

/// Indicators compared when the caller does not pick any.
pub const DEFAULT_INDICATORS: &[&str] = &[ACTIVE_PERSONNEL_K, MAIN_BATTLE_TANKS, DEFENSE_BUDGET_MUSD];

/// Entity highlighted by default in position summaries.
pub const DEFAULT_FOCUS: &str = "Egypt";

pub fn regional_snapshots() -> Vec<EntitySnapshot> {
    // (country, active k, reservists k, tanks, armored vehicles, artillery, budget M$, spend/soldier k$)
    let rows: [(&str, f64, f64, f64, f64, f64, f64, f64); 6] = [
        ("Egypt", 462.0, 491.0, 3760.0, 12000.0, 2050.0, 8800.0, 19.0),
        ("Israel", 169.0, 465.0, 1500.0, 10000.0, 750.0, 24000.0, 142.0),
        ("Turkey", 355.0, 380.0, 3200.0, 11000.0, 3000.0, 15000.0, 42.3),
        ("Saudi Arabia", 227.0, 25.0, 1065.0, 8500.0, 1250.0, 57000.0, 251.1),
        ("Iran", 610.0, 350.0, 2300.0, 15000.0, 3500.0, 10000.0, 16.4),
        ("Algeria", 130.0, 150.0, 1300.0, 6000.0, 1000.0, 9500.0, 73.1),
    ];

    rows.iter()
        .map(|&(country, active, reserve, tanks, armored, artillery, budget, per_soldier)| {
            EntitySnapshot::new(country)
                .with(ACTIVE_PERSONNEL_K, active)
                .with(RESERVISTS_K, reserve)
                .with(MAIN_BATTLE_TANKS, tanks)
                .with(ARMORED_VEHICLES, armored)
                .with(ARTILLERY, artillery)
                .with(DEFENSE_BUDGET_MUSD, budget)
                .with(SPEND_PER_SOLDIER_KUSD, per_soldier)
        })
        .collect()
}
