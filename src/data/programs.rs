//! Modernization programs of the whole-force profile.

use crate::domain::{Program, ProgramStatus};

pub fn modernization_programs() -> Vec<Program> {
    let program = |name: &str, budget_musd: f64, start: i32, end: i32, status: ProgramStatus| Program {
        name: name.to_string(),
        budget_musd,
        start,
        end,
        status,
    };

    vec![
        program("T-55/T-62 upgrade", 800.0, 2015, 2025, ProgramStatus::InProgress),
        program("T-90MS acquisition", 1200.0, 2020, 2027, ProgramStatus::InProgress),
        program("8x8 infantry fighting vehicles", 500.0, 2018, 2024, ProgramStatus::Completed),
        program("Modern ATGM systems", 300.0, 2016, 2022, ProgramStatus::Completed),
        program("Self-propelled artillery", 400.0, 2019, 2026, ProgramStatus::InProgress),
        program("C4ISR systems", 600.0, 2017, 2025, ProgramStatus::InProgress),
    ]
}
