//! Division totals across regional commands.

use serde::Serialize;

use crate::domain::RegionalCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DivisionTotals {
    pub armored: u32,
    pub mechanized: u32,
    pub infantry: u32,
    pub special_forces: u32,
}

impl DivisionTotals {
    pub fn total(&self) -> u32 {
        self.armored + self.mechanized + self.infantry + self.special_forces
    }
}

/// Sum each division type over `commands`.
pub fn summarize_structure(commands: &[RegionalCommand]) -> DivisionTotals {
    commands.iter().fold(DivisionTotals::default(), |acc, c| DivisionTotals {
        armored: acc.armored + c.armored,
        mechanized: acc.mechanized + c.mechanized,
        infantry: acc.infantry + c.infantry,
        special_forces: acc.special_forces + c.special_forces,
    })
}
