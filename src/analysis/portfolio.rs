//! Modernization program portfolio summary.

use serde::Serialize;

use crate::domain::{Program, ProgramStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub programs: usize,
    pub total_budget_musd: f64,
    pub in_progress: usize,
    pub completed: usize,
    /// First start year and last end year across programs.
    pub span: Option<(i32, i32)>,
}

pub fn summarize_portfolio(programs: &[Program]) -> PortfolioSummary {
    let count = |status: ProgramStatus| programs.iter().filter(|p| p.status == status).count();
    let span = programs
        .iter()
        .map(|p| p.start)
        .min()
        .zip(programs.iter().map(|p| p.end).max());

    PortfolioSummary {
        programs: programs.len(),
        total_budget_musd: programs.iter().map(|p| p.budget_musd).sum(),
        in_progress: count(ProgramStatus::InProgress),
        completed: count(ProgramStatus::Completed),
        span,
    }
}
