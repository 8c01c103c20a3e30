// Heuristic scoring: signal detection and the additive risk formula.

pub mod risk;
pub mod signals;
