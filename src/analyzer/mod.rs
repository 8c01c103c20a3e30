// Content analysis: trait-based abstraction for swappable analyzers.
//
// The ContentAnalyzer trait defines the interface. HeuristicAnalyzer
// implements it with pattern checks and an additive score. A model-backed
// analyzer can replace it without touching report synthesis.

pub mod heuristic;
pub mod traits;
