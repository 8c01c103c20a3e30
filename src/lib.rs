// LieLens: manipulation-tactic and cognitive-bias scoring for arbitrary text.
//
// This is the library root. Each module corresponds to one stage of the
// analysis flow: input gate -> analyzer (scoring) -> report synthesis,
// with the web and terminal surfaces on top.

pub mod analyzer;
pub mod config;
pub mod input;
pub mod output;
pub mod report;
pub mod scoring;
pub mod web;
