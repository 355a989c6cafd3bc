pub mod generation;
pub mod maze;
pub mod simulation;
