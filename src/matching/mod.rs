pub mod aliases;
pub mod blocking;
pub mod evaluator;
pub mod generic;
pub mod geo;
pub mod normalize;
pub mod similarity;
