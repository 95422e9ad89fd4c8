pub mod calculator;
pub mod design;
pub mod guards;
pub mod inputs;
