pub mod draw;
pub mod participant;
