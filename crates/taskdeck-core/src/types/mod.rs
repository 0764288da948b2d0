/*
[INPUT]:  Task data requirements and serde requirements
[OUTPUT]: Typed task records with serialization support
[POS]:    Data layer - type definitions shared by store, form, and config
[UPDATE]: When the task record gains fields
*/

pub mod task;

pub use task::*;
