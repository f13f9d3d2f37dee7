//! Core system components: resource assignment and inter-task handoff
pub mod event;
pub mod indicator;
pub mod resources;
