//! Domain layer: the utilities themselves and the playground aggregate.

pub mod after;
pub mod censor;
pub mod commands;
pub mod counter;
pub mod cycle;
pub mod once;
pub mod playground;
pub mod pluralize;
