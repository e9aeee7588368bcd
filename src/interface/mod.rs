//! Readers that turn external problem formats into a [`Model`](crate::model::Model).

pub mod mps;
