//! Dependency analysis core
//!
//! Pure domain model and services: parsing manifest/lockfile text into facts,
//! building the dependency graph, previewing removal impact and laying out
//! a focus-relative view. Nothing in here performs I/O.

pub mod domain;
pub mod services;
