//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving formatters a denormalized projection of an
//! analysis response.

pub mod impact_read_model;
pub mod impact_read_model_builder;

pub use impact_read_model::{
    DirectDependencyView, GraphSummaryView, ImpactReadModel, MetadataView, PackageView,
    RemovalView, SearchView,
};
pub use impact_read_model_builder::ImpactReadModelBuilder;
