//! Application services - Use case implementations

mod payload_decoder;
mod response_classifier;
mod trip_requirements_service;
mod view_projector;

pub use payload_decoder::decode;
pub use response_classifier::classify;
pub use trip_requirements_service::{
    FailureKind, PipelineFailure, PipelineStage, TripRequirementsService,
};
pub use view_projector::{
    DocumentLink, RequirementView, TripView, format_display_date, project, to_title_case,
};
