use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("malformed gef_id {raw:?} on {project_type} record")]
    MalformedId { raw: String, project_type: String },
    #[error("missing gef_id on {project_type} record")]
    MissingId { project_type: String },
    #[error("gef_id {raw:?} on {project_type} record collides with the random-control sentinel")]
    ReservedId { raw: String, project_type: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
