use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("State management error: {0}")]
    State(#[from] zones_state::StateError),

    #[error("API error: {0}")]
    Api(#[from] zones_api::ApiError),

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),
}
