use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("malformed schedule payload: {0}")]
	Json(#[from] serde_json::Error),
	#[error("schedule generation failed: {0}")]
	Generation(String),
	#[error("no subjects selected")]
	NoSubjects,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
