use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisitError {
    #[error("visit configuration error: {0}")]
    Config(String),

    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type VisitResult<T> = Result<T, VisitError>;
