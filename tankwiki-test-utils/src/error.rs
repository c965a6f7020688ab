use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error("{0}")]
    ServerError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<tankwiki::server::error::Error> for TestError {
    fn from(err: tankwiki::server::error::Error) -> Self {
        Self::ServerError(Box::new(err))
    }
}
