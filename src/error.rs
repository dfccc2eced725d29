use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoError {
    #[error(transparent)]
    Note(#[from] crate::note::NoteError),

    #[error(transparent)]
    Store(#[from] crate::store::StoreError),

    #[error(transparent)]
    Command(#[from] crate::commands::CommandError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type MemoResult<T> = Result<T, MemoError>;
