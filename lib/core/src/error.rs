use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Word not in embedding vocabulary: '{0}'")]
    OutOfVocabulary(String),

    #[error("Similarity is undefined for an empty token sequence")]
    EmptySequence,

    #[error("Embedding model error: {0}")]
    Model(String),
}
