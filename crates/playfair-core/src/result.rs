use crate::PlayfairError;

pub type Result<T> = std::result::Result<T, PlayfairError>;
