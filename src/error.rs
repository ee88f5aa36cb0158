pub type FramegridResult<T> = Result<T, FramegridError>;

#[derive(thiserror::Error, Debug)]
pub enum FramegridError {
    #[error("enumeration error: {0}")]
    Enumeration(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("resize error: {0}")]
    Resize(String),

    #[error("output error: {0}")]
    Output(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramegridError {
    pub fn enumeration(msg: impl Into<String>) -> Self {
        Self::Enumeration(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn resize(msg: impl Into<String>) -> Self {
        Self::Resize(msg.into())
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}
