use thiserror::Error;

#[derive(Debug, Error)]
pub enum CuecheckError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "invalid range: a=[{a_begin}, {a_end}) with len {a_len}, b=[{b_begin}, {b_end}) with len {b_len}"
    )]
    InvalidRange {
        a_begin: usize,
        a_end: usize,
        a_len: usize,
        b_begin: usize,
        b_end: usize,
        b_len: usize,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl CuecheckError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn invalid_range(
        a_begin: usize,
        a_end: usize,
        a_len: usize,
        b_begin: usize,
        b_end: usize,
        b_len: usize,
    ) -> Self {
        Self::InvalidRange {
            a_begin,
            a_end,
            a_len,
            b_begin,
            b_end,
            b_len,
        }
    }
}
