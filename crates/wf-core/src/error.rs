use thiserror::Error;

pub type WfResult<T> = Result<T, WfError>;

#[derive(Error, Debug)]
pub enum WfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Not found: {what}")]
    NotFound { what: String },
}
