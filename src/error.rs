use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task {0} not found")]
    TaskNotFound(u64),

    #[error("no task ids left: the highest id is already in use")]
    IdsExhausted,

    #[error("could not decode task file '{path}': {source}")]
    CorruptStore {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TaskNotFound(_) => "task_not_found",
            Self::IdsExhausted => "ids_exhausted",
            Self::CorruptStore { .. } => "corrupt_store",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let err = TaskError::TaskNotFound(7);
        assert_eq!(err.to_string(), "task 7 not found");
        assert_eq!(err.code(), "task_not_found");
    }

    #[test]
    fn corrupt_store_keeps_parse_error_as_source() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = TaskError::CorruptStore {
            path: "tasks.json".into(),
            source,
        };
        assert!(err.to_string().starts_with("could not decode task file 'tasks.json'"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.code(), "corrupt_store");
    }
}
