use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqError {
    #[error("{op}: index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        op: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl SeqError {
    pub fn out_of_bounds(op: &'static str, index: usize, len: usize) -> Self {
        SeqError::IndexOutOfBounds { op, index, len }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SeqError::IndexOutOfBounds { op, index, len } => format!(
                "列表操作 {} 失敗：索引 {} 超出範圍 (長度 {})",
                op, index, len
            ),
            SeqError::Output(e) => format!("無法寫入輸出：{}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = SeqError::out_of_bounds("set", 4, 3);
        assert_eq!(err.to_string(), "set: index 4 out of bounds for length 3");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: SeqError = io.into();
        assert!(matches!(err, SeqError::Output(_)));
        assert!(err.user_friendly_message().contains("closed"));
    }
}
