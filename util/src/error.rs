use std::fmt::Display;

/// ライブラリ全体で共通のエラー型。
///
/// 演算が満たすべき法則(結合則、単位元、作用の分配則など)の違反は検出しない。
/// そのような場合は誤った値が返るだけでエラーにはならない。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_argument(msg: impl Display) -> Self {
        Self::InvalidArgument(msg.to_string())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_test() {
        let e = Error::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(e.to_string(), "index 5 out of range for length 3");
        assert!(e.is_index_out_of_range());

        let e = Error::invalid_argument(format_args!("size must be positive, got {}", 0));
        assert_eq!(e.to_string(), "invalid argument: size must be positive, got 0");
        assert!(e.is_invalid_argument());
    }
}
