use thiserror::Error;

pub type MobmlResult<T> = Result<T, MobmlError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MobmlError {
    #[error("grid supports 2 or 3 columns, got {columns}")]
    InvalidGridSize { columns: usize },

    #[error("column used outside of a grid block")]
    ColumnOutsideGrid,

    #[error("column call exceeds available column slots ({slots})")]
    ColumnOverflow { slots: usize },
}
