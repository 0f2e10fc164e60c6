pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The matrix ended (or hit a blank line) before the header's row count was satisfied.
    #[error("Not enough rows")]
    NotEnoughRows,

    /// A matrix row whose length, including the line terminator, is not `N + 1`.
    #[error("Incorrect amount of columns or missing newline")]
    ColumnMismatch,

    /// Content remained after the last expected matrix row.
    #[error("Too many rows")]
    TooManyRows,

    /// The graph contains at least one directed cycle; `remaining` edges survived the sort.
    #[error("cycle detected: {remaining} edge(s) remain")]
    CycleDetected { remaining: usize },
}
