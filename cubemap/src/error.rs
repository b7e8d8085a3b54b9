use thiserror::Error;

/* All checks run before any pixel is computed, so a conversion either
 * returns a complete result or an error */
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubemapError {
    /* Face set, buffer or requested output shape unusable: wrong face count,
     * unequal or non-square faces, zero sized or unallocatable output */
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

pub type CubemapResult<T> = Result<T, CubemapError>;
