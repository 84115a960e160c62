pub mod stl;

pub use stl::{StlOptions, to_stl_ascii, to_stl_ascii_with};

#[cfg(feature = "stl-io")]
pub use stl::{to_stl_binary, to_stl_binary_with};

/// Generic I/O and format‑conversion errors.
///
/// Binary encoders are behind cargo feature‑flags. When a feature is
/// disabled the corresponding path never constructs these variants.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("Input is malformed: {0}")]
    MalformedInput(String),

    #[error("Feature is not implemented: {0}")]
    Unimplemented(String),
}

impl From<crate::errors::MeshError> for IoError {
    fn from(value: crate::errors::MeshError) -> Self {
        Self::MalformedInput(value.to_string())
    }
}
