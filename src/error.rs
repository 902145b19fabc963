use thiserror::Error;

/// Error handling for taxonomy database parsing.
///
/// The identification path itself has no error type: every call returns a
/// fully-formed identity, degrading field by field on bad input.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    /// An error occurred while parsing the taxonomy database format.
    #[error("Parse error: {0}")]
    Parse(String),
}
