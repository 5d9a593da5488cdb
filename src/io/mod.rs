//! Input/output operations, configuration and error handling

/// Command-line arguments and the end-to-end run
pub mod cli;
/// Search, sampling and output constants
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Image loading, saving and directory enumeration
pub mod image;
/// Progress bars for tile loading and composition
pub mod progress;
