// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! An implementation of a common error type that is used throughout the library.

use std::fmt;

#[derive(Debug)]
/// A common error type intended to represent the various errors that can occur while using this
/// library.
pub enum Error {
    /// Interface to the standard library IO error
    IoError(std::io::Error),
    /// Interface to the Serde JSON error
    SerdeJsonError(serde_json::Error),
    /// Array shapes disagree at an API boundary
    SizeMismatch(String),
    /// A body or airfoil with unusable corner ordering or indexing
    InvalidOrientation(String),
    /// An iterative solver failed to reach its tolerance within the allowed iterations
    SolverConvergence(String),
    /// A converged solution violates a boundary-condition error gate
    BoundaryResidual(String),
    /// A malformed coordinate file
    FileFormat(String),
    /// A custom error that can be created from a string
    CustomStringError(String),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IoError(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerdeJsonError(error)
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::CustomStringError(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IoError(error) => write!(f, "IO error: {}", error),
            Error::SerdeJsonError(error) => write!(f, "Serde JSON error: {}", error),
            Error::SizeMismatch(error) => write!(f, "Size mismatch: {}", error),
            Error::InvalidOrientation(error) => write!(f, "Invalid orientation: {}", error),
            Error::SolverConvergence(error) => write!(f, "Solver convergence error: {}", error),
            Error::BoundaryResidual(error) => write!(f, "Boundary residual error: {}", error),
            Error::FileFormat(error) => write!(f, "File format error: {}", error),
            Error::CustomStringError(error) => write!(f, "Custom string error: {}", error),
        }
    }
}

impl std::error::Error for Error {}
