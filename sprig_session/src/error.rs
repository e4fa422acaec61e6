// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use sprig_branch::EditError;

/// Error returned by [`Session::apply_edit`](crate::Session::apply_edit).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The session holds no sketch to edit.
    NoSketch,
    /// The edit was refused by the branch graph.
    Edit(EditError),
}

impl From<EditError> for SessionError {
    fn from(err: EditError) -> Self {
        Self::Edit(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSketch => f.write_str("no sketch is being edited"),
            Self::Edit(err) => write!(f, "edit refused: {err}"),
        }
    }
}

impl core::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::NoSketch => None,
            Self::Edit(err) => Some(err),
        }
    }
}
