use crate::{CoreError, Destination, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Bounded stack of screens on top of the main menu.
/// An empty stack means the main menu is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Destination>,
    max_depth: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }
}

impl Navigator {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            stack: Vec::new(),
            max_depth,
        }
    }

    #[track_caller]
    pub fn push(&mut self, destination: Destination) -> CoreResult<()> {
        if self.stack.len() >= self.max_depth {
            return Err(CoreError::NavigationOverflow {
                max_depth: self.max_depth,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.stack.push(destination);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Destination> {
        self.stack.pop()
    }

    pub fn current(&self) -> Option<Destination> {
        self.stack.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Back to the main menu
    pub fn reset(&mut self) {
        self.stack.clear();
    }
}
