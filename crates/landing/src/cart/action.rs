//! Per-line cart controls.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Error decoding a rendered control's `data-action` / `data-index`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartActionError {
    #[error("unknown cart action: {0}")]
    UnknownAction(String),
    #[error("invalid cart index: {0}")]
    InvalidIndex(String),
}

/// A click on one of a cart line's controls, addressed by the line's
/// position in the most recent render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Increase(usize),
    Decrease(usize),
    Remove(usize),
}

impl CartAction {
    /// Decode from the `data-action` and `data-index` attributes of a
    /// rendered control.
    ///
    /// # Errors
    ///
    /// Returns an error if the action name is not `increase`, `decrease` or
    /// `remove`, or if the index is not a non-negative integer.
    pub fn from_control(action: &str, index: &str) -> Result<Self, CartActionError> {
        let index = index
            .trim()
            .parse::<usize>()
            .map_err(|_| CartActionError::InvalidIndex(index.to_owned()))?;

        match action.trim() {
            "increase" => Ok(Self::Increase(index)),
            "decrease" => Ok(Self::Decrease(index)),
            "remove" => Ok(Self::Remove(index)),
            other => Err(CartActionError::UnknownAction(other.to_owned())),
        }
    }

    /// The position this action targets.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Increase(index) | Self::Decrease(index) | Self::Remove(index) => index,
        }
    }

    /// The `data-action` attribute value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Increase(_) => "increase",
            Self::Decrease(_) => "decrease",
            Self::Remove(_) => "remove",
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name(), self.index())
    }
}

impl FromStr for CartAction {
    type Err = CartActionError;

    /// Parse the `action:index` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action, index) = s
            .split_once(':')
            .ok_or_else(|| CartActionError::UnknownAction(s.to_owned()))?;
        Self::from_control(action, index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_control() {
        assert_eq!(
            CartAction::from_control("increase", "0"),
            Ok(CartAction::Increase(0))
        );
        assert_eq!(
            CartAction::from_control("decrease", " 2 "),
            Ok(CartAction::Decrease(2))
        );
        assert_eq!(
            CartAction::from_control("remove", "1"),
            Ok(CartAction::Remove(1))
        );
    }

    #[test]
    fn test_rejects_bad_controls() {
        assert!(matches!(
            CartAction::from_control("explode", "0"),
            Err(CartActionError::UnknownAction(_))
        ));
        assert!(matches!(
            CartAction::from_control("remove", "-1"),
            Err(CartActionError::InvalidIndex(_))
        ));
        assert!(matches!(
            CartAction::from_control("remove", "NaN"),
            Err(CartActionError::InvalidIndex(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        let action = CartAction::Decrease(3);
        assert_eq!(action.to_string(), "decrease:3");
        assert_eq!(action.to_string().parse::<CartAction>().unwrap(), action);
    }
}
