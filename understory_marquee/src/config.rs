// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee configuration and its validation.

use alloc::string::String;

/// Configuration for a [`Marquee`](crate::Marquee).
///
/// The selector and both class names are required; the flags default to `false`.
///
/// ```
/// use understory_marquee::MarqueeConfig;
///
/// let config = MarqueeConfig::new(".tile", "marquee", "is-selected").with_auto_refresh(true);
/// assert!(config.validate().is_ok());
/// assert!(config.auto_refresh);
/// assert!(!config.disable);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarqueeConfig {
    /// Selector for the selectable elements inside the container.
    pub items: String,
    /// Class applied to the visible selection rectangle.
    pub selection_class: String,
    /// Class applied to selected items.
    pub selected_class: String,
    /// Re-snapshot item bounds at every drag start instead of once at initialization.
    pub auto_refresh: bool,
    /// Suppress drag initiation.
    pub disable: bool,
}

impl MarqueeConfig {
    /// Configuration with the required fields and default flags.
    pub fn new(
        items: impl Into<String>,
        selection_class: impl Into<String>,
        selected_class: impl Into<String>,
    ) -> Self {
        Self {
            items: items.into(),
            selection_class: selection_class.into(),
            selected_class: selected_class.into(),
            auto_refresh: false,
            disable: false,
        }
    }

    /// Set [`auto_refresh`](Self::auto_refresh).
    #[must_use]
    pub fn with_auto_refresh(mut self, auto_refresh: bool) -> Self {
        self.auto_refresh = auto_refresh;
        self
    }

    /// Set [`disable`](Self::disable).
    #[must_use]
    pub fn with_disable(mut self, disable: bool) -> Self {
        self.disable = disable;
        self
    }

    /// Check the required fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.trim().is_empty() {
            return Err(ConfigError::EmptyItemSelector);
        }
        check_class("selection_class", &self.selection_class)?;
        check_class("selected_class", &self.selected_class)
    }
}

fn check_class(field: &'static str, class: &str) -> Result<(), ConfigError> {
    if class.is_empty() {
        Err(ConfigError::EmptyClassName { field })
    } else if class.chars().any(char::is_whitespace) {
        Err(ConfigError::InvalidClassName {
            field,
            class: class.into(),
        })
    } else {
        Ok(())
    }
}

/// Reasons a [`MarqueeConfig`] is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The item selector is empty.
    #[error("item selector must not be empty")]
    EmptyItemSelector,
    /// A required class name is empty.
    #[error("`{field}` must not be empty")]
    EmptyClassName {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A class name contains whitespace, so it would name several classes.
    #[error("`{field}` is not a single class name: {class:?}")]
    InvalidClassName {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        class: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_flags_off() {
        let config = MarqueeConfig::new("li", "sel", "on");
        assert!(!config.auto_refresh);
        assert!(!config.disable);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn empty_selector_is_rejected() {
        let config = MarqueeConfig::new("  ", "sel", "on");
        assert_eq!(config.validate(), Err(ConfigError::EmptyItemSelector));
    }

    #[test]
    fn empty_class_names_are_rejected() {
        assert_eq!(
            MarqueeConfig::new("li", "", "on").validate(),
            Err(ConfigError::EmptyClassName {
                field: "selection_class"
            })
        );
        assert_eq!(
            MarqueeConfig::new("li", "sel", "").validate(),
            Err(ConfigError::EmptyClassName {
                field: "selected_class"
            })
        );
    }

    #[test]
    fn class_with_whitespace_is_rejected() {
        let err = MarqueeConfig::new("li", "sel", "is selected")
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidClassName {
                field: "selected_class",
                class: "is selected".into(),
            }
        );
    }

    #[test]
    fn builder_sets_flags() {
        let config = MarqueeConfig::new("li", "sel", "on")
            .with_auto_refresh(true)
            .with_disable(true);
        assert!(config.auto_refresh);
        assert!(config.disable);
    }
}
