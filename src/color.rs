//! Color utilities for terminal output
//!
//! Diagnostic output (errors, auth summaries) goes to stderr with
//! semantic colors; JSON results on stdout are never colored so they
//! stay pipeable.

use owo_colors::OwoColorize;

use crate::cli::ColorOption;

/// Color scheme for the application.
///
/// Provides semantic color names so call sites read as intent rather
/// than raw colors.
pub struct ColorScheme {
  enabled: bool,
}

impl ColorScheme {
  /// Create a new color scheme based on user preference and terminal
  /// capabilities.
  pub fn new(color_option: ColorOption) -> Self {
    let enabled = match color_option {
      ColorOption::Always => true,
      ColorOption::Never => false,
      ColorOption::Auto => {
        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
      }
    };

    Self { enabled }
  }

  /// Style for success messages (green)
  pub fn success<T: std::fmt::Display>(&self, text: T) -> String {
    if self.enabled {
      format!("{}", text.green())
    } else {
      text.to_string()
    }
  }

  /// Style for error messages (red)
  pub fn error<T: std::fmt::Display>(&self, text: T) -> String {
    if self.enabled {
      format!("{}", text.red())
    } else {
      text.to_string()
    }
  }

  /// Style for warnings (yellow)
  pub fn warning<T: std::fmt::Display>(&self, text: T) -> String {
    if self.enabled {
      format!("{}", text.yellow())
    } else {
      text.to_string()
    }
  }

  /// Style for informational messages (cyan)
  pub fn info<T: std::fmt::Display>(&self, text: T) -> String {
    if self.enabled {
      format!("{}", text.cyan())
    } else {
      text.to_string()
    }
  }

  /// Style for emphasized text (bold)
  pub fn emphasis<T: std::fmt::Display>(&self, text: T) -> String {
    if self.enabled {
      format!("{}", text.bold())
    } else {
      text.to_string()
    }
  }

  /// Style for de-emphasized text (dimmed)
  pub fn dimmed<T: std::fmt::Display>(&self, text: T) -> String {
    if self.enabled {
      format!("{}", text.dimmed())
    } else {
      text.to_string()
    }
  }

  /// Style for URLs (underlined blue)
  pub fn link<T: std::fmt::Display>(&self, text: T) -> String {
    if self.enabled {
      format!("{}", text.blue().underline())
    } else {
      text.to_string()
    }
  }
}
