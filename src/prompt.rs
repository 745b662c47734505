//! Interactive Prompts
//!
//! The terminal-input seam. `Prompter` is what the menu loop talks to; the
//! real implementation sits on `dialoguer`, and tests drive the loop with a
//! scripted implementation instead.
//!
//! Validation happens inside the prompt: a rejected answer re-displays the
//! same question, so the menu only ever sees valid input and no statement is
//! issued for an invalid one.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::{Result, RosterError};

/// A labeled choice backed by a value
///
/// Selection lists show the label and hand back the value, so no invalid
/// foreign key can be entered through the menu.
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self { label: label.into(), value }
    }
}

/// Interactive input collaborator
pub trait Prompter {
    /// Single-select list; returns the index of the chosen item
    fn select(&self, message: &str, labels: &[String]) -> Result<usize>;

    /// Free-text prompt; re-prompts until non-empty after trimming
    fn text(&self, message: &str) -> Result<String>;

    /// Numeric prompt; re-prompts until the input parses as a number
    fn number(&self, message: &str) -> Result<f64>;
}

/// Present a list of labeled choices and return the chosen value
pub fn pick<'a, T>(
    prompter: &dyn Prompter,
    message: &str,
    choices: &'a [Choice<T>],
) -> Result<&'a T> {
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let idx = prompter.select(message, &labels)?;
    choices
        .get(idx)
        .map(|c| &c.value)
        .ok_or_else(|| RosterError::prompt_failed(format!("Selection index {idx} out of range")))
}

/// Reject empty or all-whitespace input
pub(crate) fn validate_nonempty(input: &str) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        Err("Value cannot be empty.".to_string())
    } else {
        Ok(())
    }
}

/// Reject input that does not parse as a number
pub(crate) fn validate_number(input: &str) -> std::result::Result<(), String> {
    if input.trim().parse::<f64>().is_ok() {
        Ok(())
    } else {
        Err("Please enter a valid number.".to_string())
    }
}

/// `dialoguer`-backed prompter
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn select(&self, message: &str, labels: &[String]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(labels)
            .default(0)
            .interact()
            .map_err(|e| RosterError::prompt_failed(e.to_string()))
    }

    fn text(&self, message: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(|input: &String| validate_nonempty(input))
            .interact_text()
            .map_err(|e| RosterError::prompt_failed(e.to_string()))?;

        Ok(answer.trim().to_string())
    }

    fn number(&self, message: &str) -> Result<f64> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(|input: &String| validate_number(input))
            .interact_text()
            .map_err(|e| RosterError::prompt_failed(e.to_string()))?;

        // The validator guarantees this parses
        answer
            .trim()
            .parse()
            .map_err(|e| RosterError::prompt_failed(format!("Unparseable number: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_nonempty_rejects_whitespace() {
        assert!(validate_nonempty("").is_err());
        assert!(validate_nonempty("   ").is_err());
        assert!(validate_nonempty("\t\n").is_err());
        assert!(validate_nonempty("Engineering").is_ok());
        assert!(validate_nonempty("  padded  ").is_ok());
    }

    #[test]
    fn test_validate_number_rejects_non_numeric() {
        assert!(validate_number("ninety").is_err());
        assert!(validate_number("").is_err());
        assert!(validate_number("95k").is_err());
        assert!(validate_number("95000").is_ok());
        assert!(validate_number("95000.50").is_ok());
        assert!(validate_number(" 95000 ").is_ok());
    }

    struct FixedPrompter {
        selection: usize,
    }

    impl Prompter for FixedPrompter {
        fn select(&self, _message: &str, _labels: &[String]) -> Result<usize> {
            Ok(self.selection)
        }

        fn text(&self, _message: &str) -> Result<String> {
            unimplemented!()
        }

        fn number(&self, _message: &str) -> Result<f64> {
            unimplemented!()
        }
    }

    #[test]
    fn test_pick_returns_value_for_label() {
        let choices = vec![Choice::new("None", None), Choice::new("Ada Lovelace", Some(3))];
        let prompter = FixedPrompter { selection: 1 };
        let picked = pick(&prompter, "Who is the employee's manager?", &choices).unwrap();
        assert_eq!(*picked, Some(3));
    }

    #[test]
    fn test_pick_out_of_range_is_an_error() {
        let choices = vec![Choice::new("only", 1)];
        let prompter = FixedPrompter { selection: 5 };
        assert!(pick(&prompter, "pick one", &choices).is_err());
    }
}
