//! Price input parsing, bounds validation, and display formatting.
//!
//! DESIGN
//! ======
//! Pure string-in/value-out helpers so the price field component stays a thin
//! event-wiring shell and the bounds logic is testable without a document.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

/// Largest price the storefront accepts.
pub const PRICE_CEILING: f64 = 999_999_999.99;

/// Outcome of validating the raw text of the price field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceValidity {
    /// In bounds, or not parseable as a number at all. Unparseable text is
    /// deliberately treated as valid: it never compares against either bound,
    /// so it clears any previous failure state.
    #[default]
    Valid,
    /// Parsed below zero.
    Negative,
    /// Parsed above [`PRICE_CEILING`].
    TooLarge,
}

impl PriceValidity {
    /// Custom-validity message for the input element. Empty clears the
    /// failure state, per the DOM validity contract.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Valid => "",
            Self::Negative => "Price cannot be negative",
            Self::TooLarge => "Price is too large",
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validate the current text of the price field against the bounds.
#[must_use]
pub fn validate(input: &str) -> PriceValidity {
    match input.trim().parse::<f64>() {
        Ok(value) if value < 0.0 => PriceValidity::Negative,
        Ok(value) if value > PRICE_CEILING => PriceValidity::TooLarge,
        _ => PriceValidity::Valid,
    }
}

/// Canonical two-decimal rendering applied when the field loses focus.
///
/// Returns `None` for empty or unparseable text, leaving the field untouched.
#[must_use]
pub fn format_on_blur(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return None;
    }
    let value: f64 = input.trim().parse().ok()?;
    Some(format!("{value:.2}"))
}
