//! Named result sections
//!
//! Every computed result stored on a profile exposes its fields as typed
//! `(label, value)` pairs so reports can enumerate them without knowing
//! which calculation produced them.

use super::mode::ExplanationMode;

/// A single field value, typed so the renderer can format it
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Currency amount
    Money(f64),
    /// A pair of currency amounts (low, high)
    MoneyRange(f64, f64),
    /// Fraction rendered as a percentage (0.07 -> 7.00%)
    Rate(f64),
    /// Whole number
    Integer(i64),
    /// Free text
    Text(String),
    /// Ordered list of text items
    List(Vec<String>),
    /// Yes/No flag
    Flag(bool),
}

/// A result section that can be rendered generically
pub trait ReportSection {
    /// Section title, e.g. "LATEST PLAN"
    fn title(&self) -> &'static str;

    /// Named fields in display order
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;

    /// Canned explanation for the given mode
    fn explanation(&self, mode: ExplanationMode) -> &'static str;
}
