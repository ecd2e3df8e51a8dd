/// Numeric conversion helpers.
///
/// Conversions between the integer and floating-point representations used
/// by the evaluator, with their precision behaviour spelled out in one place.
pub mod num;
