/// Runtime numbers.
///
/// Defines [`Number`](core::Number), the integer-or-real payload every
/// evaluation produces, and [`NumberValue`](core::NumberValue), which ties a
/// number to the source range and context it was computed in.
pub mod core;
