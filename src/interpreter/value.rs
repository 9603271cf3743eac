/// The runtime value type and its conversions.
///
/// Every runtime value is a signed 64-bit integer; booleans are `0` and `1`.
pub mod core;
