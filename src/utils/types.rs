/// Alias to a scalar floating type.
///
/// NOTE: `f64` is used as default: the real distance corridor checks accumulate hundreds
/// of segment lengths and `f32` loses too much precision there.
pub type Float = f64;
