/// Uniform draw in `[0, 1)`. The only source of randomness in the app;
/// everything downstream derives outcomes from a plain `f64` so the
/// derivation stays testable off-browser.
pub fn random_draw() -> f64 {
    js_sys::Math::random()
}
