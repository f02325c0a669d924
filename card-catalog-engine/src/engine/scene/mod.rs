/// Decorative presentation views. Each owns a `FrameLoop` that a
/// `ViewTeardownEvent` stops for good.
pub mod hero;
pub mod showcase;
