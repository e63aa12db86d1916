pub mod headless_mode;
pub mod windowed_mode;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Win,
    /// Runs this many ticks without opening a window.
    Headless(u64),
}
