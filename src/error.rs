use thiserror::Error;

/// Error returned when a puzzle is requested with a width below
/// [`MIN_WIDTH`](crate::puzzle::MIN_WIDTH)
#[derive(Error, Debug)]
#[error("invalid puzzle width {width}: must be at least {}", crate::puzzle::MIN_WIDTH)]
pub struct InvalidWidth {
    width: usize,
}

impl InvalidWidth {
    pub(crate) fn new(width: usize) -> Self {
        Self { width }
    }

    /// The rejected width
    pub fn width(&self) -> usize {
        self.width
    }
}
