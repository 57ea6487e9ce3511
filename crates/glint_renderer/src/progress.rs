//! Render progress reporting.

/// Observer for the number of image rows still to be rendered.
///
/// Purely informational: implementations must not affect the render. Calls
/// may come from any render thread but never concurrently, and the reported
/// count strictly decreases after the initial call.
pub trait Progress: Sync {
    fn rows_remaining(&self, rows: u32);
}

/// Discards progress updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn rows_remaining(&self, _rows: u32) {}
}

impl<F: Fn(u32) + Sync> Progress for F {
    fn rows_remaining(&self, rows: u32) {
        self(rows)
    }
}
