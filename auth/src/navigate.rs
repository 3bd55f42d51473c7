//! Client-side navigation seam.

/// Moves the user to another route without a full page load.
pub trait Navigator {
    fn push(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn push(&self, path: &str) {
        self(path);
    }
}
