/// A value whose assignments report whether they changed anything.
///
/// The owner reacts to the returned previous value instead of registering a callback, which
/// keeps the reaction free to borrow the owner mutably.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Watched<T> {
    value: T,
}

impl<T: Copy + PartialEq> Watched<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> T {
        self.value
    }

    /// Stores `value` and returns the previous value if it differs.
    ///
    /// Assigning an equal value returns `None` and never triggers a reaction.
    pub fn set(&mut self, value: T) -> Option<T> {
        if self.value == value {
            return None;
        }
        let old = self.value;
        self.value = value;
        Some(old)
    }

    /// Stores `value` without reporting a change.
    pub fn set_silently(&mut self, value: T) {
        self.value = value;
    }
}
