use super::WindowSnapshot;

/// Most windows a single snapshot holds.
pub const MAX_WINDOWS: usize = 256;

/// The windows of a session in enumeration order, never more than
/// [`MAX_WINDOWS`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    windows: Vec<WindowSnapshot>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a window unless the snapshot is full.
    ///
    /// # Returns
    /// - `true` if the window was added
    /// - `false` if the snapshot already holds [`MAX_WINDOWS`] windows
    pub fn push(&mut self, window: WindowSnapshot) -> bool {
        if self.is_full() {
            return false;
        }
        self.windows.push(window);
        true
    }

    pub fn is_full(&self) -> bool {
        self.windows.len() >= MAX_WINDOWS
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn windows(&self) -> &[WindowSnapshot] {
        &self.windows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WindowSnapshot> {
        self.windows.iter()
    }
}

impl FromIterator<WindowSnapshot> for SessionSnapshot {
    fn from_iter<T: IntoIterator<Item = WindowSnapshot>>(iter: T) -> Self {
        Self {
            windows: iter.into_iter().take(MAX_WINDOWS).collect(),
        }
    }
}

impl IntoIterator for SessionSnapshot {
    type Item = WindowSnapshot;
    type IntoIter = std::vec::IntoIter<WindowSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.into_iter()
    }
}

impl<'a> IntoIterator for &'a SessionSnapshot {
    type Item = &'a WindowSnapshot;
    type IntoIter = std::slice::Iter<'a, WindowSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(pid: u32) -> WindowSnapshot {
        WindowSnapshot {
            pid,
            ..WindowSnapshot::default()
        }
    }

    #[test]
    fn push_stops_at_the_cap() {
        let mut snapshot = SessionSnapshot::new();
        for pid in 1..=MAX_WINDOWS as u32 {
            assert!(snapshot.push(window(pid)));
        }
        assert!(snapshot.is_full());
        assert!(!snapshot.push(window(9999)));
        assert_eq!(snapshot.len(), MAX_WINDOWS);
        assert_eq!(snapshot.windows().last().map(|w| w.pid), Some(MAX_WINDOWS as u32));
    }

    #[test]
    fn collect_keeps_the_first_windows() {
        let snapshot: SessionSnapshot = (1..=300).map(window).collect();
        assert_eq!(snapshot.len(), MAX_WINDOWS);
        assert_eq!(snapshot.windows()[0].pid, 1);
        assert_eq!(snapshot.windows()[MAX_WINDOWS - 1].pid, MAX_WINDOWS as u32);
    }
}
