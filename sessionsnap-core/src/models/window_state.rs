/// The `_NET_WM_STATE` flags a snapshot records.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowState {
    MaximizedVert,
    MaximizedHorz,
    Hidden,
}

impl WindowState {
    /// A window only counts as maximized when both axes are.
    pub fn is_maximized(states: &[Self]) -> bool {
        states.contains(&Self::MaximizedVert) && states.contains(&Self::MaximizedHorz)
    }

    pub fn is_minimized(states: &[Self]) -> bool {
        states.contains(&Self::Hidden)
    }
}
