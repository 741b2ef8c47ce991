/// Position and size of a window, relative to the root window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Xyhw {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Width and height as the display server expects them, never zero.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        let clamp = |v: i32| u32::try_from(v).unwrap_or(0).max(1);
        (clamp(self.w), clamp(self.h))
    }
}
