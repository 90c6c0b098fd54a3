use web_sys::Element;

use crate::motion::spring::{Spring, SpringConfig};

/// Elements opt into the enlarged cursor by carrying this attribute.
pub const INTERACTIVE_ATTR: &str = "data-interactive";

const FOLLOW: SpringConfig = SpringConfig::new(150.0, 15.0, 0.5);
const RING_RADIUS: f64 = 16.0;
const HOVER_SCALE: f64 = 2.5;

/// Capability marker for things the cursor grows over.
pub trait Interactive {
    fn is_interactive(&self) -> bool;
}

impl Interactive for Element {
    fn is_interactive(&self) -> bool {
        self.closest(&format!("[{}]", INTERACTIVE_ATTR))
            .ok()
            .flatten()
            .is_some()
    }
}

/// Where the cursor ring is drawn and how large it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Pointer-following ring, eased by springs on each axis and on scale.
#[derive(Debug, Clone)]
pub struct CursorState {
    x: Spring,
    y: Spring,
    scale: Spring,
    hovering: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            x: Spring::new(FOLLOW, -RING_RADIUS),
            y: Spring::new(FOLLOW, -RING_RADIUS),
            scale: Spring::new(FOLLOW, 1.0),
            hovering: false,
        }
    }

    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        self.x.set_target(client_x - RING_RADIUS);
        self.y.set_target(client_y - RING_RADIUS);
    }

    /// Pointer is now over `target` (`None` when over nothing).
    pub fn hover<T: Interactive>(&mut self, target: Option<&T>) {
        self.hovering = target.is_some_and(|t| t.is_interactive());
        self.scale
            .set_target(if self.hovering { HOVER_SCALE } else { 1.0 });
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether any spring still has somewhere to go.
    pub fn is_moving(&self) -> bool {
        !(self.x.is_settled() && self.y.is_settled() && self.scale.is_settled())
    }

    /// Advances the springs. Returns whether anything moved.
    pub fn step(&mut self, elapsed_ms: f64) -> bool {
        let x = self.x.step(elapsed_ms);
        let y = self.y.step(elapsed_ms);
        let scale = self.scale.step(elapsed_ms);
        x || y || scale
    }

    pub fn transform(&self) -> RingTransform {
        RingTransform {
            x: self.x.value(),
            y: self.y.value(),
            scale: self.scale.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marked(bool);

    impl Interactive for Marked {
        fn is_interactive(&self) -> bool {
            self.0
        }
    }

    fn settle(cursor: &mut CursorState) {
        for _ in 0..400 {
            cursor.step(16.0);
        }
    }

    #[test]
    fn ring_centres_on_pointer() {
        let mut cursor = CursorState::new();
        cursor.pointer_moved(200.0, 120.0);
        settle(&mut cursor);
        let t = cursor.transform();
        assert_eq!((t.x, t.y, t.scale), (184.0, 104.0, 1.0));
    }

    #[test]
    fn grows_only_over_marked_elements() {
        let mut cursor = CursorState::new();
        cursor.hover(Some(&Marked(true)));
        assert!(cursor.is_hovering());
        settle(&mut cursor);
        assert_eq!(cursor.transform().scale, 2.5);

        cursor.hover(Some(&Marked(false)));
        assert!(!cursor.is_hovering());
        cursor.hover::<Marked>(None);
        settle(&mut cursor);
        assert_eq!(cursor.transform().scale, 1.0);
    }

    #[test]
    fn idle_cursor_does_not_move() {
        let mut cursor = CursorState::new();
        assert!(!cursor.step(16.0));
        assert!(!cursor.is_moving());
    }

    #[test]
    fn moving_until_springs_rest() {
        let mut cursor = CursorState::new();
        cursor.pointer_moved(40.0, 40.0);
        assert!(cursor.is_moving());
        settle(&mut cursor);
        assert!(!cursor.is_moving());

        cursor.hover(Some(&Marked(true)));
        assert!(cursor.is_moving());
    }
}
