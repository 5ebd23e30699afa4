//! Pointer edge detection.
//!
//! The platform layer reports raw button state every frame; the simulation
//! only wants release edges. `InputEdges` remembers the previous state of
//! each button and turns a sample into debounced `InputEvent`s.

use std::collections::HashMap;

use rampart_core::commands::InputEvent;
use rampart_core::Vec2;
use rampart_grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Raw pointer state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Pointer position in world units.
    pub position: Vec2,
    pub primary: bool,
    pub secondary: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InputEdges {
    held: HashMap<PointerButton, bool>,
}

impl InputEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the button's state; true when it was down and now is not.
    pub fn released(&mut self, button: PointerButton, down: bool) -> bool {
        let was_down = self.held.insert(button, down).unwrap_or(false);
        was_down && !down
    }

    /// Release events for this sample, primary first.
    pub fn translate(&mut self, sample: &PointerSample, grid: &Grid) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.released(PointerButton::Primary, sample.primary) {
            events.push(InputEvent::PrimaryReleased {
                world: sample.position,
            });
        }
        if self.released(PointerButton::Secondary, sample.secondary) {
            events.push(InputEvent::SecondaryReleased {
                tile: grid.world_to_tile(sample.position),
            });
        }
        events
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::types::TileCoord;

    fn grid() -> Grid {
        Grid::from_ascii(
            "
            ....
            S##E
            ....
            ",
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn test_release_fires_once() {
        let mut edges = InputEdges::new();
        assert!(!edges.released(PointerButton::Primary, true));
        assert!(!edges.released(PointerButton::Primary, true));
        assert!(edges.released(PointerButton::Primary, false));
        assert!(!edges.released(PointerButton::Primary, false));
    }

    #[test]
    fn test_first_sample_up_is_not_a_release() {
        let mut edges = InputEdges::new();
        assert!(!edges.released(PointerButton::Secondary, false));
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut edges = InputEdges::new();
        edges.released(PointerButton::Primary, true);
        assert!(!edges.released(PointerButton::Secondary, false));
        assert!(edges.released(PointerButton::Primary, false));
    }

    #[test]
    fn test_translate_maps_secondary_to_tile() {
        let grid = grid();
        let mut edges = InputEdges::new();
        let position = Vec2::new(250.0, 30.0);
        let down = PointerSample {
            position,
            primary: true,
            secondary: true,
        };
        assert!(edges.translate(&down, &grid).is_empty());

        let up = PointerSample {
            position,
            ..Default::default()
        };
        assert_eq!(
            edges.translate(&up, &grid),
            vec![
                InputEvent::PrimaryReleased { world: position },
                InputEvent::SecondaryReleased {
                    tile: TileCoord::new(2, 0)
                },
            ]
        );
    }

    #[test]
    fn test_reset_forgets_held_buttons() {
        let mut edges = InputEdges::new();
        edges.released(PointerButton::Primary, true);
        edges.reset();
        assert!(!edges.released(PointerButton::Primary, false));
    }
}
