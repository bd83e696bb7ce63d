//! Placement: grid snapping, canvas containment, insertion and reorder.

use crate::config::{EditorConfig, LayoutMode};
use crate::document::ResumeDocument;
use crate::section::SectionId;
use kurbo::{Point, Size, Vec2};

/// Grid size for snapping in free-form layout.
pub const GRID_SIZE: f64 = 30.0;

/// Top-left of the first section inserted from the sidebar.
pub const CASCADE_ORIGIN: Point = Point::new(50.0, 50.0);

/// Vertical offset between consecutively inserted sections (four grid units).
pub const CASCADE_STEP: f64 = GRID_SIZE * 4.0;

/// Snap a point to the nearest grid intersection, each axis independently.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}

/// Computes section geometry and order for drops and insertions.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementEngine {
    mode: LayoutMode,
    grid_size: f64,
    canvas_size: Size,
    cascade_origin: Point,
    cascade_step: f64,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl PlacementEngine {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            mode: config.layout_mode,
            grid_size: config.grid_size,
            canvas_size: config.canvas_size,
            cascade_origin: config.cascade_origin,
            cascade_step: config.cascade_step,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Largest top-left coordinate that keeps a section of `size` on the canvas.
    fn max_origin(&self, size: Size) -> Point {
        Point::new(
            (self.canvas_size.width - size.width).max(0.0),
            (self.canvas_size.height - size.height).max(0.0),
        )
    }

    /// Clamp a top-left position so the section stays inside the canvas.
    pub fn contain(&self, position: Point, size: Size) -> Point {
        let max = self.max_origin(size);
        Point::new(position.x.clamp(0.0, max.x), position.y.clamp(0.0, max.y))
    }

    /// Like [`contain`](Self::contain), but out-of-range coordinates land on
    /// the nearest grid line that is still inside the canvas.
    fn contain_on_grid(&self, position: Point, size: Size) -> Point {
        let max = self.max_origin(size);
        let axis = |value: f64, max: f64| {
            if value < 0.0 {
                0.0
            } else if value > max {
                (max / self.grid_size).floor() * self.grid_size
            } else {
                value
            }
        };
        Point::new(axis(position.x, max.x), axis(position.y, max.y))
    }

    /// Final position of a section dragged from `origin` by `delta`.
    ///
    /// Free-form: snapped to the grid, then contained. Flow: position is
    /// implicit, so the origin is returned unchanged.
    pub fn compute_drop_position(&self, origin: Point, delta: Vec2, size: Size) -> Point {
        match self.mode {
            LayoutMode::FreeForm => {
                let snapped = snap_to_grid(origin + delta, self.grid_size);
                self.contain_on_grid(snapped, size)
            }
            LayoutMode::Flow => origin,
        }
    }

    /// Cascading position for a new section, given how many sections exist.
    ///
    /// The cascade runs down the page; once it would leave the canvas it
    /// wraps into a new column one grid unit to the right.
    pub fn insertion_position(&self, existing: usize, size: Size) -> Point {
        let max = self.max_origin(size);
        let rows = if self.cascade_step > 0.0 && max.y >= self.cascade_origin.y {
            ((max.y - self.cascade_origin.y) / self.cascade_step).floor() as usize + 1
        } else {
            1
        };
        let columns = if max.x >= self.cascade_origin.x {
            ((max.x - self.cascade_origin.x) / self.grid_size).floor() as usize + 1
        } else {
            1
        };
        let column = (existing / rows) % columns;
        let row = existing % rows;
        let candidate = Point::new(
            self.cascade_origin.x + column as f64 * self.grid_size,
            self.cascade_origin.y + row as f64 * self.cascade_step,
        );
        self.contain(candidate, size)
    }

    /// Source and target indices for dropping `source` over `over`.
    ///
    /// Returns `None` if either section is missing.
    pub fn reorder_target(&self, doc: &ResumeDocument, source: SectionId, over: SectionId) -> Option<(usize, usize)> {
        Some((doc.index_of(source)?, doc.index_of(over)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{DEFAULT_SECTION_SIZE, SectionType};

    fn free_form() -> PlacementEngine {
        PlacementEngine::default()
    }

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(Point::new(44.0, 76.0), 30.0), Point::new(30.0, 90.0));
        assert_eq!(snap_to_grid(Point::new(45.0, -14.0), 30.0), Point::new(60.0, -0.0));
    }

    #[test]
    fn test_drop_position_snaps() {
        let engine = free_form();
        let pos = engine.compute_drop_position(Point::ZERO, Vec2::new(44.0, 76.0), DEFAULT_SECTION_SIZE);
        assert_eq!(pos, Point::new(30.0, 90.0));

        let pos = engine.compute_drop_position(Point::new(60.0, 60.0), Vec2::new(-16.0, 16.0), DEFAULT_SECTION_SIZE);
        assert_eq!(pos, Point::new(30.0, 90.0));
    }

    #[test]
    fn test_drop_position_is_contained() {
        let engine = free_form();
        let size = Size::new(400.0, 200.0);

        let pos = engine.compute_drop_position(Point::ZERO, Vec2::new(-500.0, -20.0), size);
        assert_eq!(pos, Point::ZERO);

        // Canvas is 816 x 1056: max origin (416, 856), nearest grid lines below (390, 840).
        let pos = engine.compute_drop_position(Point::ZERO, Vec2::new(2000.0, 2000.0), size);
        assert_eq!(pos, Point::new(390.0, 840.0));
        let bounds = kurbo::Rect::from_origin_size(pos, size);
        assert!(bounds.x1 <= 816.0 && bounds.y1 <= 1056.0);
    }

    #[test]
    fn test_oversized_section_pins_to_origin() {
        let config = EditorConfig { canvas_size: Size::new(300.0, 300.0), ..EditorConfig::default() };
        let engine = PlacementEngine::new(&config);
        let pos = engine.compute_drop_position(Point::ZERO, Vec2::new(90.0, 90.0), Size::new(400.0, 200.0));
        assert_eq!(pos, Point::new(0.0, 90.0));
    }

    #[test]
    fn test_flow_mode_keeps_origin() {
        let engine = PlacementEngine::new(&EditorConfig::with_layout(LayoutMode::Flow));
        let origin = Point::new(50.0, 170.0);
        assert_eq!(engine.compute_drop_position(origin, Vec2::new(44.0, 76.0), DEFAULT_SECTION_SIZE), origin);
    }

    #[test]
    fn test_insertion_cascades() {
        let engine = free_form();
        assert_eq!(engine.insertion_position(0, DEFAULT_SECTION_SIZE), Point::new(50.0, 50.0));
        assert_eq!(engine.insertion_position(1, DEFAULT_SECTION_SIZE), Point::new(50.0, 170.0));
        assert_eq!(engine.insertion_position(3, DEFAULT_SECTION_SIZE), Point::new(50.0, 410.0));
        // Max origin y is 856, so seven rows fit before wrapping.
        assert_eq!(engine.insertion_position(6, DEFAULT_SECTION_SIZE), Point::new(50.0, 770.0));
        assert_eq!(engine.insertion_position(7, DEFAULT_SECTION_SIZE), Point::new(80.0, 50.0));
        assert_eq!(engine.insertion_position(15, DEFAULT_SECTION_SIZE), Point::new(110.0, 170.0));
    }

    #[test]
    fn test_insertion_positions_are_distinct_and_on_canvas() {
        let engine = free_form();
        let positions: Vec<Point> = (0..12)
            .map(|n| engine.insertion_position(n, DEFAULT_SECTION_SIZE))
            .collect();

        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert_ne!(a, b);
            }
            let bounds = kurbo::Rect::from_origin_size(*a, DEFAULT_SECTION_SIZE);
            assert!(bounds.x1 <= 816.0 && bounds.y1 <= 1056.0);
        }
    }

    #[test]
    fn test_insertion_on_short_canvas() {
        let config = EditorConfig { canvas_size: Size::new(816.0, 150.0), ..EditorConfig::default() };
        let engine = PlacementEngine::new(&config);
        // Section taller than the canvas: one row, columns still distinct.
        assert_eq!(engine.insertion_position(0, DEFAULT_SECTION_SIZE), Point::new(50.0, 0.0));
        assert_eq!(engine.insertion_position(1, DEFAULT_SECTION_SIZE), Point::new(80.0, 0.0));
    }

    #[test]
    fn test_reorder_target() {
        let mut doc = ResumeDocument::new();
        let a = doc.add_section(SectionType::Header, Point::ZERO, DEFAULT_SECTION_SIZE).id();
        let b = doc.add_section(SectionType::Skills, Point::ZERO, DEFAULT_SECTION_SIZE).id();
        let engine = free_form();

        assert_eq!(engine.reorder_target(&doc, b, a), Some((1, 0)));
        assert_eq!(engine.reorder_target(&doc, a, uuid::Uuid::new_v4()), None);
    }
}
