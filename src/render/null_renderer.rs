use crate::api::ScheduleGrid;
use crate::error::EpgResult;
use crate::render::GridRenderer;

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates the grid so tests catch broken invariants before a real
/// presentation layer sees them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_marker_count: usize,
    pub last_row_count: usize,
    pub last_filler_count: usize,
}

impl GridRenderer for NullRenderer {
    fn render(&mut self, grid: &ScheduleGrid) -> EpgResult<()> {
        grid.validate()?;
        self.render_count += 1;
        self.last_marker_count = grid.markers.len();
        self.last_row_count = grid.timelines.len();
        self.last_filler_count = grid.filler_count();
        Ok(())
    }
}
