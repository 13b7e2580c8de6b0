mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::api::ScheduleGrid;
use crate::error::EpgResult;

/// Contract implemented by any presentation layer.
///
/// Renderers receive a fully normalized `ScheduleGrid`: markers map to header
/// cells, programme slots to show cells, filler slots to empty cells.
pub trait GridRenderer {
    fn render(&mut self, grid: &ScheduleGrid) -> EpgResult<()>;
}
