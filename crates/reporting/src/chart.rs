//! Proportional bar-chart rendering to abstract draw commands.
//!
//! Stateless: every call rescales against the max of the full input, so
//! the caller re-invokes it wholesale on data or surface changes instead
//! of patching previous output.

use crate::summary::format_currency;
use ads_core::types::{DrawCommand, Surface};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Margin on all four sides of the plotting area, in pixels.
pub const PADDING: f64 = 40.0;

/// Bars take 70% of their slot width, centered.
const BAR_WIDTH_RATIO: f64 = 0.7;

const BAR_FILL: &str = "#0066cc";
const TEXT_FILL: &str = "#0b1a2b";

/// Map (label, value) pairs to draw commands for the given surface.
///
/// Each item gets an equal-width slot across the plotting area and three
/// commands: the bar rectangle, the label below the plotting area, and the
/// formatted value just above the bar top. Empty input or a surface with
/// no plotting area produces no commands; an all-zero input produces
/// zero-height bars.
pub fn render(items: &[(String, Decimal)], surface: Surface) -> Vec<DrawCommand> {
    let plot_width = surface.width - PADDING * 2.0;
    let plot_height = surface.height - PADDING * 2.0;
    // A surface smaller than its margins has no plotting area.
    if items.is_empty() || plot_width <= 0.0 || plot_height <= 0.0 {
        return Vec::new();
    }
    let slot_width = plot_width / items.len() as f64;
    let bar_width = slot_width * BAR_WIDTH_RATIO;

    let max = items
        .iter()
        .map(|(_, value)| value.to_f64().unwrap_or(0.0))
        .fold(0.0_f64, f64::max);

    let mut commands = Vec::with_capacity(items.len() * 3);
    for (index, (label, value)) in items.iter().enumerate() {
        let x = PADDING + index as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let bar_height = if max > 0.0 {
            value.to_f64().unwrap_or(0.0) / max * plot_height
        } else {
            0.0
        };
        let y = surface.height - PADDING - bar_height;

        commands.push(DrawCommand::FillRect {
            x,
            y,
            width: bar_width,
            height: bar_height,
            fill: BAR_FILL,
        });
        commands.push(DrawCommand::Text {
            x,
            y: surface.height - 6.0,
            content: label.clone(),
            fill: TEXT_FILL,
        });
        commands.push(DrawCommand::Text {
            x,
            y: y - 6.0,
            content: format_currency(*value),
            fill: TEXT_FILL,
        });
    }
    commands
}
