//! Terminal rendering adapters: the imperative side that applies what the
//! coordinator computed. The table uses `tabled`; the chart adapter plays
//! abstract draw commands onto a character grid.

use ads_core::types::{DrawCommand, Surface, SummaryStatistics};
use ads_reporting::format_currency;
use ads_view::{CampaignRow, ViewSinks};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TableLine {
    #[tabled(rename = "id")]
    id: u64,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "media")]
    media: String,
    #[tabled(rename = "start")]
    start: String,
    #[tabled(rename = "end")]
    end: String,
    #[tabled(rename = "cost")]
    cost: String,
    #[tabled(rename = "results")]
    results: u64,
    #[tabled(rename = "reach")]
    reach: u64,
    #[tabled(rename = "cost/result")]
    cost_per_result: String,
}

impl From<&CampaignRow> for TableLine {
    fn from(row: &CampaignRow) -> Self {
        let r = &row.record;
        Self {
            id: r.id,
            name: r.name.clone(),
            media: r.media.clone(),
            start: r.start.to_string(),
            end: r.end.to_string(),
            cost: format_currency(r.cost),
            results: r.results,
            reach: r.reach,
            // "No data", never 0 or infinity.
            cost_per_result: match row.cost_per_result {
                Some(v) => format_currency(v),
                None => "—".to_string(),
            },
        }
    }
}

/// Writes table, totals, and (optionally) the chart to stdout.
pub struct TerminalSinks {
    surface: Surface,
    show_chart: bool,
}

impl TerminalSinks {
    pub fn new(surface: Surface, show_chart: bool) -> Self {
        Self {
            surface,
            show_chart,
        }
    }
}

impl ViewSinks for TerminalSinks {
    fn table(&mut self, rows: &[CampaignRow]) {
        if rows.is_empty() {
            println!("No campaigns match the active filters.");
            return;
        }
        let lines: Vec<TableLine> = rows.iter().map(TableLine::from).collect();
        let mut table = Table::new(lines);
        table.with(Style::sharp());
        println!("{table}");
    }

    fn summary(&mut self, summary: &SummaryStatistics) {
        println!(
            "Totals: cost {}  results {}  reach {}",
            format_currency(summary.total_cost),
            summary.total_results,
            summary.total_reach
        );
    }

    fn chart(&mut self, commands: &[DrawCommand]) {
        if !self.show_chart || commands.is_empty() {
            return;
        }
        let canvas = CharCanvas::new(self.surface, 78, 18);
        println!("{}", canvas.play(commands));
    }
}

/// A character-cell canvas. Scales pixel-space draw commands down to a
/// terminal grid; rectangles become filled cells, text is clipped at the
/// right edge.
struct CharCanvas {
    surface: Surface,
    cols: usize,
    rows: usize,
}

impl CharCanvas {
    fn new(surface: Surface, cols: usize, rows: usize) -> Self {
        Self {
            surface,
            cols,
            rows,
        }
    }

    fn col(&self, x: f64) -> usize {
        let c = (x / self.surface.width * self.cols as f64).floor() as isize;
        c.clamp(0, self.cols as isize - 1) as usize
    }

    fn row(&self, y: f64) -> usize {
        let r = (y / self.surface.height * self.rows as f64).floor() as isize;
        r.clamp(0, self.rows as isize - 1) as usize
    }

    fn play(&self, commands: &[DrawCommand]) -> String {
        let mut grid = vec![vec![' '; self.cols]; self.rows];
        for command in commands {
            match command {
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => {
                    if *height <= 0.0 {
                        continue;
                    }
                    // Corners may arrive in either order; slicing needs
                    // c0 <= c1 and r0 <= r1.
                    let (c0, c1) = (self.col(x.min(x + width)), self.col(x.max(x + width)));
                    let (r0, r1) = (self.row(y.min(y + height)), self.row(y.max(y + height)));
                    for row in &mut grid[r0..=r1] {
                        for cell in &mut row[c0..=c1] {
                            *cell = '█';
                        }
                    }
                }
                DrawCommand::Text { x, y, content, .. } => {
                    let row = self.row(*y);
                    let start = self.col(*x);
                    for (i, ch) in content.chars().enumerate() {
                        let col = start + i;
                        if col >= self.cols {
                            break;
                        }
                        grid[row][col] = ch;
                    }
                }
            }
        }
        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
