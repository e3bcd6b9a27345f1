use std::{
    io::{self, Stdout},
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame, Terminal,
};
use shared::{RoundRecord, SeriesSummary, StrategyType};

const UI_TICK_MILLIS: u64 = 250;
const Y_PADDING: f64 = 50.0;

/// Line color per strategy
fn strategy_color(strategy: StrategyType) -> Color {
    match strategy {
        StrategyType::AlwaysAttack => Color::Blue,
        StrategyType::RunAwayWhenAttacked => Color::Red,
        StrategyType::AlwaysAttackButRunAwayOnRebuff => Color::Green,
        // Black disappears on dark terminals
        StrategyType::AttackOnlyForRebuff => Color::DarkGray,
    }
}

/// Everything needed to draw a finished series
pub struct ChartView {
    seed: u64,
    summary: Option<SeriesSummary>,
    points: [Vec<(f64, f64)>; StrategyType::COUNT],
}

impl ChartView {
    pub fn new(series: &[RoundRecord], seed: u64) -> Self {
        let points = StrategyType::ALL.map(|strategy| {
            series
                .iter()
                .map(|record| (record.round as f64, record.score(strategy) as f64))
                .collect()
        });

        Self {
            seed,
            summary: SeriesSummary::from_series(series),
            points,
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(frame.size());

        self.draw_header(frame, outer[0]);
        self.draw_chart(frame, outer[1]);
    }

    fn draw_header(&self, frame: &mut Frame<'_>, area: Rect) {
        let label = Style::default().add_modifier(Modifier::BOLD);

        let lines = match &self.summary {
            Some(summary) => {
                let mut totals = vec![Span::styled("Final ", label)];
                for strategy in StrategyType::ALL {
                    totals.push(Span::styled(
                        format!("{} {}  ", strategy.column(), summary.last.score(strategy)),
                        Style::default().fg(strategy_color(strategy)),
                    ));
                }

                vec![
                    Line::from(vec![
                        Span::styled("Seed ", label),
                        Span::raw(format!("{}  ", self.seed)),
                        Span::styled("Rounds ", label),
                        Span::raw(format!("{}  ", summary.rounds)),
                        Span::styled("Leader ", label),
                        Span::raw(format!("{}  ", summary.leader)),
                        Span::styled("Total ", label),
                        Span::raw(format!(
                            "{} → {} ({:+})",
                            summary.starting_total,
                            summary.final_total,
                            summary.total_change()
                        )),
                    ]),
                    Line::from(totals),
                ]
            }
            None => vec![Line::from("No rounds simulated")],
        };

        let header = Paragraph::new(lines).block(
            Block::default()
                .title("DNA points per strategy (q to quit)")
                .borders(Borders::ALL),
        );
        frame.render_widget(header, area);
    }

    fn draw_chart(&self, frame: &mut Frame<'_>, area: Rect) {
        let datasets: Vec<Dataset<'_>> = StrategyType::ALL
            .iter()
            .map(|&strategy| {
                Dataset::default()
                    .name(strategy.column())
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(strategy_color(strategy)))
                    .data(&self.points[strategy.index()])
            })
            .collect();

        let (x_max, y_min, y_max) = self.bounds();
        let axis_style = Style::default().fg(Color::Gray);

        let chart = Chart::new(datasets)
            .block(Block::default().title("Rounds").borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .title("Round")
                    .style(axis_style)
                    .bounds([0.0, x_max])
                    .labels(vec![
                        Span::raw("0"),
                        Span::raw(format!("{:.0}", x_max / 2.0)),
                        Span::raw(format!("{:.0}", x_max)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("DNA points")
                    .style(axis_style)
                    .bounds([y_min, y_max])
                    .labels(vec![
                        Span::raw(format!("{:.0}", y_min)),
                        Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
                        Span::raw(format!("{:.0}", y_max)),
                    ]),
            );

        frame.render_widget(chart, area);
    }

    /// Axis extents: last round, and the score range with some headroom
    fn bounds(&self) -> (f64, f64, f64) {
        match &self.summary {
            Some(summary) => (
                summary.last.round.max(1) as f64,
                summary.lowest as f64 - Y_PADDING,
                summary.highest as f64 + Y_PADDING,
            ),
            None => (1.0, 0.0, 1.0),
        }
    }
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Esc, _)
            | (KeyCode::Char('q'), _)
            | (KeyCode::Char('Q'), _)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}

/// Show the chart until the user quits, restoring the terminal on every path
pub fn run(series: &[RoundRecord], seed: u64) -> Result<()> {
    let view = ChartView::new(series, seed);

    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to build terminal backend")?;
    terminal.hide_cursor().ok();

    let result = run_event_loop(&mut terminal, &view);

    terminal.show_cursor().ok();
    if let Err(err) = disable_raw_mode() {
        tracing::error!(?err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
        tracing::error!(?err, "failed to leave alternate screen");
    }

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    view: &ChartView,
) -> Result<()> {
    loop {
        terminal.draw(|frame| view.draw(frame))?;

        if event::poll(Duration::from_millis(UI_TICK_MILLIS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit(key) {
                    break;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use sim::SimulationConfig;

    fn render(view: &ChartView) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view.draw(frame)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_view_has_one_dataset_per_strategy() {
        let series = sim::run_simulation(SimulationConfig::default(), 5).unwrap();
        let view = ChartView::new(&series, 5);

        for strategy in StrategyType::ALL {
            let points = &view.points[strategy.index()];
            assert_eq!(points.len(), 400);
            assert_eq!(points[0], (0.0, 500.0));
        }
    }

    #[test]
    fn test_bounds_cover_every_point() {
        let series = sim::run_simulation(SimulationConfig::default(), 5).unwrap();
        let view = ChartView::new(&series, 5);
        let (x_max, y_min, y_max) = view.bounds();

        assert_eq!(x_max, 399.0);
        for points in &view.points {
            for &(_, y) in points {
                assert!(y > y_min && y < y_max);
            }
        }
    }

    #[test]
    fn test_draw_shows_header() {
        let series = sim::run_simulation(SimulationConfig::default(), 11).unwrap();
        let view = ChartView::new(&series, 11);

        let screen = render(&view);

        assert!(screen.contains("Seed 11"));
        assert!(screen.contains("Rounds 400"));
        assert!(screen.contains("Leader"));
    }

    #[test]
    fn test_draw_empty_series() {
        let view = ChartView::new(&[], 0);
        let screen = render(&view);
        assert!(screen.contains("No rounds simulated"));
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
