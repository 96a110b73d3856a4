//! Chart components for the summary step.
//!
//! Both charts sample the schedule so every drawn month fits the available
//! width; the first and last months are always kept.

use loansim_core::{BarPoint, LinePoint, format_brl};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph},
};

use crate::state::Palette;
use crate::util::format::format_compact_brl;
use crate::util::styles::{card_block, muted_style};

/// Columns taken by one month in the bar chart (two bars and a gap)
const GROUP_WIDTH: usize = 5;

/// Indices of the points to draw when only `capacity` fit.
pub fn sample_indices(len: usize, capacity: usize) -> Vec<usize> {
    if len == 0 || capacity == 0 {
        return Vec::new();
    }
    if len <= capacity {
        return (0..len).collect();
    }
    if capacity == 1 {
        return vec![len - 1];
    }

    let step = (len - 1) as f64 / (capacity - 1) as f64;
    let mut indices: Vec<usize> = (0..capacity)
        .map(|i| (i as f64 * step).round() as usize)
        .collect();
    indices.dedup();
    indices
}

/// Scale a currency amount to whole cents for bar heights
fn to_bar_value(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        (value * 100.0).round() as u64
    } else {
        0
    }
}

fn render_empty(frame: &mut Frame, area: Rect, title: &str, palette: &Palette) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "Sem dados para exibir",
        muted_style(palette),
    )))
    .block(card_block(title, palette));
    frame.render_widget(paragraph, area);
}

/// Principal and interest paid each month, as grouped bars.
pub fn render_payment_bars(frame: &mut Frame, area: Rect, points: &[BarPoint], palette: &Palette) {
    const TITLE: &str = "Evolução de Pagamento";

    if points.is_empty() {
        render_empty(frame, area, TITLE, palette);
        return;
    }

    let block = card_block(TITLE, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let legend = Line::from(vec![
        Span::styled("■ ", Style::default().fg(palette.accent)),
        Span::styled("Amortização  ", muted_style(palette)),
        Span::styled("■ ", Style::default().fg(palette.highlight)),
        Span::styled("Juros  ", muted_style(palette)),
        Span::styled(
            format!("(parcela {})", format_brl(points[0].payment)),
            muted_style(palette),
        ),
    ]);
    frame.render_widget(Paragraph::new(legend), chunks[0]);

    let capacity = chunks[1].width as usize / GROUP_WIDTH;
    let principal_style = Style::default().fg(palette.accent);
    let interest_style = Style::default().fg(palette.highlight);

    let groups: Vec<Vec<Bar>> = sample_indices(points.len(), capacity)
        .into_iter()
        .map(|i| {
            let point = &points[i];
            vec![
                Bar::default()
                    .value(to_bar_value(point.principal))
                    .text_value(String::new())
                    .style(principal_style),
                Bar::default()
                    .value(to_bar_value(point.interest))
                    .text_value(String::new())
                    .style(interest_style),
            ]
        })
        .collect();

    let labels: Vec<&str> = sample_indices(points.len(), capacity)
        .into_iter()
        .map(|i| points[i].month.as_str())
        .collect();

    let mut chart = BarChart::default()
        .bar_width(2)
        .bar_gap(0)
        .group_gap(1)
        .label_style(muted_style(palette))
        .direction(Direction::Vertical);

    for (bars, label) in groups.iter().zip(labels) {
        chart = chart.data(BarGroup::default().label(Line::from(label)).bars(bars));
    }

    frame.render_widget(chart, chunks[1]);
}

/// Interest paid each month, as a line.
pub fn render_interest_line(
    frame: &mut Frame,
    area: Rect,
    points: &[LinePoint],
    palette: &Palette,
) {
    const TITLE: &str = "Evolução dos Juros";

    if points.is_empty() {
        render_empty(frame, area, TITLE, palette);
        return;
    }

    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| ((i + 1) as f64, p.interest))
        .collect();

    let x_max = points.len() as f64;
    let y_max = points
        .iter()
        .map(|p| p.interest)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let dataset = Dataset::default()
        .name("Juros")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(palette.highlight))
        .data(&data);

    let first = points.first().map(|p| p.month.clone()).unwrap_or_default();
    let last = points.last().map(|p| p.month.clone()).unwrap_or_default();
    let x_labels = vec![Span::raw(first), Span::raw(last)];

    let y_labels = vec![
        Span::raw(format_compact_brl(0.0)),
        Span::raw(format_compact_brl(y_max / 2.0)),
        Span::raw(format_compact_brl(y_max)),
    ];

    let x_axis = Axis::default()
        .title("mês".fg(palette.muted))
        .style(muted_style(palette))
        .bounds([1.0, x_max.max(2.0)])
        .labels(x_labels);

    let y_axis = Axis::default()
        .style(muted_style(palette))
        .bounds([0.0, y_max * 1.1])
        .labels(y_labels);

    let chart = Chart::new(vec![dataset])
        .block(card_block(TITLE, palette))
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}
