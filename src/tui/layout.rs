//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Paragraph};

use crate::params::Field;
use crate::sim::profile::SAMPLE_INTERVAL_HOURS;

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(6), // parameter form
            Constraint::Min(10),   // hourly chart
            Constraint::Length(9), // weekly bars
            Constraint::Length(5), // summary panel
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_form(frame, app, chunks[1]);
    render_hourly_chart(frame, app, chunks[2]);
    render_weekly_bars(frame, app, chunks[3]);
    render_summary(frame, app, chunks[4]);
    render_footer(frame, chunks[5]);
}

/// Header bar: preset name, seed, validation state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state_label = if app.errors.is_empty() {
        "VALID"
    } else {
        "INVALID"
    };

    let header = Line::from(vec![
        Span::styled(
            " EV-DEMAND-SIM ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" │ seed {} │ {} ", app.seed, state_label)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Parameter form: one row per field, selected row highlighted, errors inline.
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(Field::ALL.len());
    for (i, field) in Field::ALL.into_iter().enumerate() {
        let marker = if i == app.selected { "▶ " } else { "  " };
        let value = app
            .input
            .get(field)
            .map_or_else(|| "—".to_string(), |v| format!("{v}"));

        let mut spans = vec![
            Span::styled(
                format!("{marker}{:<26}", field.label()),
                if i == app.selected {
                    Style::default()
                        .fg(style::SELECTED_FG)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                },
            ),
            Span::raw(format!("{value:>8}")),
        ];
        if let Some(message) = app.errors.get(field) {
            spans.push(Span::styled(
                format!("   {message}"),
                Style::default().fg(style::ERROR_FG),
            ));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Simulation Parameters");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Hourly power demand line chart.
fn render_hourly_chart(frame: &mut Frame, app: &App, area: Rect) {
    let data: Vec<(f64, f64)> = app.result.as_ref().map_or_else(Vec::new, |r| {
        r.hourly
            .iter()
            .enumerate()
            .map(|(i, s)| (f64::from(i as u32 * SAMPLE_INTERVAL_HOURS), s.power_kw))
            .collect()
    });

    let y_bounds = style::power_bounds_y(&data);

    let datasets = vec![
        Dataset::default()
            .name("Power Demand")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::DEMAND_COLOR))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Hourly Power Demand (kW)"),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, 22.0])
                .labels(["0:00", "12:00", "22:00"]),
        )
        .y_axis(Axis::default().bounds(y_bounds).labels([
            format!("{:.0}", y_bounds[0]),
            format!("{:.0}", y_bounds[1] / 2.0),
            format!("{:.0}", y_bounds[1]),
        ]));
    frame.render_widget(chart, area);
}

/// Weekly charging-events bar chart.
fn render_weekly_bars(frame: &mut Frame, app: &App, area: Rect) {
    let bars: Vec<Bar> = app.result.as_ref().map_or_else(Vec::new, |r| {
        r.weekly
            .iter()
            .map(|w| {
                Bar::default()
                    .label(Line::from(w.day_label))
                    .value(w.events)
                    .style(Style::default().fg(style::BAR_COLOR))
            })
            .collect()
    });

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Weekly Charging Events"),
        )
        .bar_width(7)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Summary panel: the derived statistics of the last valid result.
fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match app.result.as_ref() {
        Some(result) => {
            let s = &result.statistics;
            vec![
                Line::from(format!(
                    "Events    day {:>8}   week {:>10.0}   year {:>12.0}",
                    s.charging_events_per_day, s.total_events.week, s.total_events.year
                )),
                Line::from(format!(
                    "Energy    day {:>6.0} kWh  week {:>8.0} kWh  year {:>10.0} kWh",
                    s.total_energy_kwh.day, s.total_energy_kwh.week, s.total_energy_kwh.year
                )),
                Line::from(format!("Peak power demand {:.0} kW", s.peak_power_demand_kw)),
            ]
        }
        None => vec![Line::from("fix the parameters to run a simulation")],
    };

    let block = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Footer: key bindings.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Line::from(Span::styled(
        " ↑/↓ field │ ←/→ adjust │ r resample │ 1/2/3 preset │ q quit",
        Style::default().fg(style::FOOTER_FG),
    ));
    frame.render_widget(Paragraph::new(footer), area);
}
