//! Forecast screen
//!
//! Layout, top to bottom: date header, current reading next to the three
//! hourly samples, the four day summaries, and a footer with the time of the
//! observation.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::icons::{wind_arrow, Condition};
use crate::app::App;
use crate::config::UiLabels;
use crate::forecast::{CurrentPoint, DayPoint, ForecastSnapshot, HourPoint, Units};

mod colors {
    use ratatui::style::Color;

    /// Box borders and header
    pub const HEADER: Color = Color::Cyan;
    /// Primary text
    pub const PRIMARY: Color = Color::White;
    /// Secondary/dimmed text
    pub const SECONDARY: Color = Color::Gray;
    /// Failed update message
    pub const ERROR: Color = Color::Red;
    /// Update in progress
    pub const BUSY: Color = Color::Yellow;
}

/// Color for temperature (warmer = more red, cooler = more blue)
fn temperature_color(temp: f64) -> Color {
    if temp >= 30.0 {
        Color::Red
    } else if temp >= 25.0 {
        Color::LightRed
    } else if temp >= 20.0 {
        Color::Yellow
    } else if temp >= 10.0 {
        Color::Green
    } else if temp >= 0.0 {
        Color::Cyan
    } else {
        Color::Blue
    }
}

/// Renders the forecast screen, or the loading screen before the first snapshot
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let Some(snapshot) = app.snapshot.as_ref() else {
        render_loading(frame, area, app.last_error.as_deref());
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(6), // current + hours
            Constraint::Length(7), // days
            Constraint::Min(0),
            Constraint::Length(1), // footer
        ])
        .split(area);

    frame.render_widget(header(&snapshot.current, &app.labels), chunks[0]);
    render_top_row(frame, chunks[1], snapshot);
    render_day_row(frame, chunks[2], snapshot, &app.labels);
    frame.render_widget(footer(app, snapshot), chunks[4]);
}

/// Header: day of month and month name of the observation
fn header(current: &CurrentPoint, labels: &UiLabels) -> Paragraph<'static> {
    let text = format!(
        "{} {}",
        current.day.trim_start_matches('0'),
        labels.month_name(&current.month)
    );
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(colors::HEADER)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
}

fn render_top_row(frame: &mut Frame, area: Rect, snapshot: &ForecastSnapshot) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(31),
            Constraint::Percentage(23),
            Constraint::Percentage(23),
            Constraint::Percentage(23),
        ])
        .split(area);

    frame.render_widget(
        boxed(current_lines(&snapshot.current, &snapshot.units), "Now"),
        columns[0],
    );
    for (hour, column) in snapshot.hours.iter().zip(columns.iter().skip(1)) {
        frame.render_widget(boxed(hour_lines(hour, &snapshot.units), ""), *column);
    }
}

fn render_day_row(frame: &mut Frame, area: Rect, snapshot: &ForecastSnapshot, labels: &UiLabels) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (day, column) in snapshot.days.iter().zip(columns.iter()) {
        frame.render_widget(boxed(day_lines(day, labels), ""), *column);
    }
}

fn boxed(lines: Vec<Line<'static>>, title: &str) -> Paragraph<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::HEADER));
    if !title.is_empty() {
        block = block.title(format!(" {} ", title));
    }
    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
}

/// Current temperature, wind and condition
pub fn current_lines(current: &CurrentPoint, units: &Units) -> Vec<Line<'static>> {
    let condition = Condition::from_code(current.weather_code);
    vec![
        Line::from(Span::styled(
            format!("{:.1}{}", current.temperature, units.temperature),
            Style::default()
                .fg(temperature_color(current.temperature))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} {} {:.0} {}",
            wind_arrow(current.wind_direction),
            current.wind_direction,
            current.wind_speed_kmh,
            units.wind_speed
        )),
        Line::from(format!(
            "{} {}",
            condition.glyph(current.is_day),
            condition.label()
        )),
    ]
}

/// One hourly sample: "HH:00", temperature and glyph
pub fn hour_lines(hour: &HourPoint, units: &Units) -> Vec<Line<'static>> {
    let condition = Condition::from_code(hour.weather_code);
    vec![
        Line::from(Span::styled(
            format!("{}:00", hour.hour_label),
            Style::default().fg(colors::SECONDARY),
        )),
        Line::from(Span::styled(
            format!("{:.0}{}", hour.temperature, units.temperature),
            Style::default().fg(temperature_color(hour.temperature)),
        )),
        Line::from(condition.glyph(hour.is_day)),
    ]
}

/// One day summary: "<weekday> DD.MM.", "min°/max°", glyph, sun/rain hours
pub fn day_lines(day: &DayPoint, labels: &UiLabels) -> Vec<Line<'static>> {
    let condition = Condition::from_code(day.aggregated_code);
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} {}.{}.",
                labels.day_name(day.weekday),
                day.day_of_month,
                day.month
            ),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{}°/{}°", day.temp_min, day.temp_max)),
        Line::from(format!("{} {}", condition.glyph(true), condition.label())),
    ];

    let mut extras = Vec::new();
    if let Some(sun) = day.sunshine_hours {
        extras.push(format!("\u{2600} {}h", sun));
    }
    if let Some(rain) = day.precipitation_hours {
        extras.push(format!("\u{2602} {}h", rain));
    }
    if !extras.is_empty() {
        lines.push(Line::from(Span::styled(
            extras.join("  "),
            Style::default().fg(colors::SECONDARY),
        )));
    }
    lines
}

/// Footer: "<label>: <timestamp>", refresh state and the last error
fn footer(app: &App, snapshot: &ForecastSnapshot) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        format!(
            "{}: {}",
            app.labels.footer, snapshot.current.update_timestamp
        ),
        Style::default().fg(colors::SECONDARY),
    )];
    if app.refreshing {
        spans.push(Span::styled(
            "  refreshing...",
            Style::default().fg(colors::BUSY),
        ));
    }
    if let Some(error) = &app.last_error {
        spans.push(Span::styled(
            format!("  {}", error),
            Style::default().fg(colors::ERROR),
        ));
    }
    spans.push(Span::styled(
        "  ? help",
        Style::default().fg(Color::DarkGray),
    ));
    Paragraph::new(Line::from(spans))
}

/// Renders a loading message while the first update runs
fn render_loading(frame: &mut Frame, area: Rect, error: Option<&str>) {
    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let mut lines = vec![Line::from(Span::styled(
        "Loading forecast...",
        Style::default().fg(colors::HEADER),
    ))];
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(colors::ERROR),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
}
