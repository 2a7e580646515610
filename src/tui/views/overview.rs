//! Overview panel
//!
//! Full expense table newest-first, per-category bar visualization, and
//! the total-spent line annotated with the currency of the first record.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::report::{group_by_category, total};
use crate::tui::app::App;

/// Render the overview panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Overview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.expenses.is_empty() {
        let hint = Paragraph::new("No expenses recorded yet. Add some in the form panel.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    }

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // table
            Constraint::Length(8), // category bars
            Constraint::Length(1), // total
        ])
        .split(inner);

    render_table(frame, app, sections[0]);
    render_category_bars(frame, app, sections[1]);
    render_total(frame, app, sections[2]);
}

/// All expenses, newest date first
fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let mut sorted: Vec<&crate::models::Expense> = app.expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let header = Row::new(vec!["Date", "Category", "Amount", "Cur", "Notes"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = sorted
        .iter()
        .map(|e| {
            Row::new(vec![
                e.date.to_string(),
                e.category.clone(),
                format!("{:.2}", e.amount),
                e.currency.clone(),
                e.notes.clone(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(4),
            Constraint::Min(6),
        ],
    )
    .header(header)
    .block(Block::default().title("All Expenses").borders(Borders::TOP));

    frame.render_widget(table, area);
}

/// Horizontal bar per category, descending totals
fn render_category_bars(frame: &mut Frame, app: &App, area: Rect) {
    let totals = group_by_category(&app.expenses);

    let bars: Vec<Bar> = totals
        .iter()
        .map(|(category, sum)| {
            Bar::default()
                .label(Line::from(category.clone()))
                // Bar values are unsigned; refunds chart as zero-length bars
                .value(sum.max(0.0).round() as u64)
                .text_value(format!("{:.2}", sum))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title("Total by Category").borders(Borders::TOP))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Grand total with the currency of the first record
fn render_total(frame: &mut Frame, app: &App, area: Rect) {
    let currency = app
        .expenses
        .first()
        .map(|e| e.currency.as_str())
        .unwrap_or("");

    let line = Paragraph::new(format!("Total Spent: {:.2} {}", total(&app.expenses), currency))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(line, area);
}
