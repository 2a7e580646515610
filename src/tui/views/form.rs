//! Entry form panel

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::form::FormField;

/// Render the expense entry form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Add Expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // date
            Constraint::Length(1), // category
            Constraint::Length(1), // amount
            Constraint::Length(1), // currency
            Constraint::Length(1), // notes
            Constraint::Length(1), // spacer
            Constraint::Length(1), // status / error
            Constraint::Min(0),    // help
        ])
        .split(inner);

    let form = &app.form;
    let focused = form.focused_field;

    let mut date = form.date_input.clone();
    date.focused = focused == FormField::Date;
    frame.render_widget(&date, rows[0]);

    let mut category = form.category_input.clone();
    category.focused = focused == FormField::Category;
    frame.render_widget(&category, rows[1]);

    let mut amount = form.amount_input.clone();
    amount.focused = focused == FormField::Amount;
    frame.render_widget(&amount, rows[2]);

    let mut currency = form.currency_input.clone();
    currency.focused = focused == FormField::Currency;
    frame.render_widget(&currency, rows[3]);

    let mut notes = form.notes_input.clone();
    notes.focused = focused == FormField::Notes;
    frame.render_widget(&notes, rows[4]);

    if let Some(message) = &form.error_message {
        let error = Paragraph::new(Line::from(message.as_str()))
            .style(Style::default().fg(Color::Red));
        frame.render_widget(error, rows[6]);
    } else if let Some(status) = &app.status {
        let status = Paragraph::new(Line::from(status.as_str()))
            .style(Style::default().fg(Color::Green));
        frame.render_widget(status, rows[6]);
    }

    let help = Paragraph::new("Tab: next field  Enter: add  Esc: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[7]);
}
