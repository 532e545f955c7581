use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::report::{NO_TRANSACTIONS_DETECTED, Report};
use super::app::{App, View};

pub fn render(f: &mut Frame, app: &App) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(size);

    match app.analysis.as_report() {
        None => render_empty(f, app, chunks[0]),
        Some(report) => match app.current_view {
            View::Transactions => render_transactions(f, app, report, chunks[0]),
            View::Summary => render_summary(f, report, chunks[0]),
            View::Wasteful => render_wasteful(f, app, report, chunks[0]),
            View::Advice => render_advice(f, report, chunks[0]),
        },
    }

    render_help_panel(f, chunks[1]);

    if app.show_detail {
        render_detail_popup(f, app, size);
    }
}

fn render_empty(f: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(NO_TRANSACTIONS_DETECTED)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().title(app.current_view.title()).borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

fn render_transactions(f: &mut Frame, app: &App, report: &Report, area: Rect) {
    let items: Vec<ListItem> = report.transactions.iter().map(|t| t.to_list_item()).collect();

    let total: Decimal = report.transactions.iter().map(|t| t.amount).sum();
    let header = format!("Transactions ({} total) Sum: {:.2}", report.transactions.len(), total);

    let list = List::new(items)
        .block(Block::default().title(header).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    f.render_stateful_widget(list, area, &mut app.list_state.clone());
}

fn render_summary(f: &mut Frame, report: &Report, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(area);

    let bars: Vec<(&str, u64)> = report
        .summary
        .iter()
        .map(|t| (t.category.as_str(), t.total.to_u64().unwrap_or(0)))
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title("Category-wise Spending").borders(Borders::ALL))
        .data(&bars)
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    f.render_widget(chart, chunks[0]);

    let items: Vec<ListItem> = report
        .summary
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<16} ", t.category.as_str())),
                Span::styled(format!("{:>12.2}", t.total), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let total: Decimal = report.summary.iter().map(|t| t.total).sum();
    let list = List::new(items).block(
        Block::default()
            .title(format!("Ranked Totals (Sum: {:.2})", total))
            .borders(Borders::ALL),
    );

    f.render_widget(list, chunks[1]);
}

fn render_wasteful(f: &mut Frame, app: &App, report: &Report, area: Rect) {
    let items: Vec<ListItem> = report
        .wasteful_transactions()
        .iter()
        .map(|t| t.to_list_item())
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Wasteful Spending ({} flagged)", report.wasteful.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    f.render_stateful_widget(list, area, &mut app.list_state.clone());
}

fn render_advice(f: &mut Frame, report: &Report, area: Rect) {
    let paragraph = Paragraph::new(report.advice.as_str())
        .wrap(Wrap { trim: false })
        .block(Block::default().title("AI Advice").borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

fn render_detail_popup(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.selected_transaction() {
        Some(transaction) => vec![
            Line::from(vec![
                Span::raw("Amount:     "),
                Span::styled(
                    format!("{:.2}", transaction.amount),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("Category:   "),
                Span::styled(
                    transaction.category.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from("Statement line:"),
            Line::from(transaction.text.clone()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(" close"),
            ]),
        ],
        None => vec![Line::from("No transaction selected")],
    };

    let block = Block::default()
        .title("Transaction Detail")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White));

    let popup_area = centered_rect(60, 50, area);
    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

fn render_help_panel(f: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" View • "),
        Span::styled("1-4", Style::default().fg(Color::Yellow)),
        Span::raw(" Jump • "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Move • "),
        Span::styled("d", Style::default().fg(Color::Yellow)),
        Span::raw(" Details • "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" Back • "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ])];

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Help "),
        )
        .alignment(Alignment::Center);

    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(layout[1])[1]
}
