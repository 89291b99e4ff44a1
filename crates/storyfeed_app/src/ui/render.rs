use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;
use storyfeed_core::{AppViewModel, SortMode};

use super::constants::{COLUMN_LABELS, COLUMN_WIDTHS};
use crate::app::Focus;

/// Draw one frame from the view model. Rendering reads the view model and
/// shell focus/selection only; it never touches application state.
pub fn render(frame: &mut Frame, view: &AppViewModel, focus: Focus, selected: usize) {
    let [header, search, searches, stories, status, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, view);
    render_search(frame, search, view, focus);
    render_last_searches(frame, searches, view);
    render_stories(frame, stories, view, focus, selected);
    render_status(frame, status, view);
    render_footer(frame, footer, focus);
}

fn render_header(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let headline = format!("My Hacker Stories with {} comments.", view.total_comments);
    frame.render_widget(
        Paragraph::new(headline).style(Style::default().add_modifier(Modifier::BOLD)),
        area,
    );
}

fn render_search(frame: &mut Frame, area: Rect, view: &AppViewModel, focus: Focus) {
    let border_style = if focus == Focus::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input = if focus == Focus::Search {
        format!("{}▌", view.search_input)
    } else {
        view.search_input.clone()
    };
    frame.render_widget(
        Paragraph::new(input).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Search"),
        ),
        area,
    );
}

fn render_last_searches(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    if view.last_searches.is_empty() {
        return;
    }
    let mut spans = vec![Span::styled(
        "Last searches: ",
        Style::default().fg(Color::DarkGray),
    )];
    for (index, term) in view.last_searches.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[{}] ", index + 1),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(term.clone()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_stories(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    focus: Focus,
    selected: usize,
) {
    let block = Block::default().borders(Borders::ALL).title("Stories");

    if view.is_loading {
        frame.render_widget(Paragraph::new("Loading ...").block(block).centered(), area);
        return;
    }

    let header_cells = COLUMN_LABELS
        .iter()
        .enumerate()
        .map(|(column, label)| Cell::from(header_label(column, label, view.sort)));
    let header = Row::new(header_cells)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .height(1);

    let rows = view.stories.iter().map(|story| {
        Row::new(vec![
            Cell::from(story.title.clone()),
            Cell::from(story.author.clone()),
            Cell::from(story.num_comments.to_string()),
            Cell::from(story.points.to_string()),
        ])
        .height(1)
    });

    let selected_style = if focus == Focus::List {
        Style::default().bg(Color::Yellow).fg(Color::Black)
    } else {
        Style::default()
    };

    let table = Table::new(rows, COLUMN_WIDTHS.map(Constraint::Percentage))
        .header(header)
        .block(block)
        .row_highlight_style(selected_style);

    let mut table_state = TableState::default();
    if !view.stories.is_empty() {
        table_state.select(Some(selected.min(view.stories.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Column header with the active sort marker. Title and author sort
/// ascending, comments and points descending.
fn header_label(column: usize, label: &str, sort: SortMode) -> String {
    let marker = match (column, sort) {
        (0, SortMode::Title) | (1, SortMode::Author) => " ▲",
        (2, SortMode::Comments) | (3, SortMode::Points) => " ▼",
        _ => "",
    };
    format!("{label}{marker}")
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let (text, style) = if view.is_error {
        (
            "Something went wrong ...".to_string(),
            Style::default().fg(Color::Red),
        )
    } else {
        (
            format!("{} stories", view.stories.len()),
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_footer(frame: &mut Frame, area: Rect, focus: Focus) {
    let hints = match focus {
        Focus::Search => "Enter search  Tab list  Ctrl-c quit",
        Focus::List => "j/k move  d dismiss  t/a/c/p/o sort  1-5 replay  Tab search  q quit",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
