use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(1),    // Results and shopping list
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_search_bar(app, frame, chunks[0]);
    render_drinks(app, frame, columns[0]);
    render_shopping(app, frame, columns[1]);
    render_hints(app, frame, chunks[2]);
    render_toast(app, frame);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().fg(Color::Yellow))
    } else {
        block
    }
}

fn render_search_bar(app: &App, frame: &mut Frame, area: Rect) {
    let input = Paragraph::new(app.query()).block(pane_block(
        "Search for a cocktail (Enter to search)",
        app.focus() == Focus::Search,
    ));
    frame.render_widget(input, area);
}

fn render_drinks(app: &App, frame: &mut Frame, area: Rect) {
    let block = pane_block("Drinkz", app.focus() == Focus::Drinks);

    if app.has_searched() && app.drinks().is_empty() {
        let empty = Paragraph::new("No results found :(").block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .drinks()
        .iter()
        .map(|drink| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    drink.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    drink.instructions.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(Some(app.drink_cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_shopping(app: &App, frame: &mut Frame, area: Rect) {
    let block = pane_block("Shopping list", app.focus() == Focus::Shopping);

    let items: Vec<ListItem> = app
        .shopping()
        .iter()
        .map(|item| ListItem::new(item.name.clone()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(Some(app.shopping_cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_hints(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.focus() {
        Focus::Search => "Type to edit | Enter search | Tab switch pane | Esc quit",
        Focus::Drinks => "Up/Down select | Enter add ingredients | Tab switch pane | Esc quit",
        Focus::Shopping => {
            "Up/Down select | d remove | c clear | p print | Tab switch pane | Esc quit"
        }
    };

    let line = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(line, area);
}

/// Paint the toast over the top of the frame while a message is visible.
fn render_toast(app: &App, frame: &mut Frame) {
    let Some(message) = app.toast_message() else {
        return;
    };

    let frame_area = frame.area();
    let width = (message.len() as u16 + 4).min(frame_area.width);
    let area = Rect {
        x: frame_area.width.saturating_sub(width) / 2,
        y: 1,
        width,
        height: 3.min(frame_area.height),
    };

    let toast = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_widget(Clear, area);
    frame.render_widget(toast, area);
}
