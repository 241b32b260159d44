use crate::cards::{spades_high, Card, Suit};
use crate::deck::SortOrder;
use crate::tui::app::{AppState, Arrangement};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_deck(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Min(6),    // grid
            Constraint::Length(5), // selection
            Constraint::Length(3), // key hints
        ])
        .split(size);

    let view = match (app.suit_filter, app.reversed) {
        (None, false) => String::from("all suits"),
        (None, true) => String::from("all suits, reversed"),
        (Some(s), false) => format!("{s} only"),
        (Some(s), true) => format!("{s} only, reversed"),
    };
    let header_lines = vec![
        Line::from(format!("{}  Order: {}  View: {view}", app.deck, arrangement_label(app))),
        Line::from(format!(
            "Shuffle: {}  Seed: {}  Shuffles: {}",
            AppState::shuffle_mode_label(app.shuffle_mode),
            app.seed,
            app.shuffles
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("deck-vector").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_grid(f, chunks[1], app);
    draw_selection(f, chunks[2], app);

    let hints = "[←↑↓→] Move  [S] Shuffle  [R] Rank  [U] Suit  [B] Bridge  [V] Reverse  \
                 [F] Filter  [N] Reset  [M] Menu  [?] Help  [Q] Quit";
    let hint_para = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().add_modifier(Modifier::DIM),
    )))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(hint_para, chunks[3]);

    if app.help_open() {
        draw_help(f, size);
    }
}

fn arrangement_label(app: &AppState) -> &'static str {
    match app.arrangement {
        Arrangement::Canonical => "canonical",
        Arrangement::Shuffled => "shuffled",
        Arrangement::Sorted(SortOrder::Rank) => "by rank",
        Arrangement::Sorted(SortOrder::Suit) => "by suit",
        Arrangement::Sorted(SortOrder::SpadesHigh) => "spades high",
    }
}

fn draw_grid(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Cards").borders(Borders::ALL);
    let grid_area = inner(area);
    f.render_widget(block, area);

    let cards = app.visible_cards();
    let high = app.visible_high_card();
    let lines: Vec<Line> = cards
        .chunks(AppState::ROW_LEN)
        .enumerate()
        .map(|(row, chunk)| {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .map(|(col, &card)| {
                    let idx = row * AppState::ROW_LEN + col;
                    let mut style = suit_style(card.suit());
                    if Some(card) == high {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    if idx == app.cursor {
                        style = style.bg(Color::Yellow).fg(Color::Black);
                    }
                    Span::styled(format!(" {:>3} ", short_card(card)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(para, grid_area);
}

fn draw_selection(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Selected").borders(Borders::ALL);
    let lines = match (app.selected_card(), app.selected_deck_position()) {
        (Some(card), Some(pos)) => vec![
            Line::from(Span::styled(card.to_string(), suit_style(card.suit()))),
            Line::from(format!(
                "Deck position: {pos}  Sort key: {:?}  Spades-high: {}",
                card.sort_key(),
                spades_high(card)
            )),
            Line::from(match app.visible_high_card() {
                Some(high) => format!("High card in view: {high}"),
                None => String::from("High card in view: -"),
            }),
        ],
        _ => vec![Line::from("No card selected")],
    };
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help(f: &mut Frame, size: Rect) {
    let area = centered_rect(60, 60, size);
    let lines = vec![
        Line::from(Span::styled("Keys", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("←/→  previous / next card (wraps)"),
        Line::from("↑/↓  previous / next row"),
        Line::from("S    shuffle the deck"),
        Line::from("R    sort by rank, then suit"),
        Line::from("U    sort by suit, then rank"),
        Line::from("B    sort spades-high (bridge order)"),
        Line::from("V    toggle reversed view"),
        Line::from("F    cycle suit filter"),
        Line::from("N    reset to canonical order"),
        Line::from("M    settings menu"),
        Line::from(""),
        Line::from(Span::styled("[Esc] Close", Style::default().add_modifier(Modifier::DIM))),
    ];
    let para = Paragraph::new(lines)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left);
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}

fn suit_style(s: Suit) -> Style {
    match s {
        Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
        Suit::Spades | Suit::Clubs => Style::default().fg(Color::White),
    }
}

fn short_card(c: Card) -> String {
    let rank = match c.rank().to_char() {
        'T' => String::from("10"),
        ch => ch.to_string(),
    };
    format!("{rank}{}", c.suit().symbol())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::InputAction;

    #[test]
    fn arrangement_label_names_each_sort_order() {
        let mut app = AppState::default();
        app.apply_menu();
        assert_eq!(arrangement_label(&app), "canonical");
        let _ = app.handle_input(InputAction::SortSpadesHigh);
        assert_eq!(arrangement_label(&app), "spades high");
        let _ = app.handle_input(InputAction::SortBySuit);
        assert_eq!(arrangement_label(&app), "by suit");
        let _ = app.handle_input(InputAction::SortByRank);
        assert_eq!(arrangement_label(&app), "by rank");
    }
}
