//! Application state, rendering, and key handling for the terminal UI.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use twentyone::{Card, Game, GameState, Outcome, Suit};

/// Application state.
pub struct App {
    /// The game engine.
    pub game: Game,
    /// Message shown in the center of the table once a round resolves.
    pub message: Option<String>,
}

impl App {
    /// Creates the app and deals the first hand.
    pub fn new(game: Game) -> Self {
        let mut app = Self {
            game,
            message: None,
        };
        app.game.new_round();
        app.sync_message();
        app
    }

    /// Player hits. Ignored outside an active round.
    pub fn hit(&mut self) {
        let _ = self.game.hit();
        self.sync_message();
    }

    /// Player calls (stands) and the dealer plays out.
    pub fn call(&mut self) {
        let _ = self.game.stand();
        self.sync_message();
    }

    /// Deals a new hand. Ignored while a round is in progress.
    pub fn new_hand(&mut self) {
        if self.game.state() == GameState::RoundOver {
            self.game.new_round();
            self.sync_message();
        }
    }

    fn sync_message(&mut self) {
        self.message = self.game.outcome().map(|outcome| {
            match outcome {
                Outcome::PlayerWin => "Player Wins",
                Outcome::DealerWin => "Dealer Wins",
                Outcome::Push => "Pushed",
                Outcome::Blackjack => "Blackjack!",
            }
            .to_string()
        });
    }
}

/// Handles a key press. Returns `true` when the app should quit.
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match app.game.state() {
        GameState::PlayerTurn => match key {
            KeyCode::Char('q') => return true,
            KeyCode::Char('h') => app.hit(),
            KeyCode::Char('c') | KeyCode::Char('s') => app.call(),
            _ => {}
        },
        GameState::RoundOver => match key {
            KeyCode::Char('q') => return true,
            KeyCode::Char('n') => app.new_hand(),
            _ => {}
        },
    }
    false
}

/// Renders the table.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // dealer
            Constraint::Min(3),    // message
            Constraint::Length(8), // player
            Constraint::Length(3), // help
        ])
        .split(frame.area());

    render_dealer(frame, app, chunks[0]);
    render_message(frame, app, chunks[1]);
    render_player(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_dealer(frame: &mut Frame, app: &App, area: Rect) {
    let dealer = app.game.dealer();

    // The hole card (second card) stays face down until the round resolves.
    let hidden = if dealer.is_hole_revealed() {
        None
    } else {
        Some(1)
    };

    let mut lines = hand_lines(dealer.cards(), hidden);
    let total = if dealer.is_hole_revealed() {
        dealer.value().to_string()
    } else {
        String::new()
    };
    lines.push(Line::from(Span::styled(
        total,
        Style::default().fg(Color::Gray),
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Dealer").borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_player(frame: &mut Frame, app: &App, area: Rect) {
    let player = app.game.player();

    let mut lines = vec![Line::from(Span::styled(
        player.value().to_string(),
        Style::default().fg(Color::Gray),
    ))];
    lines.extend(hand_lines(player.cards(), None));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Player").borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, app: &App, area: Rect) {
    let message = app.message.as_deref().unwrap_or("");

    let widget = Paragraph::new(message)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);

    // Vertically center the single message line.
    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area)[1];
    frame.render_widget(widget, centered);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.game.state() {
        GameState::PlayerTurn => "[h] hit  [c] call  [q] quit",
        GameState::RoundOver => "[n] new hand  [q] quit",
    };

    let widget = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Height of a rendered card box in terminal rows.
const CARD_ROWS: usize = 5;

/// Renders a hand as a row of card boxes, one `Line` per terminal row.
///
/// `hidden` marks a card index to draw face down.
fn hand_lines(cards: &[Card], hidden: Option<usize>) -> Vec<Line<'static>> {
    (0..CARD_ROWS)
        .map(|row| {
            let mut spans = Vec::new();
            for (index, card) in cards.iter().enumerate() {
                if index > 0 {
                    spans.push(Span::raw("  "));
                }
                if hidden == Some(index) {
                    spans.push(Span::styled(
                        face_down_row(row),
                        Style::default().fg(Color::DarkGray),
                    ));
                } else {
                    spans.push(Span::styled(
                        face_up_row(card, row),
                        Style::default().fg(suit_color(card.suit)),
                    ));
                }
            }
            Line::from(spans)
        })
        .collect()
}

fn face_up_row(card: &Card, row: usize) -> String {
    let rank = rank_symbol(card.rank);
    let suit = suit_symbol(card.suit);

    match row {
        0 => "┌─────┐".to_string(),
        1 => format!("│{rank:<5}│"),
        2 => format!("│  {suit}  │"),
        3 => format!("│{rank:>5}│"),
        _ => "└─────┘".to_string(),
    }
}

fn face_down_row(row: usize) -> String {
    match row {
        0 => "┌─────┐".to_string(),
        1..=3 => "│░░░░░│".to_string(),
        _ => "└─────┘".to_string(),
    }
}

fn rank_symbol(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => rank.to_string(),
    }
}

const fn suit_symbol(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "♥",
        Suit::Diamonds => "♦",
        Suit::Clubs => "♣",
        Suit::Spades => "♠",
    }
}

const fn suit_color(suit: Suit) -> Color {
    match suit {
        Suit::Hearts | Suit::Diamonds => Color::Red,
        Suit::Clubs | Suit::Spades => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twentyone::GameOptions;

    const fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank)
    }

    fn scripted_app(draws: &[Card]) -> App {
        let mut game = Game::new(GameOptions::default(), 1);
        game.deck.stack(draws);
        App::new(game)
    }

    #[test]
    fn keys_drive_a_full_round() {
        let mut app = scripted_app(&[
            card(Suit::Hearts, 8),   // player
            card(Suit::Diamonds, 7), // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 4),   // player hit
            card(Suit::Clubs, 5),    // dealer draw
        ]);

        assert_eq!(app.game.state(), GameState::PlayerTurn);
        assert!(app.message.is_none());

        assert!(!handle_key_event(&mut app, KeyCode::Char('h')));
        assert_eq!(app.game.player().len(), 3);

        assert!(!handle_key_event(&mut app, KeyCode::Char('c')));
        assert_eq!(app.game.state(), GameState::RoundOver);
        assert_eq!(app.message.as_deref(), Some("Dealer Wins"));

        assert!(!handle_key_event(&mut app, KeyCode::Char('n')));
        assert_eq!(app.game.player().len(), 2);
        assert!(handle_key_event(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn new_hand_key_is_ignored_mid_round() {
        let mut app = scripted_app(&[
            card(Suit::Hearts, 8),
            card(Suit::Diamonds, 7),
            card(Suit::Clubs, 6),
            card(Suit::Spades, 10),
        ]);

        handle_key_event(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game.state(), GameState::PlayerTurn);
        assert_eq!(app.game.player().len(), 2);
    }

    #[test]
    fn card_rows_align_for_ten() {
        assert_eq!(face_up_row(&card(Suit::Spades, 10), 1), "│10   │");
        assert_eq!(face_up_row(&card(Suit::Spades, 10), 3), "│   10│");
        assert_eq!(face_up_row(&card(Suit::Hearts, 1), 1), "│A    │");
    }
}
