use crate::cards::Card;
use crate::engine::GameEngine;
use crate::game::GameState;
use crate::roster::Player;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(5), // trick
            Constraint::Min(3),    // seats
            Constraint::Length(4), // active hand
            Constraint::Length(4), // status bar
        ])
        .split(size);

    let game = app.engine();
    let header_lines = vec![
        Line::from(format!(
            "Round {}/{} ({} left)   Cards: {}   Dealer: P{}   Phase: {}",
            game.round_number(),
            game.total_rounds(),
            game.rounds_left(),
            game.cards_per_hand(),
            game.dealer() + 1,
            game.state().label(),
        )),
        Line::from(format!(
            "Bids: {} of {} placed, total {}   To act: P{}",
            game.estimated_wins_count(),
            game.num_players(),
            game.total_estimated_wins(),
            game.current() + 1,
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("oh-hell-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_trick(f, chunks[1], app);
    draw_seats(f, chunks[2], app);
    draw_hand(f, chunks[3], app);
    draw_status(f, chunks[4], app);
}

fn draw_trick(f: &mut Frame, area: Rect, app: &AppState) {
    let game = app.engine();
    let (title, plays) = if game.played_cards().is_empty() {
        match game.last_trick() {
            Some(t) => (format!("Last trick: P{} took it", t.winner + 1), t.plays.as_slice()),
            None => ("Trick".to_string(), game.played_cards()),
        }
    } else {
        let lead = game.lead_suit().map(|s| s.to_string()).unwrap_or_default();
        (format!("Trick (lead {lead})"), game.played_cards())
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let trick_inner = inner(area);
    f.render_widget(block, area);

    let n = game.num_players().max(1) as u16;
    let slot_width = trick_inner.width / n;
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Length(slot_width)).collect::<Vec<_>>())
        .split(trick_inner);
    for (i, slot) in slots.iter().enumerate() {
        match plays.get(i) {
            Some(p) => render_card_widget(f, *slot, Some(p.card), Some(format!("P{}", p.seat + 1))),
            None => render_card_widget(f, *slot, None, None),
        }
    }
}

fn draw_seats(f: &mut Frame, area: Rect, app: &AppState) {
    let game = app.engine();
    let block = Block::default().title("Players").borders(Borders::ALL);
    let n = game.num_players();
    let mut lines: Vec<Line> = Vec::with_capacity(n + 1);
    lines.push(Line::from(Span::styled(
        format!("{:<10} {:>4} {:>4} {:>7}", "Seat", "Bid", "Won", "Points"),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let bids_open = game.state() == GameState::Planning;
    let winners = game.winners();
    for (idx, p) in seats(game).into_iter().enumerate() {
        let mut name = p.name().to_string();
        if idx == game.dealer() {
            name.push_str(" (D)");
        }
        // Seats that have not bid yet this round show a dash.
        let placed = (idx + n - game.dealer()) % n < game.estimated_wins_count();
        let bid = if (bids_open && !placed) || game.state() == GameState::Dealing {
            "-".to_string()
        } else {
            p.estimated_wins().to_string()
        };
        let text = format!("{:<10} {:>4} {:>4} {:>7}", name, bid, p.wins(), p.points());
        let style = if winners.contains(&idx) {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if idx == game.current() && game.state() != GameState::Finished {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}

fn draw_hand(f: &mut Frame, area: Rect, app: &AppState) {
    let game = app.engine();
    let name = game.player(game.current()).map(Player::name).unwrap_or_default();
    let title = format!("{name}'s hand");
    let block = Block::default().title(title).borders(Borders::ALL);
    let hidden = matches!(game.state(), GameState::Dealing | GameState::Finished);
    let line = if hidden {
        Line::from(Span::styled("--", Style::default().add_modifier(Modifier::DIM)))
    } else {
        let playing = game.state() == GameState::Playing;
        let legal = game.legal_card_indices();
        let mut spans: Vec<Span> = Vec::new();
        for (i, &card) in game.current_hand().iter().enumerate() {
            let mut style = card_style(card);
            if playing && !legal.contains(&i) {
                style = style.add_modifier(Modifier::DIM);
            }
            if playing && i == app.cursor {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::raw(format!("{}:", i + 1)));
            spans.push(Span::styled(card.symbol(), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    };
    let para = Paragraph::new(line).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let game = app.engine();
    let mut left_info = vec![match game.state() {
        GameState::Dealing => Line::from("Press Space to deal the next round."),
        GameState::Planning => Line::from(format!(
            "P{} bid (0-{}): {}_   Enter to submit",
            game.current() + 1,
            game.cards_per_hand(),
            app.bid_entry_text()
        )),
        GameState::Playing => Line::from(format!(
            "P{} to play: ←/→ or 1-9 select, Enter play",
            game.current() + 1
        )),
        GameState::Finished => Line::from(format!(
            "Match over. Winner: {}",
            game.winners().iter().map(|w| format!("P{}", w + 1)).collect::<Vec<_>>().join(", ")
        )),
    }];
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(ev) = app.last_event() {
        left_info.push(Line::from(Span::styled(
            ev.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    let right_keys = vec![Line::from(""), Line::from("? help • S scores • M menu • Q quit")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);
}

pub(super) fn draw_scores(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Scores").borders(Borders::ALL);
    let game = app.engine();
    let mut lines: Vec<Line> = Vec::new();
    if game.round_history().is_empty() {
        lines.push(Line::from("No rounds scored yet."));
    } else {
        let names: Vec<String> = seats(game).iter().map(|p| format!("{:>9}", p.name())).collect();
        lines.push(Line::from(Span::styled(
            format!("{:<8}{}", "Round", names.join("")),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for summary in game.round_history() {
            let cells: Vec<String> = (0..summary.bids.len())
                .map(|i| {
                    format!("{:>9}", format!("{}/{} +{}", summary.wins[i], summary.bids[i], summary.awards[i]))
                })
                .collect();
            lines.push(Line::from(format!(
                "{:<8}{}",
                format!("{} ({})", summary.round, summary.cards_per_hand),
                cells.join("")
            )));
        }
        let totals: Vec<String> =
            seats(game).iter().map(|p| format!("{:>9}", p.points())).collect();
        lines.push(Line::from(Span::styled(
            format!("{:<8}{}", "Total", totals.join("")),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "won/bid +points • Close: S or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal the next round"),
        Line::from("- S: score sheet"),
        Line::from(""),
        Line::from(Span::styled("Bidding:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- 0-9: edit bid, Backspace: delete digit"),
        Line::from("- Enter: submit"),
        Line::from("- The last bidder may not make the total equal the hand size"),
        Line::from(""),
        Line::from(Span::styled("Playing:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Left / Right: move selection"),
        Line::from("- 1-9: select card"),
        Line::from("- Enter: play selected card"),
        Line::from("- Follow the lead suit when you can"),
        Line::from(""),
        Line::from(Span::styled("Scoring:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Exact bid of 0: 20 points"),
        Line::from("- Exact bid of n: n + 10 points"),
        Line::from("- Missed bid: 0 points"),
        Line::from(""),
        Line::from("- M: menu • Q: quit • Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn seats(game: &dyn GameEngine) -> Vec<&Player> {
    (0..game.num_players()).filter_map(|i| game.player(i)).collect()
}

fn card_style(card: Card) -> Style {
    if card.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, label: Option<String>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(label) = label {
        block = block.title(label);
    }
    let card_inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.symbol(), card_style(c))),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, card_inner);
}
