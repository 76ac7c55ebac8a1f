//! Power plant rendering: status header, generator list, prestige panel,
//! event log, and the prestige confirmation overlay.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::{buy_action, CANCEL_PRESTIGE, CONFIRM_PRESTIGE, REQUEST_PRESTIGE};
use super::logic::format_number;
use super::prestige::{prestige_reward, PrestigePreview, PRESTIGE_THRESHOLD};
use super::state::Snapshot;
use super::PowerPlant;

pub fn render(plant: &PowerPlant, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let snap = plant.state.snapshot();
    let narrow = is_narrow_layout(area.width);

    if narrow {
        let gen_height = snap.generators.len() as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(gen_height),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);
        render_header(plant, &snap, f, chunks[0]);
        render_generators(&snap, f, chunks[1], click_state, narrow);
        render_prestige(plant, &snap, f, chunks[2], click_state);
        render_log(plant, f, chunks[3]);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(8)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(rows[1]);
        let gen_height = snap.generators.len() as u16 + 2;
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(gen_height), Constraint::Min(3)])
            .split(cols[0]);

        render_header(plant, &snap, f, rows[0]);
        render_generators(&snap, f, left[0], click_state, narrow);
        render_prestige(plant, &snap, f, left[1], click_state);
        render_log(plant, f, cols[1]);
    }

    if let Some(preview) = plant.prompt() {
        render_prompt(&snap, preview, f, area, click_state);
    }
}

fn render_header(plant: &PowerPlant, snap: &Snapshot, f: &mut Frame, area: Rect) {
    let supply_ok = snap.generation >= snap.demand;
    let power_color = if supply_ok { Color::Green } else { Color::Red };

    let mut status = vec![Span::styled(
        format!(" Prestige Lv {}  x{:.1}", snap.prestige_level, snap.prestige_multiplier),
        Style::default().fg(Color::Magenta),
    )];
    if plant.save_failed {
        status.push(Span::styled(
            "  ⚠ saving failed",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" ${}", format_number(snap.currency)),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  +${}/s", format_number(snap.income)),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                " ⚡ {} MW / {} MW demand",
                format_number(snap.generation),
                format_number(snap.demand)
            ),
            Style::default().fg(power_color),
        )),
        Line::from(status),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Power Plant "),
    );
    f.render_widget(widget, area);
}

fn render_generators(
    snap: &Snapshot,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    narrow: bool,
) {
    let mut cl = ClickableList::new();
    for view in &snap.generators {
        let kind = view.kind;
        let (key_style, text_style) = if view.affordable {
            (
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        };

        let mut spans = vec![
            Span::styled(format!(" [{}] ", kind.key()), key_style),
            Span::styled(format!("{:<12}", kind.name()), text_style),
            Span::styled(format!(" x{:<4}", view.count), Style::default().fg(Color::Cyan)),
            Span::styled(format!(" ${}", format_number(view.cost)), text_style),
        ];
        if !narrow {
            spans.push(Span::styled(
                format!("  +{}MW +${}/s", format_number(kind.power()), format_number(kind.income())),
                Style::default().fg(Color::DarkGray),
            ));
        }
        cl.push_clickable(Line::from(spans), buy_action(kind));
    }

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1);
    drop(cs);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Generators "),
    );
    f.render_widget(widget, area);
}

fn render_prestige(
    plant: &PowerPlant,
    snap: &Snapshot,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    if snap.can_prestige {
        cl.push_clickable(
            Line::from(Span::styled(
                format!(" [P] Prestige for +{} level(s)", prestige_reward(&plant.state)),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )),
            REQUEST_PRESTIGE,
        );
    } else {
        let progress = Line::from(Span::styled(
            format!(
                " Prestige at ${} lifetime (${} so far)",
                format_number(PRESTIGE_THRESHOLD),
                format_number(plant.state.lifetime_earned)
            ),
            Style::default().fg(Color::DarkGray),
        ));
        cl.push(progress);
    }

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1);
    drop(cs);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Prestige "),
    );
    f.render_widget(widget, area);
}

fn render_log(plant: &PowerPlant, f: &mut Frame, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;

    // Newest first
    let log_lines: Vec<Line> = plant
        .log
        .iter()
        .rev()
        .take(visible_height)
        .enumerate()
        .map(|(i, entry)| {
            let style = if entry.is_important {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if i < 3 {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(entry.text.as_str(), style))
        })
        .collect();

    let widget = Paragraph::new(log_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Log "),
    );
    f.render_widget(widget, area);
}

/// Confirmation overlay. Registered last so its targets win over the list below.
fn render_prompt(
    snap: &Snapshot,
    preview: PrestigePreview,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let popup = centered(area, 46, 8);

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        format!(" Reset for +{} prestige level(s)?", preview.reward),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!(
            " Income x{:.1} → x{:.1}",
            snap.prestige_multiplier, preview.new_multiplier
        ),
        Style::default().fg(Color::Magenta),
    )));
    cl.push(Line::from(Span::styled(
        " Money and generators start over.",
        Style::default().fg(Color::DarkGray),
    )));
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            " [Y] Confirm",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        CONFIRM_PRESTIGE,
    );
    cl.push_clickable(
        Line::from(Span::styled(" [N] Cancel", Style::default().fg(Color::Red))),
        CANCEL_PRESTIGE,
    );

    let mut cs = click_state.borrow_mut();
    cl.register_targets(popup, &mut cs, 1, 1);
    drop(cs);

    f.render_widget(Clear, popup);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Prestige? "),
    );
    f.render_widget(widget, popup);
}

/// A `width` x `height` rect centred in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
