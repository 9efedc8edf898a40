//! Main UI Application
//!
//! Renders the active weapon's two trees side by side and routes key
//! presses into the planner session.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{Skill, WeaponMeta, TREE_COUNT};
use crate::planner::{NodeState, Planner, POINT_BUDGET};

/// Main UI application
pub struct App {
    /// Which tree the cursor lives in (0 or 1)
    tree_focus: usize,
    /// Cursor position within the focused tree's node list
    cursor: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            tree_focus: 0,
            cursor: 0,
        }
    }

    /// Handle a key press. Returns `Ok(true)` when the app should quit.
    pub fn handle_input(&mut self, key: KeyEvent, planner: &mut Planner) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char(']') => {
                planner.next_weapon();
                self.cursor = 0;
            }
            KeyCode::Char('[') => {
                planner.prev_weapon();
                self.cursor = 0;
            }
            KeyCode::Tab => {
                self.tree_focus = (self.tree_focus + 1) % TREE_COUNT;
                self.clamp_cursor(planner);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor += 1;
                self.clamp_cursor(planner);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(skill) = self.cursor_skill(planner) {
                    let id = skill.id.clone();
                    if !planner.toggle(&id) {
                        log::debug!("toggle refused for {}", id);
                    }
                }
            }
            KeyCode::Char('r') => planner.reset(),
            _ => {}
        }
        Ok(false)
    }

    /// Nodes of the focused tree, in presentation order
    fn focused_nodes<'a>(&self, planner: &'a Planner) -> Vec<&'a Skill> {
        planner
            .active_meta()
            .map(|meta| meta.tree_skills(self.tree_focus))
            .unwrap_or_default()
    }

    fn cursor_skill<'a>(&self, planner: &'a Planner) -> Option<&'a Skill> {
        self.focused_nodes(planner).get(self.cursor).copied()
    }

    fn clamp_cursor(&mut self, planner: &Planner) {
        let len = self.focused_nodes(planner).len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn render(&self, frame: &mut Frame, planner: &Planner) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(8),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, planner, chunks[0]);

        let tree_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        for tree in 0..TREE_COUNT {
            self.render_tree(frame, planner, tree, tree_chunks[tree]);
        }

        self.render_detail(frame, planner, chunks[2]);
        self.render_footer(frame, chunks[3]);
    }

    fn render_header(&self, frame: &mut Frame, planner: &Planner, area: Rect) {
        let active = planner.active_weapon();
        let spent = planner.spent_points();

        let mut tabs: Vec<Span> = Vec::new();
        for weapon in planner.catalog().weapons() {
            let style = if weapon == active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            tabs.push(Span::styled(weapon.label(), style));
            tabs.push(Span::raw("  "));
        }

        let lines = vec![
            Line::from(tabs),
            Line::from(vec![
                Span::styled(
                    format!("{} ", active.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("points {spent}/{POINT_BUDGET}")),
            ]),
        ];

        let header = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Skillforge "));
        frame.render_widget(header, area);
    }

    fn render_tree(&self, frame: &mut Frame, planner: &Planner, tree: usize, area: Rect) {
        let Some(meta) = planner.active_meta() else {
            let empty =
                Paragraph::new("no catalog data").block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, area);
            return;
        };

        let tree_name = planner.active_weapon().tree_names()[tree];
        let points = planner.tree_points()[tree];
        let focused = tree == self.tree_focus;

        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let mut lines = Vec::new();
        let mut index = 0usize;
        let layout = meta.tree(tree);

        for row in layout.row_order() {
            let mut spans = vec![Span::styled(
                format!(" {row:>2} "),
                Style::default().fg(Color::DarkGray),
            )];
            for &skill_index in layout.row(row) {
                let skill = meta.skill_at(skill_index);
                spans.push(self.node_span(planner, meta, skill, focused, index));
                spans.push(Span::raw(" "));
                index += 1;
            }
            lines.push(Line::from(spans));
        }

        if !layout.ultimates().is_empty() {
            lines.push(Line::default());
            let mut spans = vec![Span::styled("  ◆ ", Style::default().fg(Color::Magenta))];
            for &skill_index in layout.ultimates() {
                let skill = meta.skill_at(skill_index);
                spans.push(self.node_span(planner, meta, skill, focused, index));
                spans.push(Span::raw(" "));
                index += 1;
            }
            lines.push(Line::from(spans));
        }

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {tree_name} [{points}] ")),
        );
        frame.render_widget(panel, area);
    }

    fn node_span<'a>(
        &self,
        planner: &Planner,
        meta: &WeaponMeta,
        skill: &'a Skill,
        focused: bool,
        index: usize,
    ) -> Span<'a> {
        let state = planner.state().node_state(skill, meta);
        let (marker, color) = match state {
            NodeState::Selected => ("●", Color::Green),
            NodeState::Selectable => ("○", Color::Cyan),
            NodeState::Locked => ("·", Color::DarkGray),
        };

        let mut style = Style::default().fg(color);
        // Slottable abilities render heavier than passives
        if skill.slottable {
            style = style.add_modifier(Modifier::BOLD);
        }
        if skill.unlock_default {
            style = style.add_modifier(Modifier::DIM);
        }
        if focused && index == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Span::styled(format!("{marker} {}", skill.name), style)
    }

    fn render_detail(&self, frame: &mut Frame, planner: &Planner, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Ability ");

        let (Some(skill), Some(meta)) = (self.cursor_skill(planner), planner.active_meta())
        else {
            frame.render_widget(Paragraph::new("").block(block), area);
            return;
        };

        let cooldown = if skill.cooldown > 0.0 {
            format!("Cooldown: {}s", skill.cooldown)
        } else {
            "Passive".to_string()
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    skill.name.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(cooldown, Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(skill.description.clone()),
        ];

        if let Some(parent) = skill.prerequisite.as_deref().and_then(|id| meta.get(id)) {
            lines.push(Line::from(Span::styled(
                format!("Requires: {}", parent.name),
                Style::default().fg(Color::Red),
            )));
        }

        let dependents = meta.dependents(&skill.id);
        if !dependents.is_empty() {
            let names: Vec<&str> = dependents.iter().map(|s| s.name.as_str()).collect();
            lines.push(Line::from(Span::styled(
                format!("Unlocks: {}", names.join(", ")),
                Style::default().fg(Color::Green),
            )));
        }

        let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        frame.render_widget(detail, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let help =
            Paragraph::new(" [/] weapon  Tab tree  j/k move  Enter toggle  r reset  q quit")
                .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
