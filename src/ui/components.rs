//! Panels for the terminal interface

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph};
use ratatui::Frame;

use super::{Phase, Progress};

/// Status panel showing the current phase, the source/target line, and a
/// running warning count
pub struct StatusPanel {
    phase: Phase,
    info: String,
    warnings: u64,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self {
            phase: Phase::Reading,
            info: String::new(),
            warnings: 0,
        }
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }

    pub fn count_warning(&mut self) {
        self.warnings += 1;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let phase_style = match self.phase {
            Phase::Complete => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            _ => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        };

        let phase_indicator = match self.phase {
            Phase::Reading => "◐",
            Phase::Preparing => "⚙",
            Phase::Loading => "↧",
            Phase::Verifying => "?",
            Phase::Complete => "✓",
        };

        let mut header = vec![
            Span::styled(format!(" {} ", phase_indicator), phase_style),
            Span::styled(self.phase.to_string(), phase_style),
        ];
        if self.warnings > 0 {
            header.push(Span::styled(
                format!("   {} warning(s)", self.warnings),
                Style::default().fg(Color::Yellow),
            ));
        }

        let lines = vec![
            Line::from(header),
            Line::from(""),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(&self.info, Style::default().fg(Color::Gray)),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Manufacturing Indicators Migration ")
            .border_style(Style::default().fg(Color::Blue));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Row-progress gauge
pub struct ProgressPanel {
    progress: Option<Progress>,
}

impl ProgressPanel {
    pub fn new() -> Self {
        Self { progress: None }
    }

    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = Some(progress);
    }

    pub fn clear(&mut self) {
        self.progress = None;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::Blue));

        match &self.progress {
            Some(progress) => {
                let label = if progress.total > 0 {
                    format!(
                        "{}/{} {} ({:.0}%)",
                        progress.current,
                        progress.total,
                        progress.label,
                        progress.ratio() * 100.0
                    )
                } else {
                    progress.label.clone()
                };

                let gauge = Gauge::default()
                    .block(block)
                    .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
                    .ratio(progress.ratio().min(1.0))
                    .label(label);

                frame.render_widget(gauge, area);
            }
            None => {
                frame.render_widget(Paragraph::new("").block(block), area);
            }
        }
    }
}

/// Scrollable activity log; warnings render highlighted
pub struct ActivityPanel {
    entries: Vec<String>,
    max_entries: usize,
}

impl ActivityPanel {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: 200,
        }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Activity ")
            .border_style(Style::default().fg(Color::Blue));

        let visible_height = area.height.saturating_sub(2) as usize; // -2 for borders
        let start = self.entries.len().saturating_sub(visible_height);

        let items: Vec<ListItem> = self.entries[start..]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if entry.starts_with("warning") {
                    Style::default().fg(Color::Yellow)
                } else if i == self.entries.len() - start - 1 {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(Span::styled(format!(" {}", entry), style))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}
