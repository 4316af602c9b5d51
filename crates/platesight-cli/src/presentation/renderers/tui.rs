//! Dashboard renderer.
//!
//! `DashboardApp` owns UI state only (active tab, form focus, fetch
//! lifecycle); it never performs I/O itself. Submissions surface as a
//! `PendingFetch` the event loop picks up, and resolutions come back in as
//! `FetchEvent`s. That keeps the whole state machine synchronous and
//! testable without a terminal or a network.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
    Frame,
};
use tracing::debug;

use crate::presentation::form::FormState;
use crate::presentation::gate::{ActiveTab, SubmissionGate};
use crate::presentation::mapper::map_response;
use crate::presentation::views::{
    BreakdownView, FeedbackView, FormView, InsightView, ProfileSummaryView, PromoView, RatingView,
    SuccessView,
};
use platesight_client::{FetchGate, FetchState};
use platesight_types::{BusinessProfile, UnifiedResponse};

/// Resolution of a dispatched fetch, tagged with its generation.
#[derive(Debug)]
pub enum FetchEvent {
    Resolved {
        generation: u64,
        outcome: Result<UnifiedResponse, String>,
    },
}

/// A submission waiting for the event loop to dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    pub generation: u64,
    pub profile: BusinessProfile,
}

pub struct DashboardApp {
    gate: SubmissionGate,
    form: FormState,
    result: FetchState,
    fetch_gate: FetchGate,
    snapshot: Option<BusinessProfile>,
    pending: Option<PendingFetch>,
    should_quit: bool,
}

impl DashboardApp {
    pub fn new() -> Self {
        Self {
            gate: SubmissionGate::new(),
            form: FormState::new(),
            result: FetchState::Loading,
            fetch_gate: FetchGate::new(),
            snapshot: None,
            pending: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn gate(&self) -> &SubmissionGate {
        &self.gate
    }

    pub fn result(&self) -> &FetchState {
        &self.result
    }

    /// Hand the queued submission to the event loop, if any.
    pub fn take_pending_fetch(&mut self) -> Option<PendingFetch> {
        self.pending.take()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.gate.active() {
            ActiveTab::Form => self.handle_form_key(key),
            ActiveTab::Result => self.handle_result_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Right => {
                // Ignored while the gate is locked.
                self.gate.select(ActiveTab::Result);
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.insert_char(c),
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Tab | KeyCode::BackTab => {
                self.gate.select(ActiveTab::Form);
            }
            _ => {}
        }
    }

    /// Validation-passing submissions flip the gate, invalidate the previous
    /// request generation, and queue the fetch. Blocked ones only mark the
    /// form.
    fn submit(&mut self) {
        let Some(profile) = self.form.submit() else {
            return;
        };

        self.gate.submit();
        self.result = FetchState::Loading;
        let generation = self.fetch_gate.begin();
        self.snapshot = Some(profile.clone());
        self.pending = Some(PendingFetch {
            generation,
            profile,
        });
    }

    pub fn apply_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Resolved {
                generation,
                outcome,
            } => {
                if !self.fetch_gate.accepts(generation) {
                    debug!(generation, "discarding stale fetch resolution");
                    return;
                }
                self.result = match outcome {
                    Ok(response) => FetchState::Ready(response),
                    Err(reason) => FetchState::Unavailable(reason),
                };
            }
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(f.area());

        self.render_tabs(chunks[0], f);
        match self.gate.active() {
            ActiveTab::Form => f.render_widget(FormView::new(&self.form), chunks[1]),
            ActiveTab::Result => self.render_result(chunks[1], f),
        }
    }

    fn render_tabs(&self, area: Rect, f: &mut Frame) {
        let result_style = if self.gate.result_unlocked() {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let tabs = Tabs::new(vec![
            Line::from("Form"),
            Line::styled("Result", result_style),
        ])
        .select(match self.gate.active() {
            ActiveTab::Form => 0,
            ActiveTab::Result => 1,
        })
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        f.render_widget(tabs, area);
    }

    fn render_result(&self, area: Rect, f: &mut Frame) {
        match (&self.result, &self.snapshot) {
            (FetchState::Loading, _) => {
                let paragraph = Paragraph::new(Line::from(Span::styled(
                    "Hold on... we're spicing up your predictions!",
                    Style::default().add_modifier(Modifier::DIM),
                )))
                .block(Block::default().borders(Borders::ALL));
                f.render_widget(paragraph, area);
            }
            (FetchState::Unavailable(reason), _) => {
                let lines = vec![
                    Line::from(Span::styled(
                        "Could not load models!",
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Please ensure you have access to the models API",
                        Style::default().fg(Color::Red),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        reason.clone(),
                        Style::default().add_modifier(Modifier::DIM),
                    )),
                ];
                let panel =
                    Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
                f.render_widget(panel, area);
            }
            (FetchState::Ready(response), Some(snapshot)) => {
                // ViewState is recomputed from the response on every render.
                let vm = map_response(snapshot, response);
                let rows = Layout::vertical([
                    Constraint::Length(9),
                    Constraint::Min(8),
                    Constraint::Length(4),
                ])
                .split(area);

                let top = Layout::horizontal([
                    Constraint::Percentage(28),
                    Constraint::Percentage(24),
                    Constraint::Percentage(24),
                    Constraint::Percentage(24),
                ])
                .split(rows[0]);
                ProfileSummaryView::new(&vm.profile).render(top[0], f.buffer_mut());
                FeedbackView::new(&vm.feedback).render(top[1], f.buffer_mut());
                SuccessView::new(&vm.success).render(top[2], f.buffer_mut());
                RatingView::new(&vm.rating).render(top[3], f.buffer_mut());

                let middle =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .split(rows[1]);
                BreakdownView::new("Best Cities", &vm.city).render(middle[0], f.buffer_mut());
                BreakdownView::new("Best Months", &vm.month).render(middle[1], f.buffer_mut());

                let bottom =
                    Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                        .split(rows[2]);
                InsightView::new(&vm.insight).render(bottom[0], f.buffer_mut());
                PromoView.render(bottom[1], f.buffer_mut());
            }
            (FetchState::Ready(_), None) => {
                // Unreachable in practice: Ready implies a submitted snapshot.
            }
        }
    }
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::new()
    }
}
