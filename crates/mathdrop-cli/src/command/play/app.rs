use crossterm::event::{Event, KeyCode};
use mathdrop_engine::{
    AnswerOutcome, ColorField, DropOutcome, GRID_SIZE, GameSeed, GameSession, Grid, Position,
    SessionController, SessionState,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::Style,
    text::Line,
    widgets::Block as BlockWidget,
};

use crate::{
    command::play::answer_input::AnswerInput,
    tui::App,
    ui::widgets::{ChallengeDisplay, GridDisplay, HelpDisplay, StatusDisplay, style},
};

#[derive(Debug)]
struct Message {
    text: String,
    style: Style,
}

impl Message {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Interactive front end for one [`SessionController`].
#[derive(Debug)]
pub struct PlayApp {
    controller: SessionController,
    cursor: Position,
    input: AnswerInput,
    message: Option<Message>,
    show_dots: bool,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(seed: Option<GameSeed>, show_dots: bool) -> Self {
        let mut controller = seed.map_or_else(SessionController::new, SessionController::with_seed);
        controller.init();
        Self {
            controller,
            cursor: Position::new(GRID_SIZE / 2, GRID_SIZE / 2),
            input: AnswerInput::new(),
            message: None,
            show_dots,
            is_exiting: false,
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.controller.session()
    }

    fn is_awaiting_answer(&self) -> bool {
        self.session()
            .is_some_and(|session| session.session_state().is_awaiting_answer())
    }

    fn move_cursor(&mut self, step: fn(Position) -> Option<Position>) {
        if let Some(cursor) = step(self.cursor) {
            self.cursor = cursor;
        }
    }

    fn select_cell(&mut self) {
        let outcome = self
            .controller
            .on_cell_selected(self.cursor.row(), self.cursor.col());
        self.message = Some(match outcome {
            DropOutcome::Placed(placement) => {
                if placement.game_over {
                    Message::new("Game over! Press r to reset.", style::ERROR)
                } else if let Some(challenge) = placement.challenge {
                    Message::new(format!("Challenge! {}", challenge.prompt()), style::WARNING)
                } else {
                    Message::new(format!("Placed {}.", placement.shape), style::INFO)
                }
            }
            DropOutcome::Rejected { shape, reason, .. } => {
                Message::new(format!("{shape} does not fit: {reason}."), style::WARNING)
            }
            DropOutcome::GameOverAlready => {
                Message::new("The game is over. Press r to reset.", style::ERROR)
            }
            DropOutcome::AwaitingAnswer => {
                Message::new("Answer the challenge first.", style::WARNING)
            }
        });
    }

    fn submit_answer(&mut self) {
        let answer = match self.input.value() {
            Ok(answer) => answer,
            Err(e) => {
                self.message = Some(Message::new(e.to_string(), style::ERROR));
                return;
            }
        };
        let outcome = self.controller.on_challenge_answered(answer);
        self.message = match outcome {
            AnswerOutcome::NoChallenge => None,
            AnswerOutcome::Unanswered => {
                Some(Message::new("Type an answer, then press Enter.", style::WARNING))
            }
            AnswerOutcome::Correct => Some(Message::new("Correct! Keep going.", style::SUCCESS)),
            AnswerOutcome::Failed { expected } => Some(Message::new(
                format!("Wrong! The answer was {expected}. The game has been reset."),
                style::ERROR,
            )),
        };
        if !outcome.is_unanswered() {
            self.input.clear();
        }
    }

    fn reset(&mut self) {
        self.controller.reset();
        self.input.clear();
        self.message = Some(Message::new("Game reset.", style::INFO));
    }

    fn quit_session(&mut self) {
        self.controller.quit();
        self.input.clear();
        self.message = Some(Message::new(
            "Game ended. Select a cell to start a new one.",
            style::INFO,
        ));
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(event) = event.as_key_press_event() else {
            return;
        };

        if self.is_awaiting_answer() {
            match event.code {
                KeyCode::Char(ch @ ('0'..='9' | '-')) => {
                    self.input.push(ch);
                    return;
                }
                KeyCode::Backspace => {
                    self.input.pop();
                    return;
                }
                KeyCode::Enter => {
                    self.submit_answer();
                    return;
                }
                _ => {}
            }
        }

        match event.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(Position::left),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(Position::down),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(Position::up),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(Position::right),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_cell(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('q') => self.quit_session(),
            KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let session = self.session();

        let (title, border) = match session.map(GameSession::session_state) {
            Some(SessionState::Playing) => (" MATHDROP ", style::PLAYING_BORDER),
            Some(SessionState::AwaitingAnswer(_)) => (" CHALLENGE ", style::CHALLENGE_BORDER),
            Some(SessionState::GameOver) => (" GAME OVER ", style::GAME_OVER_BORDER),
            None => (" NO GAME ", style::NO_SESSION_BORDER),
        };
        let (grid, colors) = session.map_or((&Grid::EMPTY, &ColorField::WHITE), |session| {
            (session.grid(), session.colors())
        });
        let grid_display = GridDisplay::new(grid, colors)
            .cursor(self.cursor)
            .show_dots(self.show_dots)
            .block(BlockWidget::bordered().title(title).border_style(border));
        let status_display =
            StatusDisplay::new(session).block(BlockWidget::bordered().title(" STATUS "));

        let main_height = grid_display.height().max(status_display.height());
        let [main_area, message_area, help_area] = frame.area().layout(&Layout::vertical([
            Constraint::Length(main_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ]));
        let [grid_area, status_area] = main_area.layout(
            &Layout::horizontal([
                Constraint::Length(grid_display.width()),
                Constraint::Length(status_display.width()),
            ])
            .flex(Flex::Center)
            .spacing(1),
        );
        let [grid_area] =
            grid_area.layout(&Layout::vertical([Constraint::Length(grid_display.height())]));
        let [status_area] =
            status_area.layout(&Layout::vertical([Constraint::Length(status_display.height())]));

        frame.render_widget(&grid_display, grid_area);
        frame.render_widget(status_display, status_area);

        if let Some(challenge) = session.and_then(GameSession::pending_challenge) {
            let challenge_display = ChallengeDisplay::new(challenge, self.input.as_str()).block(
                BlockWidget::bordered()
                    .title(" QUESTION ")
                    .border_style(style::CHALLENGE_BORDER),
            );
            let popup_area = challenge_display.popup_area(frame.area());
            frame.render_widget(challenge_display, popup_area);
        }

        if let Some(message) = &self.message {
            frame.render_widget(
                Line::styled(message.text.as_str(), message.style).centered(),
                message_area,
            );
        }
        frame.render_widget(
            HelpDisplay::new(session.map(GameSession::session_state)),
            help_area,
        );
    }
}
