//! Main application: update logic, effects, and the run loop.
//!
//! The application follows a message/effect split: [`App::update`] is a
//! pure function from a [`Message`] to an optional [`Effect`], and
//! [`App::perform`] executes effects against the API client and applies
//! their outcomes. All network access flows through effects, which keeps
//! the update logic synchronous and testable.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{error, info};

use taskboard_api::TaskClient;
use taskboard_config::{Config, RefreshBehavior};
use taskboard_protocol::{Filter, Message, NewTask, TaskId};

use crate::event::{InputMode, event_to_message, poll_event};
use crate::layout::{FILTER_BAR_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT};
use crate::state::{AppState, StatusLine};
use crate::terminal::AppTerminal;
use crate::widgets::{
    render_confirm_prompt, render_filter_bar, render_form, render_help_overlay, render_status_bar,
    render_task_list,
};

/// A side effect produced by [`App::update`].
///
/// Every variant maps onto exactly one API request. Mutations chain a
/// refresh of the configured view when they succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the given filter view.
    Fetch(Filter),
    /// Create a task from a validated draft.
    Create(NewTask),
    /// Set the completion state of a task.
    SetCompleted {
        /// Id of the task to update.
        id: TaskId,
        /// The new completion state.
        completed: bool,
    },
    /// Delete a task after confirmation.
    Delete(TaskId),
}

/// The taskboard application.
pub struct App {
    /// The current application state.
    pub state: AppState,
    /// The loaded configuration.
    config: Config,
    /// Set when the application should exit its run loop.
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            state: AppState::new(),
            config,
            should_quit: false,
        }
    }

    /// Returns whether the run loop should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current input mode, derived from the UI state.
    ///
    /// Overlays take precedence in their stacking order: help above the
    /// confirmation prompt above the form above the board.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.state.help_visible {
            InputMode::Help
        } else if self.state.pending_delete.is_some() {
            InputMode::ConfirmDelete
        } else if self.state.form.is_some() {
            InputMode::Form
        } else {
            InputMode::Board
        }
    }

    /// Applies a message to the application state.
    ///
    /// Returns the effect to perform, if the message calls for one. This
    /// function never touches the network; invalid input (for example an
    /// empty form title) resolves synchronously into a status message and
    /// no effect.
    pub fn update(&mut self, message: Message) -> Option<Effect> {
        match message {
            Message::Quit => {
                self.should_quit = true;
                None
            }

            Message::ToggleHelp => {
                self.state.help_visible = !self.state.help_visible;
                None
            }

            Message::NavigateUp => {
                self.state.navigate_up();
                None
            }
            Message::NavigateDown => {
                self.state.navigate_down();
                None
            }

            Message::ShowFilter { filter } => Some(Effect::Fetch(filter)),
            Message::Refresh => Some(Effect::Fetch(self.state.active_filter)),

            Message::ToggleComplete => {
                let task = self.state.selected_task()?;
                Some(Effect::SetCompleted {
                    id: task.id,
                    completed: !task.completed,
                })
            }

            Message::RequestDelete => {
                self.state.pending_delete = Some(self.state.selected_task()?.id);
                None
            }
            Message::ConfirmDelete => self.state.pending_delete.take().map(Effect::Delete),
            Message::CancelDelete => {
                self.state.pending_delete = None;
                None
            }

            Message::OpenForm => {
                self.state.form = Some(crate::form_state::FormState::new());
                self.state.status = None;
                None
            }

            Message::FormInput { ch } => {
                if let Some(form) = &mut self.state.form {
                    form.input_char(ch);
                }
                None
            }
            Message::FormBackspace => {
                if let Some(form) = &mut self.state.form {
                    form.backspace();
                }
                None
            }
            Message::FormNextField => {
                if let Some(form) = &mut self.state.form {
                    form.next_field();
                }
                None
            }
            Message::FormPrevField => {
                if let Some(form) = &mut self.state.form {
                    form.prev_field();
                }
                None
            }
            Message::FormSubmit => {
                let form = self.state.form.as_ref()?;
                match form.draft() {
                    Ok(draft) => Some(Effect::Create(draft)),
                    Err(err) => {
                        // Validation failures never reach the network;
                        // the form contents stay in place for correction.
                        self.state.status = Some(StatusLine::error(err.to_string()));
                        None
                    }
                }
            }

            Message::Escape => {
                if self.state.form.is_some() {
                    self.state.form = None;
                } else {
                    self.state.clear_selection();
                    self.state.status = None;
                }
                None
            }
        }
    }

    /// Performs an effect against the API client and applies its outcome.
    ///
    /// Every failure collapses into a one-line status message; no error
    /// detail reaches the user beyond the operation that failed.
    /// Successful mutations chain a refresh of the configured view.
    pub async fn perform(&mut self, client: &TaskClient, effect: Effect) {
        match effect {
            Effect::Fetch(filter) => {
                self.fetch(client, filter).await;
            }

            Effect::Create(draft) => match client.create(&draft).await {
                Ok(()) => {
                    // Only a confirmed creation clears the form
                    self.state.form = None;
                    info!(title = %draft.title, "task created");
                    self.refresh_after_mutation(client, "Task added").await;
                }
                Err(err) => {
                    error!(%err, "task creation failed");
                    self.state.status = Some(StatusLine::error("Failed to add task"));
                }
            },

            Effect::SetCompleted { id, completed } => {
                match client.set_completed(id, completed).await {
                    Ok(()) => {
                        info!(id, completed, "task completion updated");
                        self.refresh_after_mutation(client, "Task updated").await;
                    }
                    Err(err) => {
                        error!(%err, id, "task update failed");
                        self.state.status = Some(StatusLine::error("Failed to update task"));
                    }
                }
            }

            Effect::Delete(id) => match client.delete(id).await {
                Ok(()) => {
                    info!(id, "task deleted");
                    self.refresh_after_mutation(client, "Task deleted").await;
                }
                Err(err) => {
                    error!(%err, id, "task deletion failed");
                    self.state.status = Some(StatusLine::error("Failed to delete task"));
                }
            },
        }
    }

    /// Fetches a filter view and replaces the displayed tasks.
    ///
    /// On success the status line is cleared; on failure the task list is
    /// left untouched and a fetch error is reported.
    async fn fetch(&mut self, client: &TaskClient, filter: Filter) {
        match client.list(filter).await {
            Ok(tasks) => {
                self.state.set_tasks(filter, tasks);
                self.state.status = None;
            }
            Err(err) => {
                error!(%err, ?filter, "task fetch failed");
                self.state.status = Some(StatusLine::error("Failed to fetch tasks"));
            }
        }
    }

    /// Refreshes the configured view after a successful mutation.
    ///
    /// The success message only shows when the chained refresh itself
    /// succeeded; a fetch failure takes precedence.
    async fn refresh_after_mutation(&mut self, client: &TaskClient, success: &str) {
        self.fetch(client, self.refresh_target()).await;
        if self.state.status.is_none() {
            self.state.status = Some(StatusLine::info(success));
        }
    }

    /// The filter view a successful mutation refreshes.
    fn refresh_target(&self) -> Filter {
        match self.config.refresh {
            RefreshBehavior::ActiveFilter => self.state.active_filter,
            RefreshBehavior::AllTasks => Filter::All,
        }
    }

    /// Runs the application until the user quits.
    ///
    /// The initial render fetches the unfiltered view, mirroring a page
    /// load; afterwards the loop alternates drawing, polling for input,
    /// and performing the effects the input produces.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or event polling fails. API failures do
    /// not abort the loop; they surface in the status bar.
    pub async fn run(&mut self, terminal: &mut AppTerminal, client: &TaskClient) -> anyhow::Result<()> {
        self.perform(client, Effect::Fetch(Filter::All)).await;

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if let Some(event) = poll_event()?
                && let Some(message) = event_to_message(&event, self.input_mode())
                && let Some(effect) = self.update(message)
            {
                self.perform(client, effect).await;
            }
        }
        Ok(())
    }

    /// Renders the whole UI into the given frame.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            frame.render_widget(
                Paragraph::new("Terminal too small").style(Style::default().fg(Color::Red)),
                area,
            );
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

        self.render_header(rows[0], frame);
        let buf = frame.buffer_mut();
        render_filter_bar(self.state.active_filter, rows[1], buf);
        render_task_list(&self.state.tasks, self.state.selected, rows[2], buf);
        render_status_bar(self.state.status.as_ref(), rows[3], buf);

        if let Some(form) = &self.state.form {
            render_form(form, area, buf);
        }
        if let Some(id) = self.state.pending_delete {
            let title = self
                .state
                .tasks
                .iter()
                .find(|task| task.id == id)
                .map_or("", |task| task.title.as_str());
            render_confirm_prompt(title, area, buf);
        }
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    fn render_header(&self, area: Rect, frame: &mut Frame) {
        let title = Span::styled(
            " Taskboard ",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(
            Paragraph::new(title).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
            area,
        );
    }
}
