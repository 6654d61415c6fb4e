// SPDX-License-Identifier: MPL-2.0
//! Boot screen shown while the boot pipeline runs.
//!
//! The screen owns the [`BootState`], the tip deck and every task it
//! started. Dropping it cancels the pipeline and aborts its timers, so no
//! boot update can arrive after the portfolio has taken over.

use crate::app::config::defaults::MILESTONE_FLASH_MS;
use crate::app::i18n::fluent::I18n;
use crate::boot::{self, BootState, BootUpdate, CancellationToken, Effect, LivePipeline, TipDeck};
use crate::content::TIPS;
use crate::domain::boot::Milestone;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use fluent_bundle::FluentValue;
use iced::futures::channel::mpsc;
use iced::futures::SinkExt;
use iced::widget::{progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, stream, task, Color, Element, Length, Task, Theme};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Message {
    /// An update from the running pipeline.
    Update(BootUpdate),
    /// Tip rotation timer fired.
    RotateTip,
    /// A milestone flash has run its course.
    ClearFlash(Milestone),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The pipeline completed; the portfolio may be shown.
    Completed,
}

pub struct BootScreen {
    state: BootState,
    deck: TipDeck,
    token: CancellationToken,
    tasks: Vec<task::Handle>,
}

impl std::fmt::Debug for BootScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootScreen")
            .field("state", &self.state)
            .field("running_tasks", &self.tasks.len())
            .finish()
    }
}

impl BootScreen {
    /// Creates the screen and starts `pipeline`.
    pub fn start(pipeline: LivePipeline) -> (Self, Task<Message>) {
        let mut screen = Self::idle();
        let task = pipeline_task(Arc::new(pipeline), screen.token.clone()).map(Message::Update);
        let task = screen.track(task);
        (screen, task)
    }

    /// A screen with no pipeline attached, stuck at 0%.
    fn idle() -> Self {
        let deck = TipDeck::shuffled(TIPS.len());
        Self {
            state: BootState::new(deck.current().unwrap_or(0)),
            deck,
            token: CancellationToken::default(),
            tasks: Vec::new(),
        }
    }

    /// A screen that failed before the pipeline could be built.
    #[must_use]
    pub fn failed(error: boot::BootError) -> Self {
        let mut screen = Self::idle();
        screen.state.apply(BootUpdate::Failed(error));
        screen
    }

    #[must_use]
    pub fn state(&self) -> &BootState {
        &self.state
    }

    /// Whether tip rotation should keep running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.state.is_completed()
    }

    pub fn update(&mut self, message: Message) -> (Task<Message>, Event) {
        let effect = match message {
            Message::Update(update) => self.state.apply(update),
            Message::ClearFlash(milestone) => self.state.clear_flash(milestone),
            Message::RotateTip => {
                if let Some(index) = self.deck.advance() {
                    self.state.rotate_tip(index);
                }
                Effect::None
            }
        };

        match effect {
            Effect::None => (Task::none(), Event::None),
            Effect::StartFlash(milestone) => {
                let timer = Task::perform(
                    async { tokio::time::sleep(Duration::from_millis(MILESTONE_FLASH_MS)).await },
                    move |()| Message::ClearFlash(milestone),
                );
                (self.track(timer), Event::None)
            }
            Effect::Complete => (Task::none(), Event::Completed),
        }
    }

    /// Makes `task` abortable and ties its lifetime to this screen.
    fn track(&mut self, task: Task<Message>) -> Task<Message> {
        let (task, handle) = task.abortable();
        self.tasks.push(handle.abort_on_drop());
        task
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let state = &self.state;
        let fade = if state.is_exiting() {
            opacity::MUTED
        } else {
            opacity::FULL
        };

        let progress = state.progress();
        let percent = i18n.tr_with_args(
            "boot-progress",
            &[("percent", FluentValue::from(progress.rounded()))],
        );

        let bar = Container::new(progress_bar(0.0..=1.0, progress.as_fraction()))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::BOOT_PROGRESS_HEIGHT));

        let milestones = Milestone::ALL.iter().fold(
            Row::new().spacing(spacing::SM),
            |row, milestone| {
                let reached = milestone.is_hit(progress);
                let flashing = state.flashing() == Some(*milestone);
                let label = Text::new(i18n.tr(milestone_key(*milestone))).size(typography::CAPTION);
                row.push(
                    Container::new(label)
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::container::milestone(reached, flashing)),
                )
            },
        );

        let failed = state.is_failed();
        let status = Text::new(i18n.tr(state.status().i18n_key()))
            .size(typography::BODY)
            .style(move |theme: &Theme| {
                let colors = ColorScheme::for_theme(theme);
                text::Style {
                    color: Some(faded(
                        if failed { colors.error } else { colors.text_secondary },
                        fade,
                    )),
                }
            });

        let panel = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("boot-title")).size(typography::TITLE_MD))
            .push(bar)
            .push(
                Row::new()
                    .align_y(alignment::Vertical::Center)
                    .push(Container::new(milestones).width(Length::Fill))
                    .push(Text::new(percent).size(typography::BODY_SM)),
            )
            .push(status)
            .push(self.view_tip(i18n));

        let card = Container::new(panel)
            .width(Length::Fixed(sizing::BOOT_PANEL_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::card);

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::page)
            .into()
    }

    fn view_tip<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let Some(tip) = TIPS.get(self.state.tip_index()) else {
            return Column::new().into();
        };

        let heading = format!("{} · {}", i18n.tr("boot-tip-heading"), i18n.tr(tip.tag_key));

        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(heading)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(ColorScheme::for_theme(theme).accent),
                    }),
            )
            .push(Text::new(i18n.tr(tip.text_key)).size(typography::BODY_SM))
            .into()
    }
}

impl Drop for BootScreen {
    fn drop(&mut self) {
        boot::cancel(&self.token);
    }
}

fn milestone_key(milestone: Milestone) -> &'static str {
    match milestone {
        Milestone::Connected => "boot-milestone-connected",
        Milestone::Validated => "boot-milestone-validated",
        Milestone::Preloaded => "boot-milestone-preloaded",
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Runs the pipeline on the Iced executor, forwarding each update as a stream item.
fn pipeline_task(pipeline: Arc<LivePipeline>, token: CancellationToken) -> Task<BootUpdate> {
    Task::run(
        stream::channel(100, move |mut output: mpsc::Sender<BootUpdate>| async move {
            let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();

            let run = pipeline.run(&token, move |update| {
                if sender.send(update).is_err() {
                    log::debug!("Boot update dropped: receiver closed");
                }
            });
            let forward = async {
                while let Some(update) = receiver.recv().await {
                    if output.send(update).await.is_err() {
                        break;
                    }
                }
            };

            let (outcome, ()) = tokio::join!(run, forward);
            log::debug!("Boot task finished: {outcome:?}");
        }),
        |update: BootUpdate| update,
    )
}
