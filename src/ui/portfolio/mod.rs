// SPDX-License-Identifier: MPL-2.0
//! Portfolio screen, shown once the boot sequence completes.
//!
//! A single scrollable page with a sticky header. The header links snap the
//! page to a section and highlight the section currently in view; a thin bar
//! above the header shows how far the page has been scrolled.
//!
//! Section positions are fixed relative scroll offsets following the page's
//! block order, not measured from layout. Snapping lands near a section's top
//! edge and drifts when a block grows or shrinks, so keep the anchors in step
//! with the content in `crate::content`.
//!
//! The stat counters stay at zero until the stats block first scrolls into
//! view, then count up once.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
pub mod stats;

use crate::app::i18n::fluent::I18n;
use crate::application::port::{ContactError, ContactResponse, ContactSender};
use crate::contact::{ContactForm, Field};
use crate::content::{PROJECTS, STATS};
use crate::infrastructure::assets::embedded_bytes;
use crate::infrastructure::HttpContactSender;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, progress_bar, Column, Container, Id, Scrollable};
use iced::{Element, Length, Task};
use stats::StatCounter;
use std::time::{Duration, Instant};

/// Identifier of the page scrollable.
const SCROLLABLE_ID: &str = "portfolio-page";

/// How close to a section's anchor the page must be for the section to count as in view.
const ACTIVE_TOLERANCE: f32 = 0.05;

/// Relative scroll offset of the stats block, between About and Projects.
const STATS_ANCHOR: f32 = 0.375;

/// Whether the stats block is in view at relative scroll offset `offset`.
fn stats_in_view(offset: f32) -> bool {
    (STATS_ANCHOR - ACTIVE_TOLERANCE..=Section::Projects.anchor()).contains(&offset)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Relative vertical scroll offset at which the section starts.
    #[must_use]
    pub fn anchor(self) -> f32 {
        match self {
            Section::Home => 0.0,
            Section::About => 0.25,
            Section::Projects => 0.5,
            Section::Contact => 1.0,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Projects => "nav-projects",
            Section::Contact => "nav-contact",
        }
    }

    /// Section in view at relative scroll offset `offset`.
    #[must_use]
    pub fn at(offset: f32) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|section| offset + ACTIVE_TOLERANCE >= section.anchor())
            .unwrap_or(Section::Home)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
    Scrolled(f32),
    ToggleTheme,
    Edit(Field, String),
    Submit,
    Submitted(Result<ContactResponse, ContactError>),
    CopyLink(&'static str),
    Tick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ToggleTheme,
    LinkCopied,
}

/// Contextual data needed to render the portfolio.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
}

#[derive(Debug)]
pub struct Portfolio {
    /// When the stats block first came into view.
    stats_started: Option<Instant>,
    now: Instant,
    counters: Vec<StatCounter>,
    /// Relative vertical scroll offset in `[0, 1]`.
    scroll: f32,
    contact: ContactForm,
    sender: HttpContactSender,
    previews: Vec<Option<Handle>>,
}

impl Portfolio {
    #[must_use]
    pub fn new(sender: HttpContactSender) -> Self {
        let previews = PROJECTS
            .iter()
            .map(|project| {
                let bytes = embedded_bytes(project.image);
                if bytes.is_none() {
                    log::warn!("Missing project preview: {}", project.image);
                }
                bytes.map(|bytes| Handle::from_bytes(bytes.into_owned()))
            })
            .collect();

        Self {
            stats_started: None,
            now: Instant::now(),
            counters: STATS.iter().copied().map(StatCounter::new).collect(),
            scroll: 0.0,
            contact: ContactForm::new(),
            sender,
            previews,
        }
    }

    #[must_use]
    pub fn active_section(&self) -> Section {
        Section::at(self.scroll)
    }

    /// Scroll progress in percent.
    #[must_use]
    pub fn scroll_percent(&self) -> f32 {
        self.scroll * 100.0
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Whether the stats block has been scrolled into view at least once.
    #[must_use]
    pub fn stats_started(&self) -> bool {
        self.stats_started.is_some()
    }

    /// Time since the counters started, zero before the stats block was seen.
    fn elapsed(&self) -> Duration {
        self.stats_started
            .map_or(Duration::ZERO, |start| self.now.saturating_duration_since(start))
    }

    /// Whether the stat counters still need frame ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        if self.stats_started.is_none() {
            return false;
        }
        let elapsed = self.elapsed();
        self.counters
            .iter()
            .any(|counter| !counter.is_finished(elapsed))
    }

    fn scroll_to(&mut self, offset: f32, at: Instant) {
        self.scroll = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(0.0, 1.0)
        };
        if self.stats_started.is_none() && stats_in_view(self.scroll) {
            log::debug!("Stats in view at offset {:.2}, starting counters", self.scroll);
            self.stats_started = Some(at);
            self.now = at;
        }
    }

    pub fn update(&mut self, message: Message) -> (Task<Message>, Event) {
        match message {
            Message::Navigate(section) => {
                self.scroll_to(section.anchor(), Instant::now());
                let task = operation::snap_to(
                    Id::new(SCROLLABLE_ID),
                    RelativeOffset {
                        x: 0.0,
                        y: section.anchor(),
                    },
                );
                (task, Event::None)
            }
            Message::Scrolled(offset) => {
                self.scroll_to(offset, Instant::now());
                (Task::none(), Event::None)
            }
            Message::ToggleTheme => (Task::none(), Event::ToggleTheme),
            Message::Edit(field, value) => {
                self.contact.edit(field, value);
                (Task::none(), Event::None)
            }
            Message::Submit => {
                let Some(submission) = self.contact.begin_submit() else {
                    return (Task::none(), Event::None);
                };
                log::info!("Sending contact message to {}", self.sender.endpoint());
                let sender = self.sender.clone();
                let task = Task::perform(
                    async move { sender.send(&submission).await },
                    Message::Submitted,
                );
                (task, Event::None)
            }
            Message::Submitted(result) => {
                if let Err(ContactError::Transport(reason)) = &result {
                    log::warn!("Contact message not delivered: {reason}");
                }
                self.contact.finish(result);
                (Task::none(), Event::None)
            }
            Message::CopyLink(url) => (iced::clipboard::write(url.to_string()), Event::LinkCopied),
            Message::Tick(now) => {
                self.now = now;
                (Task::none(), Event::None)
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'_>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let page = Column::new()
            .spacing(spacing::SECTION)
            .padding([spacing::XXL, spacing::XL])
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(hero::view(i18n))
            .push(about::view(i18n))
            .push(stats::view(&self.counters, self.elapsed(), i18n))
            .push(projects::view(&self.previews, i18n))
            .push(contact::view(&self.contact, i18n))
            .push(footer::view(i18n));

        let scrollable = Scrollable::new(Container::new(page).center_x(Length::Fill))
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.relative_offset().y));

        let scroll_bar = Container::new(progress_bar(0.0..=100.0, self.scroll_percent()))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SCROLL_PROGRESS_HEIGHT));

        let body = Column::new()
            .push(scroll_bar)
            .push(header::view(self.active_section(), ctx.is_dark, i18n))
            .push(scrollable);

        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, PERCENT_EPSILON};

    fn portfolio() -> Portfolio {
        let client = reqwest::Client::new();
        Portfolio::new(HttpContactSender::new(client, "http://127.0.0.1:9/contact"))
    }

    #[test]
    fn section_at_follows_scroll_offset() {
        assert_eq!(Section::at(0.0), Section::Home);
        assert_eq!(Section::at(0.22), Section::About);
        assert_eq!(Section::at(0.6), Section::Projects);
        assert_eq!(Section::at(0.97), Section::Contact);
        assert_eq!(Section::at(1.0), Section::Contact);
    }

    #[test]
    fn each_anchor_activates_its_own_section() {
        for section in Section::ALL {
            assert_eq!(Section::at(section.anchor()), section);
        }
    }

    #[test]
    fn anchors_keep_page_order() {
        let anchors: Vec<f32> = Section::ALL.iter().copied().map(Section::anchor).collect();
        assert!(anchors.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(Section::About.anchor() < STATS_ANCHOR);
        assert!(STATS_ANCHOR < Section::Projects.anchor());
        assert_eq!(Section::at(STATS_ANCHOR), Section::About);
    }

    #[test]
    fn navigating_highlights_the_target() {
        let mut portfolio = portfolio();
        let (_task, event) = portfolio.update(Message::Navigate(Section::Projects));
        assert_eq!(event, Event::None);
        assert_eq!(portfolio.active_section(), Section::Projects);
    }

    #[test]
    fn scroll_progress_is_clamped() {
        let mut portfolio = portfolio();
        let (_task, _) = portfolio.update(Message::Scrolled(0.5));
        assert_abs_diff_eq!(portfolio.scroll_percent(), 50.0, epsilon = PERCENT_EPSILON);

        let (_task, _) = portfolio.update(Message::Scrolled(1.4));
        assert_abs_diff_eq!(portfolio.scroll_percent(), 100.0, epsilon = PERCENT_EPSILON);

        let (_task, _) = portfolio.update(Message::Scrolled(f32::NAN));
        assert_abs_diff_eq!(portfolio.scroll_percent(), 0.0, epsilon = PERCENT_EPSILON);
    }

    #[test]
    fn counters_wait_until_the_stats_block_is_reached() {
        let mut portfolio = portfolio();
        assert!(!portfolio.is_animating());

        let later = portfolio.now + Duration::from_millis(2100);
        let (_task, _) = portfolio.update(Message::Tick(later));

        assert!(!portfolio.stats_started());
        assert!(!portfolio.is_animating());
        assert_eq!(portfolio.elapsed(), Duration::ZERO);
        assert!(portfolio
            .counters
            .iter()
            .all(|counter| counter.value_at(portfolio.elapsed()) == 0));
    }

    #[test]
    fn scrolling_past_the_hero_does_not_start_counters() {
        let mut portfolio = portfolio();
        let (_task, _) = portfolio.update(Message::Scrolled(0.1));
        let (_task, _) = portfolio.update(Message::Navigate(Section::About));
        assert!(!portfolio.stats_started());
    }

    #[test]
    fn jumping_past_the_stats_block_does_not_start_counters() {
        let mut portfolio = portfolio();
        let (_task, _) = portfolio.update(Message::Navigate(Section::Contact));
        assert!(!portfolio.stats_started());
        assert!(!portfolio.is_animating());
    }

    #[test]
    fn counters_start_when_the_stats_block_scrolls_into_view() {
        let mut portfolio = portfolio();
        let (_task, _) = portfolio.update(Message::Scrolled(STATS_ANCHOR));

        assert!(portfolio.stats_started());
        assert!(portfolio.is_animating());
        assert_eq!(portfolio.elapsed(), Duration::ZERO);
    }

    #[test]
    fn counters_stop_animating_after_their_duration() {
        let mut portfolio = portfolio();
        let (_task, _) = portfolio.update(Message::Navigate(Section::Projects));
        assert!(portfolio.is_animating());

        let started = portfolio.now;
        let (_task, _) = portfolio.update(Message::Tick(started + Duration::from_millis(1000)));
        assert!(portfolio.is_animating());

        let (_task, _) = portfolio.update(Message::Tick(started + Duration::from_millis(2100)));
        assert!(!portfolio.is_animating());
        for (counter, stat) in portfolio.counters.iter().zip(STATS) {
            assert_eq!(counter.value_at(portfolio.elapsed()), stat.target);
        }
    }

    #[test]
    fn counters_start_only_once() {
        let mut portfolio = portfolio();
        let (_task, _) = portfolio.update(Message::Scrolled(0.4));
        let first = portfolio.stats_started;

        let (_task, _) = portfolio.update(Message::Scrolled(0.0));
        let (_task, _) = portfolio.update(Message::Scrolled(0.45));
        assert_eq!(portfolio.stats_started, first);
    }

    #[test]
    fn theme_toggle_and_copy_are_forwarded() {
        let mut portfolio = portfolio();
        assert_eq!(portfolio.update(Message::ToggleTheme).1, Event::ToggleTheme);
        assert_eq!(
            portfolio.update(Message::CopyLink(PROJECTS[0].url)).1,
            Event::LinkCopied
        );
    }

    #[test]
    fn invalid_email_never_starts_a_request() {
        let mut portfolio = portfolio();
        let (_task, _) = portfolio.update(Message::Edit(Field::Email, "nope".into()));
        let (_task, event) = portfolio.update(Message::Submit);
        assert_eq!(event, Event::None);
        assert!(!portfolio.contact().is_submitting());
    }

    #[test]
    fn every_project_has_a_preview() {
        assert!(portfolio().previews.iter().all(Option::is_some));
    }
}
