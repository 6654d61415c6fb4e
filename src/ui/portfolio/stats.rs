// SPDX-License-Identifier: MPL-2.0
//! Animated headline numbers.

use crate::app::config::defaults::STATS_COUNT_DURATION_MS;
use crate::app::i18n::fluent::I18n;
use crate::content::Stat;
use crate::domain::boot::Ramp;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Duration;

/// Counts a [`Stat`] up from zero with an ease-out curve.
///
/// Intermediate values are floored so the counter never shows a number it
/// has not reached; the last frame shows exactly the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCounter {
    stat: Stat,
    ramp: Ramp,
}

impl StatCounter {
    #[must_use]
    pub fn new(stat: Stat) -> Self {
        Self::with_duration(stat, Duration::from_millis(STATS_COUNT_DURATION_MS))
    }

    #[must_use]
    pub fn with_duration(stat: Stat, duration: Duration) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let ramp = Ramp::new(0.0, stat.target as f32, duration);
        Self { stat, ramp }
    }

    #[must_use]
    pub fn stat(&self) -> Stat {
        self.stat
    }

    /// Displayed value `elapsed` after the counter started.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> u32 {
        let sample = self.ramp.sample(elapsed);
        if sample.finished {
            self.stat.target
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let value = sample.value.floor().max(0.0) as u32;
            value.min(self.stat.target)
        }
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.ramp.sample(elapsed).finished
    }
}

pub fn view<'a, M: 'a>(counters: &[StatCounter], elapsed: Duration, i18n: &I18n) -> Element<'a, M> {
    counters
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, counter| {
            let number = format!("{}{}", counter.value_at(elapsed), counter.stat().suffix);
            let card = Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(
                    Text::new(number)
                        .size(typography::DISPLAY)
                        .style(|theme: &Theme| text::Style {
                            color: Some(ColorScheme::for_theme(theme).accent),
                        }),
                )
                .push(Text::new(i18n.tr(counter.stat().label_key)).size(typography::BODY));

            row.push(
                Container::new(card)
                    .width(Length::Fill)
                    .padding(spacing::LG)
                    .align_x(alignment::Horizontal::Center)
                    .style(styles::container::card),
            )
        })
        .into()
}
