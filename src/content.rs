// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! Prose lives in the Fluent catalog; this module only holds structure
//! (which message keys make up a section, project URLs, stat targets) and
//! proper nouns that are never translated.

use crate::app::i18n::fluent::I18n;
use crate::boot::TextRegistry;

/// Message keys whose text must resolve before the portfolio is shown.
pub const TEXT_REGISTRY_KEYS: [&str; 7] = [
    "hero-name",
    "hero-role",
    "hero-cta-work",
    "hero-cta-contact",
    "contact-connect-title",
    "contact-title",
    "contact-send",
];

/// Resolves [`TEXT_REGISTRY_KEYS`] against the active locale.
///
/// Missing messages are registered as empty strings so that validation
/// rejects them.
#[must_use]
pub fn text_registry(i18n: &I18n) -> TextRegistry {
    TEXT_REGISTRY_KEYS
        .iter()
        .map(|key| (*key, i18n.lookup(key).unwrap_or_default()))
        .collect()
}

// =============================================================================
// Tips
// =============================================================================

/// A short development tip shown while booting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    /// Message key of the category label.
    pub tag_key: &'static str,
    /// Message key of the tip body.
    pub text_key: &'static str,
}

const fn tip(tag_key: &'static str, text_key: &'static str) -> Tip {
    Tip { tag_key, text_key }
}

pub const TIPS: [Tip; 12] = [
    tip("tip-tag-tailwind", "tip-utility-clusters"),
    tip("tip-tag-react", "tip-memoize-after-profiling"),
    tip("tip-tag-performance", "tip-debounce-handlers"),
    tip("tip-tag-dx", "tip-api-helpers"),
    tip("tip-tag-accessibility", "tip-semantic-headings"),
    tip("tip-tag-state", "tip-minimal-state"),
    tip("tip-tag-testing", "tip-edge-cases"),
    tip("tip-tag-security", "tip-validate-input"),
    tip("tip-tag-tailwind", "tip-design-tokens"),
    tip("tip-tag-react", "tip-lazy-loading"),
    tip("tip-tag-code-quality", "tip-small-files"),
    tip("tip-tag-git", "tip-commit-intent"),
];

// =============================================================================
// Portfolio
// =============================================================================

pub const SKILLS: [&str; 10] = [
    "HTML5",
    "CSS",
    "JavaScript",
    "Tailwind CSS",
    "React.js",
    "Node.js",
    "MongoDB",
    "Express.js",
    "GitHub",
    "AI Coding",
];

/// Paragraph keys of the about section, in display order.
pub const ABOUT_PARAGRAPHS: [&str; 3] = ["about-intro", "about-stack", "about-outro"];

/// An animated headline number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label_key: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        target: 10,
        suffix: "+",
        label_key: "stats-projects",
    },
    Stat {
        target: 2,
        suffix: "+",
        label_key: "stats-experience",
    },
    Stat {
        target: 7,
        suffix: "+",
        label_key: "stats-technologies",
    },
];

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description_key: &'static str,
    /// Embedded preview image name.
    pub image: &'static str,
    pub url: &'static str,
    pub tags: [&'static str; 3],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "ButtFoods",
        description_key: "project-buttfoods-description",
        image: "projects/buttfoods-desktop.png",
        url: "https://buttfoods.vercel.app/",
        tags: ["Responsive UI", "Frontend", "Production Deploy"],
    },
    Project {
        title: "The Forge",
        description_key: "project-theforge-description",
        image: "projects/theforge-desktop.png",
        url: "https://the-forge2.vercel.app/",
        tags: ["Modern Design", "Landing Experience", "Performance Ready"],
    },
    Project {
        title: "Aurelia",
        description_key: "project-aurelia-description",
        image: "projects/aurelia-desktop.png",
        url: "https://aurelia-livid.vercel.app/",
        tags: ["Mobile First", "Elegant UI", "Deploy Ready"],
    },
];

/// An external profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        url: "https://github.com/khizarusestate",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/khizar-hayat-5a604938b",
    },
    SocialLink {
        name: "Email",
        url: "mailto:khizarusestate@gmail.com",
    },
];
