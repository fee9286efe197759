//! UI label resolution for the embed widget.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Built-in English labels, shared by every widget instance.
pub static DEFAULT_LOCALE: Lazy<Locale> = Lazy::new(Locale::default);

/// Complete set of display labels used by the widget chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    #[serde(default = "default_devices")]
    pub devices: String,
    #[serde(default = "default_next")]
    pub next: String,
    #[serde(default = "default_pause")]
    pub pause: String,
    #[serde(default = "default_play")]
    pub play: String,
    #[serde(default = "default_previous")]
    pub previous: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_volume")]
    pub volume: String,
}

/// Caller-supplied overrides; any field left `None` keeps its default label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
}

fn default_devices() -> String {
    "Devices".to_string()
}

fn default_next() -> String {
    "Next".to_string()
}

fn default_pause() -> String {
    "Pause".to_string()
}

fn default_play() -> String {
    "Play".to_string()
}

fn default_previous() -> String {
    "Previous".to_string()
}

fn default_title() -> String {
    "{name} on SPOTIFY".to_string()
}

fn default_volume() -> String {
    "Volume".to_string()
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            devices: default_devices(),
            next: default_next(),
            pause: default_pause(),
            play: default_play(),
            previous: default_previous(),
            title: default_title(),
            volume: default_volume(),
        }
    }
}

impl Locale {
    /// Overlay the given overrides onto the default labels.
    pub fn resolve(overrides: Option<LocaleOverrides>) -> Self {
        let mut locale = Locale::default();

        if let Some(overrides) = overrides {
            if let Some(devices) = overrides.devices {
                locale.devices = devices;
            }
            if let Some(next) = overrides.next {
                locale.next = next;
            }
            if let Some(pause) = overrides.pause {
                locale.pause = pause;
            }
            if let Some(play) = overrides.play {
                locale.play = play;
            }
            if let Some(previous) = overrides.previous {
                locale.previous = previous;
            }
            if let Some(title) = overrides.title {
                locale.title = title;
            }
            if let Some(volume) = overrides.volume {
                locale.volume = volume;
            }
        }

        locale
    }
}

/// Substitute `name` for the first `{name}` token in a title template.
/// No escaping and no repeat substitution.
pub fn link_title(name: &str, template: &str) -> String {
    template.replacen("{name}", name, 1)
}
