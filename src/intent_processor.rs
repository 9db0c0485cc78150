//! Intent processing module
//!
//! Handles conversion of control surface requests into renderer changes.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::clock::HourFormat;
use crate::effect::EffectId;
use crate::tz::TimeZone;

/// Request to change what the matrix shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixIntent {
    /// Switch to a specific effect
    SwitchEffect(EffectId),
    /// Switch to the effect after the current one
    NextEffect,
    SetHourFormat(HourFormat),
    SetTimeZone(TimeZone),
    /// Toggle the sand animation of the sand clock
    SetSandEnabled(bool),
    /// Turn the panel on or off
    SetDisplayPower(bool),
    /// Restart the current effect with a fresh seed
    Reseed,
}

/// Changes collected from all pending intents that the renderer should apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatrixChanges {
    pub effect: Option<EffectId>,
    pub hour_format: Option<HourFormat>,
    pub time_zone: Option<TimeZone>,
    pub sand_enabled: Option<bool>,
    pub power: Option<bool>,
    pub reseed: bool,
}

impl MatrixChanges {
    /// Check if anything needs to be applied
    pub const fn has_changes(&self) -> bool {
        self.effect.is_some()
            || self.hour_format.is_some()
            || self.time_zone.is_some()
            || self.sand_enabled.is_some()
            || self.power.is_some()
            || self.reseed
    }
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> =
    Sender<'a, CriticalSectionRawMutex, MatrixIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> =
    Receiver<'a, CriticalSectionRawMutex, MatrixIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<CriticalSectionRawMutex, MatrixIntent, SIZE>;

/// Drains user intents and folds them into a single set of changes
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    /// Create a new intent processor
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Process all pending intents from the channel (non-blocking)
    ///
    /// Later intents override earlier ones. `NextEffect` advances from the
    /// effect selected so far, so two of them in a row skip one effect.
    pub fn process_pending(&mut self, current_effect: EffectId) -> MatrixChanges {
        let mut changes = MatrixChanges::default();

        while let Ok(intent) = self.intents.try_receive() {
            match intent {
                MatrixIntent::SwitchEffect(effect) => changes.effect = Some(effect),
                MatrixIntent::NextEffect => {
                    let base = changes.effect.unwrap_or(current_effect);
                    changes.effect = Some(base.next());
                }
                MatrixIntent::SetHourFormat(format) => changes.hour_format = Some(format),
                MatrixIntent::SetTimeZone(zone) => changes.time_zone = Some(zone),
                MatrixIntent::SetSandEnabled(enabled) => changes.sand_enabled = Some(enabled),
                MatrixIntent::SetDisplayPower(power) => changes.power = Some(power),
                MatrixIntent::Reseed => changes.reseed = true,
            }
        }

        changes
    }
}
