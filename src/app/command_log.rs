//! Begrenztes Command-Log zur Nachverfolgung des Command-Stroms.

use super::AppCommand;
use std::collections::VecDeque;

/// Speichert ausgeführte Commands in Ausführungsreihenfolge.
///
/// Bei Erreichen der Kapazität wird der älteste Eintrag verworfen.
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
}

impl CommandLog {
    const DEFAULT_CAPACITY: usize = 1000;

    /// Erstellt ein leeres Command-Log mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Erstellt ein leeres Command-Log mit eigener Kapazität (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Anzahl der geloggten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, wenn noch kein Command geloggt wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Alle Einträge, älteste zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}
