use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// One shell command: its name, help text, and handler.
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }

    pub fn help_lines(&self) -> Vec<String> {
        vec![
            format!("  Description: {}", self.description),
            format!("  Usage: {}", self.usage),
        ]
    }
}

/// Command table in registration order. Re-registering a name replaces its entry in place.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        match self.entries.iter_mut().find(|known| known.name == entry.name) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    /// One aligned line per command, for `help` without arguments.
    pub fn overview_lines(&self) -> Vec<String> {
        let width = self.names().map(str::len).max().unwrap_or(0);
        self.entries
            .iter()
            .map(|entry| format!("  {:<width$}  {}", entry.name, entry.description))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn keeps_registration_order_and_replaces_duplicates() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("list", "Show rows", "list", noop));
        registry.register(CommandEntry::new("add", "Record", "add <c> <a>", noop));
        registry.register(CommandEntry::new("list", "Show expenses", "list", noop));

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["list", "add"]);
        assert_eq!(registry.get("list").map(|e| e.description), Some("Show expenses"));
        assert!(registry.handler("remove").is_none());
    }

    #[test]
    fn overview_aligns_descriptions() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("add", "Record an expense", "add", noop));
        registry.register(CommandEntry::new("summary", "Show totals", "summary", noop));
        assert_eq!(
            registry.overview_lines(),
            vec!["  add      Record an expense", "  summary  Show totals"]
        );
    }
}
