use std::collections::HashMap;

/// Built-in meme aliases (name, template id, description).
/// Template ids are opaque handles on the macro server and are trusted as-is.
const BUILT_IN_ALIASES: &[(&str, &str, &str)] = &[
    ("dlawton", "0440B0001F0347031E1102D14FE35D4C", "Disgusted Lawton"),
    ("bcthulhu", "0405B0000FEB2CD2138DC22251C0D7CA", "Baby Cthulhu"),
    ("sjohn", "04739000C348442434092157502157A8", "Skeptical John"),
    ("bcat", "04E9400000602CD2EEF7C80651C0937A", "Business Cat"),
    ("pguy", "0493500308D108CFD8D58C7A51BF2E93", "Programmer Guy"),
    ("thumbguy", "040F8013656E5040581289475150DD5D", "Thumbs-Up Suited Guy"),
    ("stonerstoney", "04EF40124A4F5040572846F1512D9CC6", "Stoner Stoney"),
    ("o9000", "049D200338A944244D120DDD50535BC2", "Over 9000 Vegeta"),
    ("octocat", "04D5700060572CD2ABE0697E51C4AA99", "Octocat"),
    ("ducreux", "04B1700069B42CD2502988BE51C4C038", "Joseph Ducreux"),
];

#[derive(Debug, Clone)]
pub struct AliasEntry {
    pub name: String,
    pub template_id: String,
    pub description: String,
}

/// Result of attempting to register a new alias
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyKnown,
}

/// In-memory table of meme aliases.
///
/// Entries are kept in insertion order (built-ins first, then user additions)
/// because that is the order the help listing presents them in. Lookups go
/// through a name index. Nothing is persisted; a restart resets the table to
/// the built-in set.
#[derive(Debug, Clone)]
pub struct AliasStore {
    entries: Vec<AliasEntry>,
    index: HashMap<String, usize>,
}

impl AliasStore {
    pub fn new() -> Self {
        let mut store = AliasStore {
            entries: Vec::with_capacity(BUILT_IN_ALIASES.len()),
            index: HashMap::new(),
        };

        for &(name, template_id, description) in BUILT_IN_ALIASES {
            store.insert(name, template_id, description);
        }

        store
    }

    fn insert(&mut self, name: &str, template_id: &str, description: &str) {
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(AliasEntry {
            name: name.to_string(),
            template_id: template_id.to_string(),
            description: description.to_string(),
        });
    }

    /// Look up the template id for an alias.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].template_id.as_str())
    }

    /// Register a new alias. Existing aliases are never overwritten.
    pub fn add(&mut self, name: &str, template_id: &str) -> AddOutcome {
        if self.index.contains_key(name) {
            return AddOutcome::AlreadyKnown;
        }

        let description = format!("{} (TEMPORARY)", name);
        self.insert(name, template_id, &description);
        AddOutcome::Added
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }
}

impl Default for AliasStore {
    fn default() -> Self {
        Self::new()
    }
}
