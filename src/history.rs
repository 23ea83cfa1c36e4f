use zeroize::Zeroize;

/// How many previous passwords the widget remembers.
pub const HISTORY_CAP: usize = 5;

/// Rolling log of the most recent generated passwords, newest first. Entries
/// beyond the cap are silently discarded; consecutive duplicates are both
/// kept. Nothing here is ever written to disk, and evicted entries are
/// scrubbed before they are freed.
#[derive(Debug, Default)]
pub struct PasswordHistory {
    entries: Vec<String>,
}

impl PasswordHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a password and trims the log back to the cap.
    pub fn push(&mut self, password: String) {
        self.entries.insert(0, password);
        while self.entries.len() > HISTORY_CAP {
            if let Some(mut evicted) = self.entries.pop() {
                evicted.zeroize();
            }
        }
    }

    /// The remembered passwords, newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// The log holds plaintext passwords; scrub them when it goes away.
impl Drop for PasswordHistory {
    fn drop(&mut self) {
        for entry in &mut self.entries {
            entry.zeroize();
        }
        self.entries.clear();
    }
}
