use {
    serde::{Deserialize, Serialize},
    uuid::Uuid,
};

/// A question/answer pair authored during the identity step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// FAQ entries in insertion order.
///
/// Entries are only ever appended or removed; editing one means removing it
/// and adding a new entry, which moves it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqRegistry {
    entries: Vec<FaqEntry>,
}

impl FaqRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the sample entry shown to new sessions.
    pub fn with_example() -> Self {
        let mut faqs = Self::new();
        faqs.add(
            "What are your opening hours?",
            "Our team is available Monday to Friday, 9am to 6pm. Outside those hours I can \
             still help with most questions.",
            Some("General"),
        );
        faqs
    }

    /// Append an entry and return its id.
    ///
    /// Returns `None` without touching the registry when the question or the
    /// answer is blank. A blank category is stored as `None`.
    pub fn add(&mut self, question: &str, answer: &str, category: Option<&str>) -> Option<String> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let id = self.fresh_id();
        self.entries.push(FaqEntry {
            id: id.clone(),
            question: question.to_string(),
            answer: answer.to_string(),
            category,
        });
        Some(id)
    }

    /// Remove the entry with `id`, if any.
    pub fn remove(&mut self, id: &str) -> Option<FaqEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaqEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[FaqEntry] {
        &self.entries
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
