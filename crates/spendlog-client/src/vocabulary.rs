use serde::{Deserialize, Serialize};

const BUILTIN_CATEGORIES: [(&str, &str); 12] = [
    ("salary", "Salary"),
    ("freelance", "Freelance"),
    ("investment", "Investment"),
    ("food", "Food"),
    ("transport", "Transport"),
    ("housing", "Housing"),
    ("utilities", "Utilities"),
    ("entertainment", "Entertainment"),
    ("health", "Health"),
    ("shopping", "Shopping"),
    ("education", "Education"),
    ("other", "Other"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub value: String,
    pub label: String,
}

/// Ordered category vocabulary. Order is meaningful: it drives option
/// population in frontends, so lookups preserve insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVocabulary {
    categories: Vec<Category>,
}

impl CategoryVocabulary {
    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN_CATEGORIES
                .iter()
                .map(|(value, label)| ((*value).to_string(), (*label).to_string())),
        )
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vocabulary = Self {
            categories: Vec::new(),
        };
        for (value, label) in pairs {
            vocabulary.upsert(&value, &label);
        }
        vocabulary
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|category| category.value == value)
            .map(|category| category.label.as_str())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.label_for(value).is_some()
    }

    /// Adds a category, or relabels it in place when the value already
    /// exists. Returns true when the value was new.
    pub fn upsert(&mut self, value: &str, label: &str) -> bool {
        if let Some(existing) = self
            .categories
            .iter_mut()
            .find(|category| category.value == value)
        {
            existing.label = label.to_string();
            return false;
        }

        self.categories.push(Category {
            value: value.to_string(),
            label: label.to_string(),
        });
        true
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryVocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
