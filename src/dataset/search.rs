//! Keyword matching over dataset fields

use super::Dataset;

impl Dataset {
    /// True if any keyword matches this dataset.
    ///
    /// A keyword matches when it is a case-insensitive substring of name,
    /// creator, host, description, rights, url or any tag value, or when it
    /// equals the decimal id exactly. No keywords means no match.
    pub fn matches_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        let id = self.id.to_string();
        let fields = [
            self.name.to_lowercase(),
            self.creator.to_lowercase(),
            self.host.to_lowercase(),
            self.description.to_lowercase(),
            self.rights.to_lowercase(),
            self.url.to_lowercase(),
        ];

        keywords.iter().any(|keyword| {
            let keyword = keyword.as_ref();
            if keyword == id {
                return true;
            }

            let needle = keyword.to_lowercase();
            fields.iter().any(|field| field.contains(&needle))
                || self
                    .tags
                    .values()
                    .any(|value| value.to_lowercase().contains(&needle))
        })
    }
}
