use crate::common::*;

#[doc = "Marker appended to a message that was cut at the prefix limit."]
pub const TRUNCATION_MARKER: &str = " (...)";

#[doc = "Cuts a log message down to its grouping prefix."]
/// Messages at or below `max_prefix_length` characters come back unchanged,
/// longer ones keep exactly `max_prefix_length` characters plus the marker.
pub fn truncate_message(message: &str, max_prefix_length: usize) -> String {
    if message.chars().count() <= max_prefix_length {
        return message.to_string();
    }

    let prefix: String = message.chars().take(max_prefix_length).collect();
    format!("{}{}", prefix, TRUNCATION_MARKER)
}

#[doc = "Occurrence counts of error messages grouped by their (possibly truncated) prefix."]
/*
    Grouping by prefix merges structurally similar errors whose variable
    tails differ. Built once per invocation, never persisted.
*/
#[derive(Debug, Default, Getters)]
#[getset(get = "pub")]
pub struct ErrorGroup {
    counts: HashMap<String, u64>,
}

impl ErrorGroup {
    pub fn from_messages<I, S>(messages: I, max_prefix_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();

        for message in messages {
            let prefix: String = truncate_message(message.as_ref(), max_prefix_length);
            *counts.entry(prefix).or_insert(0) += 1;
        }

        ErrorGroup { counts }
    }

    #[doc = "Sum of all occurrence counts. Equals the number of raw hits."]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    #[doc = "Entries ordered by count descending, prefix ascending on ties."]
    pub fn sorted_entries(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(prefix, count)| (prefix.clone(), *count))
            .collect();

        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
