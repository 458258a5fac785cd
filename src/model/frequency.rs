use std::collections::hash_map;
use std::collections::HashMap;

/// Case-sensitive word counts.
///
/// Never holds an empty key, every count is at least 1, and `total()` always
/// equals the sum of all counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, usize>,
    total: usize,
}

impl FrequencyMap {
    /// Counts each distinct token. Empty tokens are skipped.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = Self::default();
        for token in tokens {
            if token.is_empty() {
                continue;
            }
            *map.counts.entry(token.to_string()).or_insert(0) += 1;
            map.total += 1;
        }
        map
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of tokens counted, i.e. the sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(word, count)| (word.as_str(), *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a FrequencyMap {
    type Item = (&'a str, usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
