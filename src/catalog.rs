//! Caller-side item model.
//!
//! Renders an item's tags into the searchable text the query engine matches
//! against and filters item lists with a query.

use crate::query;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub tags: Vec<String>,
}

impl Item {
    pub fn new(name: &str, tags: &[&str]) -> Item {
        Item {
            name: name.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    /// Parses `name<TAB>tag1,tag2,...`. Missing tags give an untagged item.
    pub fn from_line(line: &str) -> Item {
        let (name, tags) = match line.split_once('\t') {
            Some((name, tags)) => (name, tags),
            None => (line, ""),
        };

        let tags = tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        Item {
            name: name.trim().to_string(),
            tags,
        }
    }

    /// `"<name> : {tag1},{tag2}"`; an untagged item renders `"<name> : {}"`.
    pub fn searchable_text(&self) -> String {
        format!("{} : {{{}}}", self.name, self.tags.join("},{"))
    }

    pub fn matches(&self, query: &str) -> bool {
        query::matches(&self.searchable_text(), query)
    }
}

/// Wraps a tag name into a literal, as a clicked tag would.
pub fn tag_literal(name: &str) -> String {
    format!("{{{}}}", name)
}

/// Parses one item per non-blank line, see [`Item::from_line`].
pub fn read_items<S: AsRef<str>>(lines: &[S]) -> Vec<Item> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| !line.trim().is_empty())
        .map(Item::from_line)
        .collect()
}

pub fn filter<'a, I>(items: I, query: &'a str) -> impl Iterator<Item = &'a Item> + 'a
where
    I: IntoIterator<Item = &'a Item>,
    I::IntoIter: 'a,
{
    items.into_iter().filter(move |item| item.matches(query))
}
