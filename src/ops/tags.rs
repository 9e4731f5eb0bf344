use indexmap::IndexSet;

use crate::model::todo::Todo;

/// Distinct tags across all todos, in first-seen order
pub fn tag_index<'a, I>(todos: I) -> IndexSet<&'a str>
where
    I: IntoIterator<Item = &'a Todo>,
{
    todos
        .into_iter()
        .flat_map(|todo| todo.tags.iter().map(String::as_str))
        .collect()
}

/// Tags whose lowercase form contains the lowercase `filter`.
///
/// An empty filter matches every tag.
pub fn filter_tags<'a, I>(todos: I, filter: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Todo>,
{
    let needle = filter.to_lowercase();
    tag_index(todos)
        .into_iter()
        .filter(|tag| tag.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}

/// Number of todos carrying each tag, in first-seen order
pub fn tag_counts<'a, I>(todos: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Todo>,
{
    let mut counts: indexmap::IndexMap<&str, usize> = indexmap::IndexMap::new();
    for todo in todos {
        for tag in &todo.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(tag, n)| (tag.to_string(), n))
        .collect()
}
