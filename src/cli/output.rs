use serde::Serialize;

use crate::model::todo::{Priority, Todo};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson {
    /// 1-based position, as shown in the list
    pub number: usize,
    pub text: String,
    pub done: bool,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct TagJson {
    pub tag: String,
    pub count: usize,
}

pub fn todo_to_json(index: usize, todo: &Todo) -> TodoJson {
    TodoJson {
        number: index + 1,
        text: todo.text.clone(),
        done: todo.done,
        priority: todo.priority,
        due_date: todo.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
        tags: todo.tags.clone(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `1. [x] Buy milk @2025-01-01 [urgent] #errand #home`
pub fn format_todo_line(index: usize, todo: &Todo) -> String {
    let mut line = format!(
        "{}. [{}] {}",
        index + 1,
        if todo.done { 'x' } else { ' ' },
        todo.text
    );
    if let Some(due) = todo.due_date {
        line.push_str(&format!(" @{}", due.format("%Y-%m-%d")));
    }
    line.push_str(&format!(" [{}]", todo.priority));
    for tag in &todo.tags {
        line.push_str(&format!(" #{}", tag));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use insta::assert_snapshot;

    fn sample() -> Todo {
        Todo::new("Buy milk")
            .with_priority(Priority::Urgent)
            .with_due_date(NaiveDate::from_ymd_opt(2025, 1, 1))
            .with_tags(["errand", "home"])
    }

    #[test]
    fn formats_full_line() {
        assert_eq!(
            format_todo_line(0, &sample()),
            "1. [ ] Buy milk @2025-01-01 [urgent] #errand #home"
        );
    }

    #[test]
    fn formats_minimal_done_line() {
        let todo = Todo {
            done: true,
            ..Todo::new("Call mom")
        };
        assert_eq!(format_todo_line(4, &todo), "5. [x] Call mom [medium]");
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&todo_to_json(0, &sample())).unwrap();
        assert_snapshot!(json, @r#"{"number":1,"text":"Buy milk","done":false,"priority":"urgent","due_date":"2025-01-01","tags":["errand","home"]}"#);

        let json = serde_json::to_string(&todo_to_json(1, &Todo::new("x"))).unwrap();
        assert_snapshot!(json, @r#"{"number":2,"text":"x","done":false,"priority":"medium","tags":[]}"#);
    }
}
