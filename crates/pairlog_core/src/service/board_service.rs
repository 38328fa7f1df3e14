//! Message-board use-case service.
//!
//! # Responsibility
//! - Post board messages (newest first) and manage their flags.
//! - Own the todo list, including todos recovered by task extraction.
//!
//! # Invariants
//! - The message is always posted before extraction runs; extraction
//!   failure is swallowed and never blocks or removes the post.
//! - Extraction only fires when the text names one of the fixed trigger
//!   keywords.

use crate::capability::{ExtractedTask, TaskExtractor};
use crate::collection;
use crate::model::message::Message;
use crate::model::todo::TodoItem;
use crate::store::{SliceKey, SliceStore};
use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};

/// Text markers that make a posted message worth running extraction on.
pub const TASK_TRIGGER_KEYWORDS: [&str; 4] = ["今天", "明天", "要做", "提醒"];

/// Result of posting one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostOutcome {
    pub message_id: String,
    /// Todos appended by best-effort extraction; drives the success
    /// notification when non-zero.
    pub tasks_added: usize,
}

/// Board service over the messages and todos slices.
pub struct BoardService<S: SliceStore, X: TaskExtractor> {
    store: S,
    extractor: X,
    messages: Vec<Message>,
    todos: Vec<TodoItem>,
}

impl<S: SliceStore, X: TaskExtractor> BoardService<S, X> {
    pub fn load(store: S, extractor: X) -> Self {
        let messages = store.load(SliceKey::Messages).unwrap_or_default();
        let todos = store.load(SliceKey::Todos).unwrap_or_default();
        Self {
            store,
            extractor,
            messages,
            todos,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Posts a message, then runs best-effort task extraction on it.
    pub fn post_message(&mut self, content: impl Into<String>, posted_at: NaiveDateTime) -> PostOutcome {
        let message = Message::new(content, posted_at);
        let message_id = message.id.clone();
        let text = message.content.clone();
        self.messages.insert(0, message);
        self.store.save(SliceKey::Messages, &self.messages);

        let tasks_added = if mentions_task_keyword(&text) {
            self.append_extracted(&text, posted_at.date())
        } else {
            0
        };

        PostOutcome {
            message_id,
            tasks_added,
        }
    }

    fn append_extracted(&mut self, text: &str, reference_date: NaiveDate) -> usize {
        let extracted: Vec<ExtractedTask> = match self.extractor.extract_tasks(text, reference_date)
        {
            Ok(extracted) => extracted,
            Err(err) => {
                warn!("event=task_extract module=service status=swallowed error={err}");
                Vec::new()
            }
        };
        if extracted.is_empty() {
            return 0;
        }

        let count = extracted.len();
        for task in extracted {
            self.todos.push(TodoItem::new(task.text, Some(task.date)));
        }
        self.store.save(SliceKey::Todos, &self.todos);
        info!("event=task_extract module=service status=ok count={count}");
        count
    }

    pub fn toggle_message_pinned(&mut self, id: &str) -> bool {
        self.mutate_message(id, |message| message.is_pinned = !message.is_pinned)
    }

    pub fn toggle_message_favorite(&mut self, id: &str) -> bool {
        self.mutate_message(id, |message| message.is_favorite = !message.is_favorite)
    }

    pub fn remove_message(&mut self, id: &str) -> bool {
        let removed = collection::remove_by_id(&mut self.messages, id);
        if removed {
            self.store.save(SliceKey::Messages, &self.messages);
        }
        removed
    }

    fn mutate_message(&mut self, id: &str, mutate: impl FnOnce(&mut Message)) -> bool {
        let changed = collection::toggle_by_id(&mut self.messages, id, mutate);
        if changed {
            self.store.save(SliceKey::Messages, &self.messages);
        }
        changed
    }

    /// Adds a todo from free text. Returns its id.
    pub fn add_todo(&mut self, text: impl Into<String>, date: Option<NaiveDate>) -> String {
        let todo = TodoItem::new(text, date);
        let id = todo.id.clone();
        self.todos.push(todo);
        self.store.save(SliceKey::Todos, &self.todos);
        id
    }

    pub fn toggle_todo(&mut self, id: &str) -> bool {
        let changed = collection::toggle_by_id(&mut self.todos, id, TodoItem::toggle_completed);
        if changed {
            self.store.save(SliceKey::Todos, &self.todos);
        }
        changed
    }

    pub fn remove_todo(&mut self, id: &str) -> bool {
        let removed = collection::remove_by_id(&mut self.todos, id);
        if removed {
            self.store.save(SliceKey::Todos, &self.todos);
        }
        removed
    }
}

fn mentions_task_keyword(text: &str) -> bool {
    TASK_TRIGGER_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword))
}
