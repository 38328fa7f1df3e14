use chrono::{NaiveDate, NaiveDateTime};
use pairlog_core::db::open_db_in_memory;
use pairlog_core::{
    BoardService, CapabilityError, ExtractedTask, SqliteSliceStore, TaskExtractor,
};
use std::cell::RefCell;
use std::rc::Rc;

fn day(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

fn posted_at(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Extractor stub returning a fixed list and counting invocations.
struct FixedExtractor {
    calls: Rc<RefCell<u32>>,
    result: Result<Vec<ExtractedTask>, CapabilityError>,
}

impl TaskExtractor for FixedExtractor {
    fn extract_tasks(
        &self,
        _text: &str,
        _reference_date: NaiveDate,
    ) -> Result<Vec<ExtractedTask>, CapabilityError> {
        *self.calls.borrow_mut() += 1;
        self.result.clone()
    }
}

fn flower_task() -> ExtractedTask {
    ExtractedTask {
        text: "买花".to_string(),
        date: day("2024-03-02"),
    }
}

#[test]
fn keyword_message_appends_exactly_the_extracted_todos() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let calls = Rc::new(RefCell::new(0));
    let mut board = BoardService::load(
        store,
        FixedExtractor {
            calls: Rc::clone(&calls),
            result: Ok(vec![flower_task()]),
        },
    );

    let outcome = board.post_message("提醒我明天买花", posted_at("2024-03-01 09:30:00"));

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(outcome.tasks_added, 1);
    assert_eq!(board.messages().len(), 1);
    assert_eq!(board.todos().len(), 1);
    assert_eq!(board.todos()[0].text, "买花");
    assert_eq!(board.todos()[0].date, Some(day("2024-03-02")));
    assert!(!board.todos()[0].completed);
}

#[test]
fn extraction_failure_still_posts_the_message() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let calls = Rc::new(RefCell::new(0));
    let mut board = BoardService::load(
        store,
        FixedExtractor {
            calls: Rc::clone(&calls),
            result: Err(CapabilityError::Transport("offline".to_string())),
        },
    );

    let outcome = board.post_message("提醒我明天买花", posted_at("2024-03-01 09:30:00"));

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(outcome.tasks_added, 0);
    assert_eq!(board.messages().len(), 1, "message posts regardless");
    assert!(board.todos().is_empty());
}

#[test]
fn message_without_trigger_keyword_skips_extraction() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let calls = Rc::new(RefCell::new(0));
    let mut board = BoardService::load(
        store,
        FixedExtractor {
            calls: Rc::clone(&calls),
            result: Ok(vec![flower_task()]),
        },
    );

    board.post_message("晚安", posted_at("2024-03-01 23:00:00"));

    assert_eq!(*calls.borrow(), 0);
    assert!(board.todos().is_empty());
}

#[test]
fn messages_are_kept_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let calls = Rc::new(RefCell::new(0));
    let mut board = BoardService::load(
        store,
        FixedExtractor {
            calls,
            result: Ok(Vec::new()),
        },
    );

    board.post_message("早安", posted_at("2024-03-01 08:00:00"));
    board.post_message("晚安", posted_at("2024-03-01 23:00:00"));

    assert_eq!(board.messages()[0].content, "晚安");
    assert_eq!(board.messages()[1].content, "早安");
    assert_eq!(board.messages()[0].date, day("2024-03-01"));
}

#[test]
fn board_state_survives_reload() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let calls = Rc::new(RefCell::new(0));
    {
        let mut board = BoardService::load(
            store,
            FixedExtractor {
                calls: Rc::clone(&calls),
                result: Ok(vec![flower_task()]),
            },
        );
        board.post_message("提醒我明天买花", posted_at("2024-03-01 09:30:00"));
    }

    let board = BoardService::load(
        store,
        FixedExtractor {
            calls,
            result: Ok(Vec::new()),
        },
    );
    assert_eq!(board.messages().len(), 1);
    assert_eq!(board.todos().len(), 1);
}

#[test]
fn flag_toggle_on_missing_id_is_an_exact_no_op() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let calls = Rc::new(RefCell::new(0));
    let mut board = BoardService::load(
        store,
        FixedExtractor {
            calls,
            result: Ok(Vec::new()),
        },
    );

    board.post_message("早安", posted_at("2024-03-01 08:00:00"));
    let snapshot = board.messages().to_vec();

    assert!(!board.toggle_message_pinned("does-not-exist"));
    assert!(!board.toggle_message_favorite("does-not-exist"));
    assert_eq!(board.messages(), snapshot.as_slice());
}

#[test]
fn todo_toggle_and_remove_behave_per_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let calls = Rc::new(RefCell::new(0));
    let mut board = BoardService::load(
        store,
        FixedExtractor {
            calls,
            result: Ok(Vec::new()),
        },
    );

    let id = board.add_todo("倒垃圾", Some(day("2024-03-01")));
    assert!(board.toggle_todo(&id));
    assert!(board.todos()[0].completed);
    assert!(!board.toggle_todo("missing"));

    assert!(board.remove_todo(&id));
    assert!(board.todos().is_empty());
}
