use chrono::NaiveDate;
use pairlog_core::db::open_db_in_memory;
use pairlog_core::{
    AlbumService, AlbumServiceError, CapabilityError, MediaUpload, MemoryKind, MemoryService,
    MemoryServiceError, PendingMedia, ProfileService, ProfileServiceError, SqliteSliceStore,
};

fn day(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

fn pending(file_name: &str) -> PendingMedia {
    PendingMedia {
        file_name: file_name.to_string(),
        bytes: vec![0xff, 0xd8, 0xff],
    }
}

/// Upload stub: files listed in `rejects` come back as the empty string.
struct SelectiveUpload {
    rejects: Vec<String>,
}

impl SelectiveUpload {
    fn accepting_all() -> Self {
        Self { rejects: Vec::new() }
    }

    fn rejecting(names: &[&str]) -> Self {
        Self {
            rejects: names.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl MediaUpload for SelectiveUpload {
    fn upload(&self, media: &PendingMedia) -> Result<String, CapabilityError> {
        if self.rejects.contains(&media.file_name) {
            return Ok(String::new());
        }
        Ok(format!("https://cdn.example/{}", media.file_name))
    }
}

struct BrokenUpload;

impl MediaUpload for BrokenUpload {
    fn upload(&self, _media: &PendingMedia) -> Result<String, CapabilityError> {
        Err(CapabilityError::Transport("connection reset".to_string()))
    }
}

#[test]
fn media_memory_keeps_only_surviving_uploads() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let mut service = MemoryService::load(store, SelectiveUpload::rejecting(&["b.jpg"]));

    let id = service
        .add_media_memory(
            &[pending("a.jpg"), pending("b.jpg"), pending("c.jpg")],
            "海边散步",
            day("2024-05-20"),
        )
        .unwrap();

    let memory = &service.memories()[0];
    assert_eq!(memory.id, id);
    assert_eq!(memory.kind, MemoryKind::Media);
    assert_eq!(
        memory.media,
        vec![
            "https://cdn.example/a.jpg".to_string(),
            "https://cdn.example/c.jpg".to_string(),
        ]
    );
}

#[test]
fn memory_is_not_created_when_every_upload_is_discarded() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let mut service = MemoryService::load(store, BrokenUpload);

    let err = service
        .add_media_memory(&[pending("a.jpg")], "海边散步", day("2024-05-20"))
        .unwrap_err();
    assert_eq!(err, MemoryServiceError::NothingUploaded);
    assert!(service.memories().is_empty());
}

#[test]
fn text_memory_likes_and_comments() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let mut service = MemoryService::load(store, SelectiveUpload::accepting_all());

    let id = service.add_text_memory("在一起一千天", day("2024-05-20"));
    assert_eq!(service.memories()[0].kind, MemoryKind::Text);
    assert!(service.memories()[0].media.is_empty());

    assert!(service.toggle_like(&id));
    assert_eq!(service.memories()[0].likes, 1);
    assert!(service.memories()[0].is_liked);
    assert!(service.toggle_like(&id));
    assert_eq!(service.memories()[0].likes, 0);

    let comment_id = service.add_comment(&id, "当然记得呀", day("2024-05-21")).unwrap();
    assert_eq!(service.memories()[0].comments.len(), 1);
    assert_eq!(service.memories()[0].comments[0].id, comment_id);

    assert!(service.add_comment("missing", "?", day("2024-05-21")).is_none());
    assert_eq!(service.memories()[0].comments.len(), 1);
}

#[test]
fn memory_state_survives_reload() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    {
        let mut service = MemoryService::load(store, SelectiveUpload::accepting_all());
        service.add_text_memory("搬进新家", day("2024-06-01"));
    }

    let service = MemoryService::load(store, SelectiveUpload::accepting_all());
    assert_eq!(service.memories().len(), 1);
    assert_eq!(service.memories()[0].caption, "搬进新家");
}

#[test]
fn album_media_is_owned_by_exactly_one_album() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let mut service = AlbumService::load(store, SelectiveUpload::accepting_all());

    let travel = service.create_album("旅行", day("2024-04-01"));
    let daily = service.create_album("日常", day("2024-04-02"));

    let media_id = service
        .add_media(&travel, &pending("beach.jpg"), day("2024-04-03"))
        .unwrap();

    let travel_album = service
        .albums()
        .iter()
        .find(|album| album.id == travel)
        .unwrap();
    assert_eq!(travel_album.media.len(), 1);
    assert_eq!(travel_album.media[0].url, "https://cdn.example/beach.jpg");

    let daily_album = service.albums().iter().find(|album| album.id == daily).unwrap();
    assert!(daily_album.media.is_empty());

    assert!(service.remove_media(&travel, &media_id));
    assert!(!service.remove_media(&travel, &media_id));
}

#[test]
fn discarded_album_upload_commits_nothing() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let mut service = AlbumService::load(store, BrokenUpload);

    let album = service.create_album("旅行", day("2024-04-01"));
    let err = service
        .add_media(&album, &pending("beach.jpg"), day("2024-04-03"))
        .unwrap_err();
    assert_eq!(err, AlbumServiceError::UploadDiscarded);
    assert!(service.albums()[0].media.is_empty());

    let err = service
        .add_media("missing", &pending("beach.jpg"), day("2024-04-03"))
        .unwrap_err();
    assert_eq!(err, AlbumServiceError::AlbumNotFound("missing".to_string()));
}

#[test]
fn remove_album_drops_its_media_with_it() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();
    let mut service = AlbumService::load(store, SelectiveUpload::accepting_all());

    let album = service.create_album("旅行", day("2024-04-01"));
    service
        .add_media(&album, &pending("beach.jpg"), day("2024-04-03"))
        .unwrap();

    assert!(service.remove_album(&album));
    assert!(service.albums().is_empty());
}

#[test]
fn profile_references_follow_the_upload_drop_rule() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSliceStore::try_new(&conn).unwrap();

    {
        let mut service = ProfileService::load(store, SelectiveUpload::accepting_all());
        let url = service.set_cover_image(&pending("cover.jpg")).unwrap();
        assert_eq!(url, "https://cdn.example/cover.jpg");
        assert_eq!(service.cover_image(), Some("https://cdn.example/cover.jpg"));
        assert!(service.camera_icon().is_none());
    }

    // Persisted reference is read back on the next session.
    let mut service = ProfileService::load(store, BrokenUpload);
    assert_eq!(service.cover_image(), Some("https://cdn.example/cover.jpg"));

    let err = service.set_camera_icon(&pending("icon.png")).unwrap_err();
    assert_eq!(err, ProfileServiceError::UploadDiscarded);
    assert!(service.camera_icon().is_none());
    assert_eq!(
        service.cover_image(),
        Some("https://cdn.example/cover.jpg"),
        "failed upload leaves the previous reference in place"
    );
}
