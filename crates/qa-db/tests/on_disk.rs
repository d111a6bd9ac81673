//! File-backed store tests: durability across reopen and legacy schema handling.

use tempfile::TempDir;

use qa_core::entities::MutationOutcome;
use qa_db::QaDb;
use qa_db::error::DatabaseError;

fn db_path(dir: &TempDir) -> String {
    dir.path().join("questions.db").to_string_lossy().into_owned()
}

#[tokio::test]
async fn records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let created = {
        let db = QaDb::open_local(&path).await.unwrap();
        let created = db.create_question("Persisted?").await.unwrap();
        assert_eq!(db.set_answer(created.id, "Yes").await.unwrap(), MutationOutcome::Applied);
        created
    };

    let reopened = QaDb::open_local(&path).await.unwrap();
    let records = reopened.list_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, created.id);
    assert_eq!(records[0].answer.as_deref(), Some("Yes"));
}

#[tokio::test]
async fn ids_are_not_reused_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let last = {
        let db = QaDb::open_local(&path).await.unwrap();
        db.create_question("one").await.unwrap();
        let last = db.create_question("two").await.unwrap();
        let _ = db.delete_record(last.id).await.unwrap();
        last
    };

    let db = QaDb::open_local(&path).await.unwrap();
    let next = db.create_question("three").await.unwrap();
    assert!(next.id > last.id);
}

#[tokio::test]
async fn question_only_table_is_rejected_untouched() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    {
        let raw = libsql::Builder::new_local(&path).build().await.unwrap();
        let conn = raw.connect().unwrap();
        conn.execute_batch(
            "CREATE TABLE questions (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 question TEXT NOT NULL,
                 asked_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
             );
             INSERT INTO questions (question) VALUES ('legacy row');",
        )
        .await
        .unwrap();
    }

    let err = QaDb::open_local(&path).await.err().expect("legacy table should be rejected");
    match err {
        DatabaseError::UnsupportedSchema(msg) => {
            assert!(msg.contains("answer"), "message should name missing columns: {msg}");
        }
        other => panic!("expected UnsupportedSchema, got {other:?}"),
    }

    let raw = libsql::Builder::new_local(&path).build().await.unwrap();
    let conn = raw.connect().unwrap();
    let mut rows = conn.query("SELECT COUNT(*) FROM questions", ()).await.unwrap();
    let count = rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap();
    assert_eq!(count, 1, "legacy rows must not be truncated");
}

#[tokio::test]
async fn unreachable_path_is_a_storage_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir
        .path()
        .join("missing")
        .join("nested")
        .join("questions.db")
        .to_string_lossy()
        .into_owned();

    assert!(QaDb::open_local(&path).await.is_err());
}
