use rowcast::{datetime_to_julian, DecodeErrorKind, RowReader, Value};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use tempfile::tempdir;
use time::macros::datetime;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

fn create_events(conn: &Connection) {
    conn.execute_batch(
        "CREATE TABLE events (
            id INTEGER PRIMARY KEY,
            name TEXT,
            happened_at REAL,
            logged_at TEXT,
            amount TEXT,
            elapsed TEXT,
            token BLOB,
            note TEXT
        );",
    )
    .unwrap();
}

#[test]
fn test_reads_typed_columns_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.db");
    let token = Uuid::parse_str("0f8fad5b-d9cb-469f-a165-70867728950e").unwrap();
    let happened = datetime!(2023-11-05 08:15:30.250);

    {
        let conn = Connection::open(&path).unwrap();
        create_events(&conn);
        conn.execute(
            "INSERT INTO events VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL)",
            params![
                7,
                "deploy",
                datetime_to_julian(happened),
                "2023-11-05T09:15:30+01:00",
                "1.25E3",
                "00:01:30",
                token.as_bytes().to_vec(),
            ],
        )
        .unwrap();
    }

    let conn = Connection::open(&path).unwrap();
    let mut stmt = conn.prepare("SELECT * FROM events").unwrap();
    let mut rows = stmt.query([]).unwrap();
    let row = rows.next().unwrap().unwrap();
    let reader = RowReader::new(row);

    assert_eq!(reader.field_count(), 8);
    assert_eq!(reader.get::<i32>(0).unwrap(), 7);
    assert_eq!(reader.get::<String>(1).unwrap(), "deploy");
    assert_eq!(reader.get::<PrimitiveDateTime>(2).unwrap(), happened);
    assert_eq!(
        reader.get::<PrimitiveDateTime>(3).unwrap(),
        datetime!(2023-11-05 08:15:30)
    );
    assert_eq!(
        reader.get::<OffsetDateTime>(3).unwrap(),
        datetime!(2023-11-05 08:15:30 UTC)
    );
    assert_eq!(reader.get::<Decimal>(4).unwrap(), Decimal::from(1250));
    assert_eq!(reader.get::<Duration>(5).unwrap(), Duration::seconds(90));
    assert_eq!(reader.get::<Uuid>(6).unwrap(), token);
    assert_eq!(reader.get::<Option<String>>(7).unwrap(), None);
    assert_eq!(reader.get::<String>(7).unwrap(), "");
}

#[test]
fn test_sqlite_coercions_through_reader() {
    let conn = Connection::open_in_memory().unwrap();
    let mut stmt = conn
        .prepare("SELECT '42abc', 3.0, 0.1, x'68656c6c6f', 3000000000")
        .unwrap();
    let mut rows = stmt.query([]).unwrap();
    let row = rows.next().unwrap().unwrap();
    let reader = RowReader::new(row);

    assert_eq!(reader.get::<i64>(0).unwrap(), 42);
    assert_eq!(reader.get::<String>(1).unwrap(), "3.0");
    assert_eq!(reader.get::<String>(2).unwrap(), "0.1");
    assert_eq!(reader.get::<String>(3).unwrap(), "hello");
    assert_eq!(reader.get::<i32>(4).unwrap(), 3_000_000_000i64 as i32);
}

#[test]
fn test_bulk_read_of_cursor_row() {
    let conn = Connection::open_in_memory().unwrap();
    let mut stmt = conn.prepare("SELECT 1, 'two', NULL").unwrap();
    let mut rows = stmt.query([]).unwrap();
    let row = rows.next().unwrap().unwrap();
    let reader = RowReader::new(row);

    let mut buf = vec![Value::Null; 4];
    assert_eq!(reader.get_values(&mut buf).unwrap(), 3);
    assert_eq!(&buf[..3], &[Value::Int(1), Value::from("two"), Value::Null]);
}

#[test]
fn test_bad_text_is_format_failure() {
    let conn = Connection::open_in_memory().unwrap();
    let mut stmt = conn
        .prepare("SELECT 'yesterday', 'lots', 'forever', 'not-a-guid'")
        .unwrap();
    let mut rows = stmt.query([]).unwrap();
    let row = rows.next().unwrap().unwrap();
    let reader = RowReader::new(row);

    let failures = [
        reader.get::<PrimitiveDateTime>(0).unwrap_err(),
        reader.get::<Decimal>(1).unwrap_err(),
        reader.get::<Duration>(2).unwrap_err(),
        reader.get::<Uuid>(3).unwrap_err(),
    ];
    for err in &failures {
        assert_eq!(DecodeErrorKind::of(err), Some(DecodeErrorKind::Format));
    }
}
