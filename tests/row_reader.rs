use rowcast::{
    cell_enum, cell_value, datetime_to_julian, DbNull, DecodeErrorKind, Narrowing, ReaderConfig,
    Row, RowReader, Scalar, ScalarKind, Value,
};
use rust_decimal::Decimal;
use time::macros::datetime;
use time::PrimitiveDateTime;
use uuid::Uuid;

#[derive(Debug, PartialEq)]
enum Status {
    Active,
    Disabled,
}

impl TryFrom<i32> for Status {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, ()> {
        match v {
            1 => Ok(Status::Active),
            2 => Ok(Status::Disabled),
            _ => Err(()),
        }
    }
}

cell_enum!(Status: i32);

#[derive(Debug, PartialEq)]
struct Tag(String);

impl TryFrom<Value> for Tag {
    type Error = ();

    fn try_from(v: Value) -> Result<Self, ()> {
        match v {
            Value::Text(s) => Ok(Tag(s)),
            _ => Err(()),
        }
    }
}

cell_value!(Tag);

fn mixed_row() -> Row {
    Row::new(vec![
        Value::Int(1),
        Value::from("urgent"),
        Value::Null,
        Value::Int(9),
        Value::Float(2_451_545.0),
    ])
}

#[test]
fn test_null_cell_through_every_route() {
    let row = mixed_row();
    let reader = RowReader::new(&row);

    assert!(reader.is_null(2).unwrap());
    assert_eq!(reader.get_value(2).unwrap(), Value::Null);
    assert_eq!(reader.get::<DbNull>(2).unwrap(), DbNull);
    assert_eq!(reader.get::<Option<Decimal>>(2).unwrap(), None);
    assert_eq!(reader.get::<Option<Status>>(2).unwrap(), None);
    assert_eq!(reader.get::<Decimal>(2).unwrap(), Decimal::ZERO);
    assert_eq!(reader.get::<Uuid>(2).unwrap(), Uuid::nil());
}

#[test]
fn test_enum_through_integer_base() {
    let row = mixed_row();
    let reader = RowReader::new(&row);

    assert_eq!(reader.get::<Status>(0).unwrap(), Status::Active);
    assert_eq!(reader.get::<Option<Status>>(0).unwrap(), Some(Status::Active));

    let err = reader.get::<Status>(3).unwrap_err();
    assert_eq!(DecodeErrorKind::of(&err), Some(DecodeErrorKind::Cast));
}

#[test]
fn test_unsupported_type_through_generic_value() {
    let row = mixed_row();
    let reader = RowReader::new(&row);

    assert_eq!(reader.get::<Tag>(1).unwrap(), Tag("urgent".to_string()));
    let err = reader.get::<Tag>(0).unwrap_err();
    assert_eq!(DecodeErrorKind::of(&err), Some(DecodeErrorKind::Cast));
}

#[test]
fn test_julian_reference_points() {
    let row = Row::new(vec![Value::Float(2_451_545.0), Value::Float(2_440_587.5)]);
    let reader = RowReader::new(&row);

    assert_eq!(
        reader.get::<PrimitiveDateTime>(0).unwrap(),
        datetime!(2000-01-01 12:00:00.000)
    );
    assert_eq!(
        reader.get::<PrimitiveDateTime>(1).unwrap(),
        datetime!(1970-01-01 00:00:00.000)
    );
}

#[test]
fn test_julian_round_trip_through_reader() {
    let samples = [
        datetime!(0001-01-01 0:00),
        datetime!(1582-10-15 6:30:00.125),
        datetime!(1999-12-31 23:59:59.999),
        datetime!(2024-02-29 12:34:56.789),
        datetime!(9999-12-31 23:59:59.999),
    ];
    let row: Row = samples
        .iter()
        .map(|dt| Value::Float(datetime_to_julian(*dt)))
        .collect();
    let reader = RowReader::new(&row);

    for (ordinal, expected) in samples.iter().enumerate() {
        assert_eq!(reader.get::<PrimitiveDateTime>(ordinal).unwrap(), *expected);
    }
}

#[test]
fn test_sub_millisecond_rounds_half_up() {
    let half = datetime!(2020-06-01 10:00:00.0005);
    let below = datetime!(2020-06-01 10:00:00.0004999);
    let row = Row::new(vec![
        Value::Float(datetime_to_julian(half)),
        Value::Float(datetime_to_julian(below)),
    ]);
    let reader = RowReader::new(&row);

    assert_eq!(
        reader.get::<PrimitiveDateTime>(0).unwrap(),
        datetime!(2020-06-01 10:00:00.001)
    );
    assert_eq!(
        reader.get::<PrimitiveDateTime>(1).unwrap(),
        datetime!(2020-06-01 10:00:00.000)
    );
}

#[test]
fn test_narrowing_modes() {
    let row = Row::new(vec![Value::Int(3_000_000_000)]);

    let truncating = RowReader::new(&row);
    assert_eq!(truncating.get::<i32>(0).unwrap(), 3_000_000_000i64 as i32);

    let checked =
        RowReader::with_config(&row, ReaderConfig::new().with_narrowing(Narrowing::Checked));
    let err = checked.get::<i32>(0).unwrap_err();
    assert_eq!(DecodeErrorKind::of(&err), Some(DecodeErrorKind::Range));
}

#[test]
fn test_get_values_three_fields() {
    let row = Row::new(vec![Value::Int(1), Value::Float(0.5), Value::from("c")]);
    let reader = RowReader::new(&row);
    let mut buf = vec![Value::Null; 3];

    assert_eq!(reader.get_values(&mut buf).unwrap(), 3);
    assert_eq!(buf, vec![Value::Int(1), Value::Float(0.5), Value::from("c")]);
}

#[test]
fn test_get_kind_matches_get() {
    let row = mixed_row();
    let reader = RowReader::new(&row);

    assert_eq!(
        reader.get_kind(1, ScalarKind::String, false).unwrap(),
        Scalar::String("urgent".to_string())
    );
    assert_eq!(
        reader.get_kind(4, ScalarKind::DateTime, false).unwrap(),
        Scalar::DateTime(datetime!(2000-01-01 12:00))
    );
    assert_eq!(reader.field_kind(4).unwrap(), ScalarKind::Double);
    assert_eq!(reader.field_kind(2).unwrap(), ScalarKind::NullMarker);
}
