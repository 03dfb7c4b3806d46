use serde_json::json;

use tablecast_schema::{Column, SqlType, Table};

#[test]
fn serializes_table_deterministically() {
    let table = Table::new(
        "users",
        vec![
            Column::new("id", SqlType::Integer).primary_key(),
            Column::new("name", SqlType::sized_string(256)).with_doc("display name"),
        ],
    );

    let actual = serde_json::to_value(&table).expect("serialize table");
    let expected = json!({
        "name": "users",
        "columns": [
            {
                "name": "id",
                "sql_type": {"type": "integer"},
                "nullable": false,
                "primary_key": true
            },
            {
                "name": "name",
                "sql_type": {"type": "string", "length": 256},
                "nullable": true,
                "primary_key": false,
                "doc": "display name"
            }
        ]
    });
    assert_eq!(actual, expected);
}

#[test]
fn table_round_trips_through_json() {
    let table = Table::new(
        "events",
        vec![
            Column::new("id", SqlType::BigInteger).primary_key(),
            Column::new(
                "kind",
                SqlType::Enum {
                    name: "event_kind".to_string(),
                    labels: vec!["created".to_string(), "deleted".to_string()],
                },
            ),
            Column::new("payload", SqlType::LargeBinary),
        ],
    );

    let json = serde_json::to_string(&table).expect("serialize table");
    let parsed: Table = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(parsed, table);
}
