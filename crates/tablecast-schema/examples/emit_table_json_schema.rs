use schemars::schema_for;
use tablecast_schema::Table;

fn main() {
    let schema = schema_for!(Table);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
