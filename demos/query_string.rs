use url_value::{QueryString, QueryValue, StringValued};

fn main() {
    // Build a query string from key/value pairs
    let query = QueryString::from_key_values([
        ("user.name", QueryValue::from("Fran\u{e7}ois")),
        ("tags", QueryValue::from(vec!["rust", "url"])),
    ])
    .expect("Failed to build query string");
    println!("Query: {}", query.as_str()); // ?user.name=Fran%C3%A7ois&tags[]=rust&tags[]=url

    // Append a parameter
    let query = query
        .with_added_parameter("page", "2")
        .expect("Failed to add parameter");

    // Decode: dotted keys are kept as written
    for (key, value) in query.to_key_values() {
        match value {
            QueryValue::Single(value) => println!("{key} = {value}"),
            QueryValue::List(values) => println!("{key} = {values:?}"),
        }
    }
}
