use url_value::{StringValued, Url};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse a URL
    let url = Url::from_string("https://user@www.example.co.uk:8080/docs/../admin?query=value#hash")
        .expect("Failed to parse URL");

    println!("URL: {url}"); // https://user@www.example.co.uk:8080/docs/../admin?query=value#hash
    println!("Scheme: {}", url.scheme().as_str()); // https
    println!("Host: {}", url.host()); // www.example.co.uk
    println!("Sub domain: {}", url.sub_domain()); // www
    println!("Traversal: {}", url.contains_path_traversal()); // true

    let stripped = url.without_port().without_fragment_identifier();
    println!("Stripped: {stripped}"); // https://user@www.example.co.uk/docs/../admin?query=value

    // Rejected input is logged at debug level (RUST_LOG=url_value=debug)
    if let Err(err) = Url::from_string("http://example.com/?a==b") {
        println!("Error: {err}"); // Invalid URL
    }
}
