use wiremock::MockServer;

pub const API_KEY: &str = "unit-test-key";

/// A client pointed at the stub server instead of the live tenor endpoint.
pub fn client(server: &MockServer) -> tenor::Client<'static> {
    tenor::Client::new(API_KEY.to_owned()).with_endpoint(endpoint(server))
}

pub fn client_with_config(
    server: &MockServer,
    config: tenor::Config<'static>,
) -> tenor::Client<'static> {
    tenor::Client::with_config(API_KEY.to_owned(), Some(config)).with_endpoint(endpoint(server))
}

pub fn endpoint(server: &MockServer) -> String {
    format!("{}/v1/random", server.uri())
}
