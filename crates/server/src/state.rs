use crate::client::HslClient;

pub struct AppState {
    pub client: HslClient,
}

impl AppState {
    pub fn new(client: HslClient) -> Self {
        Self { client }
    }
}
