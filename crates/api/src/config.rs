/// Server configuration loaded from environment variables.
///
/// Network settings have defaults suitable for local development; vendor
/// credentials are required and missing ones fail at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Google Maps / Geocoding API key, handed to the browser and used by
    /// the geocode proxy.
    pub maps_api_key: String,
    /// Supabase project base URL (also the object-storage host).
    pub supabase_url: String,
    /// Publishable anon key, handed to the browser.
    pub supabase_anon_key: String,
    /// Service-role key for storage writes.
    pub supabase_service_key: String,
    /// Storage bucket holding uploads and generated renders.
    pub storage_bucket: String,
    /// Token for the hosted img2img inference endpoint.
    pub huggingface_token: String,
    /// OpenAI API key for the fallback vendor.
    pub openai_api_key: String,
    /// Bearer token required on `/api/admin/*` routes.
    pub admin_token: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                     | Default                 |
    /// |-----------------------------|-------------------------|
    /// | `HOST`                      | `0.0.0.0`               |
    /// | `PORT`                      | `3000`                  |
    /// | `CORS_ORIGINS`              | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                    |
    /// | `STORAGE_BUCKET`            | `visualizer-images`     |
    /// | `GOOGLE_MAPS_API_KEY`       | required                |
    /// | `SUPABASE_URL`              | required                |
    /// | `SUPABASE_ANON_KEY`         | required                |
    /// | `SUPABASE_SERVICE_ROLE_KEY` | required                |
    /// | `HUGGINGFACE_API_TOKEN`     | required                |
    /// | `OPENAI_API_KEY`            | required                |
    /// | `ADMIN_API_TOKEN`           | required                |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing, which is the desired
    /// behaviour -- we want misconfiguration to fail fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage_bucket =
            std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "visualizer-images".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            maps_api_key: required("GOOGLE_MAPS_API_KEY"),
            supabase_url: required("SUPABASE_URL"),
            supabase_anon_key: required("SUPABASE_ANON_KEY"),
            supabase_service_key: required("SUPABASE_SERVICE_ROLE_KEY"),
            storage_bucket,
            huggingface_token: required("HUGGINGFACE_API_TOKEN"),
            openai_api_key: required("OPENAI_API_KEY"),
            admin_token: required("ADMIN_API_TOKEN"),
        }
    }
}

fn required(var: &str) -> String {
    let value = std::env::var(var).unwrap_or_else(|_| panic!("{var} must be set"));
    assert!(!value.is_empty(), "{var} must not be empty");
    value
}
