use std::env;
use std::fs;
use std::path::Path;

// Settings are read with option_env! in src/config.rs, so every KEY=VALUE in
// .env is forwarded to rustc unless the real environment already defines it.
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults (API at http://localhost:8051/v1). Copy .env.example to .env to change them.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in [
        "API_BASE_URL",
        "API_VERSION",
        "AUTH_SIGNIN_PATH",
        "SIGN_IN_ROUTE",
        "FILTER_DEBOUNCE_MS",
        "DIALOG_CLEAR_DELAY_MS",
        "DEFAULT_PAGE_SIZE",
        "DEFAULT_SORT_BY",
        "ENABLE_LOGGING",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
