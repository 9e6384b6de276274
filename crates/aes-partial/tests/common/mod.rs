use std::sync::OnceLock;

use aes_partial::Block;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once per test binary. Honors `RUST_LOG`.
pub fn init_logging() {
    static INITIALIZED: OnceLock<()> = OnceLock::new();

    INITIALIZED.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

#[allow(dead_code)]
pub fn block(hex_str: &str) -> Block {
    hex::decode(hex_str)
        .expect("valid hex")
        .try_into()
        .expect("16 bytes")
}
